pub mod pusher_config;
