pub mod push_status;
pub mod stock_listing;
pub mod trading_window;
