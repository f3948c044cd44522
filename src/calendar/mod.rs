pub mod calendar_policy;
