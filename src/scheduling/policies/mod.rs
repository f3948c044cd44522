pub mod already_pushed_policy;
pub mod trading_day_policy;
pub mod trading_hours_policy;
