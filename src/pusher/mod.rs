pub mod clock;
pub mod new_stock_pusher;
pub mod wake;
