use chrono::{Datelike, NaiveDateTime, Weekday};

use crate::types::trading_window::TradingWindow;

/// Weekday and session checks against local time.
///
/// Exchange holidays are not modelled: any Monday–Friday counts as a trading
/// day. With `test_mode` every check passes.
#[derive(Debug, Copy, Clone)]
pub struct CalendarPolicy {
    window: TradingWindow,
    test_mode: bool,
}

impl CalendarPolicy {
    pub fn new(window: TradingWindow, test_mode: bool) -> Self {
        Self { window, test_mode }
    }

    pub fn window(&self) -> &TradingWindow {
        &self.window
    }

    pub fn test_mode(&self) -> bool {
        self.test_mode
    }

    pub fn is_trading_day(&self, now: NaiveDateTime) -> bool {
        if self.test_mode {
            return true;
        }

        !matches!(now.weekday(), Weekday::Sat | Weekday::Sun)
    }

    pub fn is_in_trading_hours(&self, now: NaiveDateTime) -> bool {
        if self.test_mode {
            return true;
        }

        self.window.contains(now.time())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    // 2024-06-03 is a Monday.
    fn monday_at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 3)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn day(offset: i64) -> NaiveDateTime {
        monday_at(10, 0) + chrono::Duration::days(offset)
    }

    fn policy() -> CalendarPolicy {
        CalendarPolicy::new(TradingWindow::default(), false)
    }

    #[test]
    fn weekdays_are_trading_days() {
        for offset in 0..5 {
            assert!(policy().is_trading_day(day(offset)), "offset {offset}");
        }
    }

    #[test]
    fn weekends_are_not_trading_days() {
        assert_eq!(day(5).weekday(), Weekday::Sat);
        assert!(!policy().is_trading_day(day(5)));
        assert!(!policy().is_trading_day(day(6)));
    }

    #[test]
    fn test_mode_forces_trading_day_and_hours() {
        let policy = CalendarPolicy::new(TradingWindow::default(), true);

        assert!(policy.is_trading_day(day(6)));
        assert!(policy.is_in_trading_hours(monday_at(3, 0)));
        assert!(policy.is_in_trading_hours(day(5) + chrono::Duration::hours(12)));
    }

    #[test]
    fn session_boundaries_are_inclusive() {
        for (hour, minute) in [(9, 30), (11, 30), (13, 0), (15, 0)] {
            assert!(
                policy().is_in_trading_hours(monday_at(hour, minute)),
                "{hour:02}:{minute:02}"
            );
        }
    }

    #[test]
    fn times_inside_sessions_are_trading_hours() {
        for (hour, minute) in [(9, 31), (10, 45), (11, 29), (13, 1), (14, 30), (14, 59)] {
            assert!(
                policy().is_in_trading_hours(monday_at(hour, minute)),
                "{hour:02}:{minute:02}"
            );
        }
    }

    #[test]
    fn times_outside_sessions_are_not_trading_hours() {
        for (hour, minute) in [(9, 29), (11, 31), (12, 0), (12, 59), (15, 1), (23, 0)] {
            assert!(
                !policy().is_in_trading_hours(monday_at(hour, minute)),
                "{hour:02}:{minute:02}"
            );
        }
    }
}
