use std::time::Duration;

use chrono::NaiveDateTime;

pub const NOT_TRADING_DAY_WAIT: Duration = Duration::from_secs(6 * 3600);
pub const OFF_HOURS_POLL: Duration = Duration::from_secs(3600);
pub const RETRY_WAIT: Duration = Duration::from_secs(30 * 60);

/// Hour of the following day at which an already-pushed loop wakes up.
pub const NEXT_CHECK_HOUR: u32 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleDecision {
    Poll,
    Skip(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NotTradingDay,
    AlreadyPushedToday,
    OutsideTradingHours { wait: Duration },
}

impl SkipReason {
    pub fn wait(&self, now: NaiveDateTime) -> Duration {
        match self {
            Self::NotTradingDay => NOT_TRADING_DAY_WAIT,
            Self::AlreadyPushedToday => until_next_check(now),
            Self::OutsideTradingHours { wait } => *wait,
        }
    }
}

/// Time left until `NEXT_CHECK_HOUR`:00 on the day after `now`, never negative.
pub fn until_next_check(now: NaiveDateTime) -> Duration {
    let Some(next_check) = now
        .date()
        .succ_opt()
        .and_then(|day| day.and_hms_opt(NEXT_CHECK_HOUR, 0, 0))
    else {
        return Duration::ZERO;
    };

    (next_check - now).to_std().unwrap_or_default()
}
