use std::time::Duration;

use chrono::NaiveDateTime;

use crate::scheduling::types::SkipReason;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    NotTradingDay,
    AlreadyPushedToday,
    OutsideTradingHours,
    FetchFailed,
    DeliveryFailed,
    Pushed,
}

impl From<SkipReason> for CycleOutcome {
    fn from(reason: SkipReason) -> Self {
        match reason {
            SkipReason::NotTradingDay => Self::NotTradingDay,
            SkipReason::AlreadyPushedToday => Self::AlreadyPushedToday,
            SkipReason::OutsideTradingHours { .. } => Self::OutsideTradingHours,
        }
    }
}

/// What one cycle did and how long to wait before the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wake {
    pub outcome: CycleOutcome,
    pub sleep: Duration,
}

impl Wake {
    pub fn new(outcome: CycleOutcome, sleep: Duration) -> Self {
        Self { outcome, sleep }
    }

    pub fn skipped(reason: SkipReason, now: NaiveDateTime) -> Self {
        Self::new(reason.into(), reason.wait(now))
    }
}
