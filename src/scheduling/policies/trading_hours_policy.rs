use std::time::Duration;

use chrono::{NaiveDateTime, Timelike};

use crate::calendar::calendar_policy::CalendarPolicy;
use crate::scheduling::{
    schedule_context::ScheduleContext,
    schedule_policy::SchedulePolicy,
    types::{OFF_HOURS_POLL, SkipReason},
};

pub struct TradingHoursPolicy {
    calendar: CalendarPolicy,
}

impl TradingHoursPolicy {
    pub fn new(calendar: CalendarPolicy) -> Self {
        Self { calendar }
    }

    /// Wait until the next session opens today, or a flat poll once both
    /// sessions have started.
    fn until_next_session(&self, now: NaiveDateTime) -> Duration {
        let window = self.calendar.window();
        let time = now.time();
        let elapsed = Duration::from_secs(time.num_seconds_from_midnight().into())
            + Duration::from_nanos(time.nanosecond().into());

        let next_start = [window.morning, window.afternoon]
            .into_iter()
            .map(|session| Duration::from_secs(session.start_seconds().into()))
            .find(|start| elapsed < *start);

        match next_start {
            Some(start) => start - elapsed,
            None => OFF_HOURS_POLL,
        }
    }
}

impl SchedulePolicy for TradingHoursPolicy {
    fn should_poll(&mut self, ctx: &ScheduleContext<'_>) -> Option<SkipReason> {
        if self.calendar.is_in_trading_hours(ctx.now) {
            return None;
        }

        Some(SkipReason::OutsideTradingHours {
            wait: self.until_next_session(ctx.now),
        })
    }
}
