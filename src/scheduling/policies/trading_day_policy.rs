use crate::calendar::calendar_policy::CalendarPolicy;
use crate::scheduling::{
    schedule_context::ScheduleContext, schedule_policy::SchedulePolicy, types::SkipReason,
};

pub struct TradingDayPolicy {
    calendar: CalendarPolicy,
}

impl TradingDayPolicy {
    pub fn new(calendar: CalendarPolicy) -> Self {
        Self { calendar }
    }
}

impl SchedulePolicy for TradingDayPolicy {
    fn should_poll(&mut self, ctx: &ScheduleContext<'_>) -> Option<SkipReason> {
        if self.calendar.is_trading_day(ctx.now) {
            None
        } else {
            Some(SkipReason::NotTradingDay)
        }
    }
}
