use crate::calendar::calendar_policy::CalendarPolicy;
use crate::scheduling::{
    policies::{
        already_pushed_policy::AlreadyPushedPolicy, trading_day_policy::TradingDayPolicy,
        trading_hours_policy::TradingHoursPolicy,
    },
    schedule_context::ScheduleContext,
    schedule_policy::SchedulePolicy,
    types::ScheduleDecision,
};

/// Runs policies in order; the first one that objects decides the skip.
pub struct PushScheduler {
    policies: Vec<Box<dyn SchedulePolicy + Send>>,
}

impl PushScheduler {
    pub fn new(policies: Vec<Box<dyn SchedulePolicy + Send>>) -> Self {
        Self { policies }
    }

    pub fn for_calendar(calendar: CalendarPolicy) -> Self {
        Self::new(vec![
            Box::new(TradingDayPolicy::new(calendar)),
            Box::new(AlreadyPushedPolicy),
            Box::new(TradingHoursPolicy::new(calendar)),
        ])
    }

    pub fn decide(&mut self, context: &ScheduleContext<'_>) -> ScheduleDecision {
        for policy in self.policies.iter_mut() {
            if let Some(reason) = policy.should_poll(context) {
                return ScheduleDecision::Skip(reason);
            }
        }

        ScheduleDecision::Poll
    }
}
