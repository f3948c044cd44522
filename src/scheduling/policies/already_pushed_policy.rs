use crate::scheduling::{
    schedule_context::ScheduleContext, schedule_policy::SchedulePolicy, types::SkipReason,
};

pub struct AlreadyPushedPolicy;

impl SchedulePolicy for AlreadyPushedPolicy {
    fn should_poll(&mut self, ctx: &ScheduleContext<'_>) -> Option<SkipReason> {
        if ctx.ledger.has_pushed_today(ctx.now) {
            Some(SkipReason::AlreadyPushedToday)
        } else {
            None
        }
    }
}
