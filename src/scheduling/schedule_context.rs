use chrono::NaiveDateTime;

use crate::ledger::push_ledger::PushLedger;

pub struct ScheduleContext<'a> {
    pub now: NaiveDateTime,
    pub ledger: &'a PushLedger,
}
