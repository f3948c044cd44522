pub mod policies;
pub mod push_scheduler;
pub mod schedule_context;
pub mod schedule_policy;
pub mod types;
