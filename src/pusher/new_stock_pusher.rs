use anyhow::{Context, Result};
use tracing::{error, info, warn};

use crate::calendar::calendar_policy::CalendarPolicy;
use crate::ledger::push_ledger::PushLedger;
use crate::notify::{DynamicNotifier, message::format_message};
use crate::pusher::clock::{Clock, Sleeper};
use crate::pusher::wake::{CycleOutcome, Wake};
use crate::scheduling::push_scheduler::PushScheduler;
use crate::scheduling::schedule_context::ScheduleContext;
use crate::scheduling::types::{RETRY_WAIT, ScheduleDecision, until_next_check};
use crate::source::DynamicListingSource;

/// Daily new-listing push loop.
///
/// Each cycle gates on the schedule, fetches, notifies and records, then
/// hands back a [`Wake`]. Only a ledger write failure ends the loop.
pub struct NewStockPusher {
    calendar: CalendarPolicy,
    scheduler: PushScheduler,
    ledger: PushLedger,
    source: DynamicListingSource,
    notifier: DynamicNotifier,
    clock: Box<dyn Clock>,
    sleeper: Box<dyn Sleeper>,
}

impl NewStockPusher {
    pub fn new(
        calendar: CalendarPolicy,
        ledger: PushLedger,
        source: DynamicListingSource,
        notifier: DynamicNotifier,
        clock: Box<dyn Clock>,
        sleeper: Box<dyn Sleeper>,
    ) -> Self {
        Self {
            calendar,
            scheduler: PushScheduler::for_calendar(calendar),
            ledger,
            source,
            notifier,
            clock,
            sleeper,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        info!(
            status_file = %self.ledger.path().display(),
            test_mode = self.calendar.test_mode(),
            "monitoring new listings"
        );

        loop {
            self.step().await?;
        }
    }

    /// One cycle followed by its wait.
    pub async fn step(&mut self) -> Result<Wake> {
        let wake = self.tick().await?;
        self.sleeper.sleep(wake.sleep).await;

        Ok(wake)
    }

    pub async fn tick(&mut self) -> Result<Wake> {
        let now = self.clock.now();
        info!(date = %now.date(), test_mode = self.calendar.test_mode(), "checking new listings");

        let context = ScheduleContext {
            now,
            ledger: &self.ledger,
        };

        if let ScheduleDecision::Skip(reason) = self.scheduler.decide(&context) {
            let wake = Wake::skipped(reason, now);
            info!(?reason, wait_secs = wake.sleep.as_secs(), "not due; waiting");

            return Ok(wake);
        }

        let listings = match self.source.fetch_new_listings().await {
            Ok(listings) => listings,
            Err(error) => {
                error!("fetching new listings failed: {error:?}");
                warn!(wait_secs = RETRY_WAIT.as_secs(), "no listing data; will retry");

                return Ok(Wake::new(CycleOutcome::FetchFailed, RETRY_WAIT));
            }
        };

        let message = format_message(&listings, self.clock.now());
        if let Err(error) = self.notifier.send(&message).await {
            warn!(
                wait_secs = RETRY_WAIT.as_secs(),
                "push failed: {error:#}; will retry"
            );

            return Ok(Wake::new(CycleOutcome::DeliveryFailed, RETRY_WAIT));
        }

        let pushed_at = self.clock.now();
        self.ledger
            .record_success(pushed_at)
            .context("push delivered but recording it failed")?;

        let wake = Wake::new(CycleOutcome::Pushed, until_next_check(pushed_at));
        info!(
            listings = listings.len(),
            wait_secs = wake.sleep.as_secs(),
            "pushed today's listings"
        );

        Ok(wake)
    }
}
