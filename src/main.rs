mod calendar;
mod config;
mod ledger;
mod notify;
mod pusher;
mod scheduling;
mod source;
mod types;

use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::calendar::calendar_policy::CalendarPolicy;
use crate::config::pusher_config::PusherConfig;
use crate::ledger::push_ledger::PushLedger;
use crate::notify::wecom_notifier::WeComNotifier;
use crate::pusher::clock::{SystemClock, TokioSleeper};
use crate::pusher::new_stock_pusher::NewStockPusher;
use crate::source::iwencai_source::IwencaiSource;

const CLEAR_ACTION: &str = "clear";
const DEFAULT_LOG_FILTER: &str = "new_stock_pusher=info";

/// Pushes today's new stock listings to a WeCom group once per trading day.
#[derive(Debug, Clone, Parser)]
#[command(version)]
struct Args {
    /// `clear` deletes the recorded push status and exits; anything else runs the loop.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    action: Vec<String>,
}

impl Args {
    fn is_clear(&self) -> bool {
        matches!(self.action.as_slice(), [action] if action == CLEAR_ACTION)
    }
}

/// `RUST_LOG` when set and valid, otherwise the crate at info.
fn log_filter(rust_log: Option<String>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok()))
        .with_target(false)
        .init();

    let args = Args::parse();

    if args.is_clear() {
        let ledger = PushLedger::new(PusherConfig::status_file_from_env());
        if ledger.clear()? {
            println!("cleared push status {}", ledger.path().display());
        }
        return Ok(());
    }

    let config = PusherConfig::from_env()?;
    let notifier = WeComNotifier::new(config.webhook.clone())?;
    if !notifier.is_configured() {
        warn!("WECHAT_WEBHOOK not set; pushes will fail until it is configured");
    }

    info!(
        test_mode = config.test_mode,
        window = ?config.trading_window,
        "starting new stock pusher"
    );

    let mut pusher = NewStockPusher::new(
        CalendarPolicy::new(config.trading_window, config.test_mode),
        PushLedger::new(config.status_file),
        Box::new(IwencaiSource::new()?),
        Box::new(notifier),
        Box::new(SystemClock),
        Box::new(TokioSleeper),
    );

    pusher.run().await
}
