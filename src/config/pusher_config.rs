use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use url::Url;

use crate::types::trading_window::TradingWindow;

pub const DEFAULT_STATUS_FILE: &str = "pushed_status.json";

#[derive(Debug, Clone)]
pub struct PusherConfig {
    /// Group robot webhook. Absent or unparsable means `None`; every delivery then fails.
    pub webhook: Option<Url>,

    /// Treat every moment as inside a trading session.
    pub test_mode: bool,

    pub status_file: PathBuf,

    pub trading_window: TradingWindow,
}

impl PusherConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Ledger path only, so `clear` works even with a broken trading window file.
    pub fn status_file_from_env() -> PathBuf {
        status_file(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let webhook = lookup("WECHAT_WEBHOOK")
            .filter(|raw| !raw.trim().is_empty())
            .and_then(|raw| match parse_webhook(raw.trim()) {
                Ok(url) => Some(url),
                Err(error) => {
                    tracing::error!("{error:#}; deliveries will fail until it is fixed");
                    None
                }
            });

        let test_mode = lookup("TEST_MODE").is_some_and(|raw| is_enabled(&raw));

        let trading_window = match lookup("TRADING_WINDOW_FILE") {
            Some(path) => TradingWindow::from_file(Path::new(&path))?,
            None => TradingWindow::default(),
        };

        Ok(Self {
            webhook,
            test_mode,
            status_file: status_file(&lookup),
            trading_window,
        })
    }
}

fn status_file(lookup: impl Fn(&str) -> Option<String>) -> PathBuf {
    lookup("PUSH_STATUS_FILE")
        .filter(|raw| !raw.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STATUS_FILE))
}

fn parse_webhook(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).context("WECHAT_WEBHOOK is not a valid URL")?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => bail!("WECHAT_WEBHOOK must be http(s), got {other}"),
    }
}

fn is_enabled(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("true")
}
