use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::{NaiveTime, Timelike};
use serde::Deserialize;

/// One continuous trading session, local time, minute resolution.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
pub struct Session {
    pub start_hour: u8,
    pub start_minute: u8,
    pub end_hour: u8,
    pub end_minute: u8,
}

impl Session {
    pub const fn new(start_hour: u8, start_minute: u8, end_hour: u8, end_minute: u8) -> Self {
        Self {
            start_hour,
            start_minute,
            end_hour,
            end_minute,
        }
    }

    /// Inclusive on both ends, compared by (hour, minute).
    pub fn contains(&self, time: NaiveTime) -> bool {
        let now = (time.hour(), time.minute());
        let start = (u32::from(self.start_hour), u32::from(self.start_minute));
        let end = (u32::from(self.end_hour), u32::from(self.end_minute));

        start <= now && now <= end
    }

    /// Seconds from midnight to the start of the session.
    pub fn start_seconds(&self) -> u32 {
        u32::from(self.start_hour) * 3600 + u32::from(self.start_minute) * 60
    }

    fn end_seconds(&self) -> u32 {
        u32::from(self.end_hour) * 3600 + u32::from(self.end_minute) * 60
    }

    fn validate(&self) -> Result<()> {
        if self.start_hour > 23 || self.end_hour > 23 {
            bail!("session hours must be within 0-23");
        }
        if self.start_minute > 59 || self.end_minute > 59 {
            bail!("session minutes must be within 0-59");
        }
        if self.start_seconds() > self.end_seconds() {
            bail!(
                "session starts at {:02}:{:02} but ends at {:02}:{:02}",
                self.start_hour,
                self.start_minute,
                self.end_hour,
                self.end_minute
            );
        }
        Ok(())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
pub struct TradingWindow {
    pub morning: Session,
    pub afternoon: Session,
}

impl Default for TradingWindow {
    fn default() -> Self {
        Self {
            morning: Session::new(9, 30, 11, 30),
            afternoon: Session::new(13, 0, 15, 0),
        }
    }
}

impl TradingWindow {
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read trading window {}", path.display()))?;

        let window: TradingWindow = serde_yaml::from_str(&raw)
            .with_context(|| format!("failed to parse trading window {}", path.display()))?;

        window
            .validate()
            .with_context(|| format!("invalid trading window {}", path.display()))?;

        Ok(window)
    }

    pub fn contains(&self, time: NaiveTime) -> bool {
        self.morning.contains(time) || self.afternoon.contains(time)
    }

    fn validate(&self) -> Result<()> {
        self.morning.validate().context("invalid morning session")?;
        self.afternoon
            .validate()
            .context("invalid afternoon session")?;

        if self.morning.end_seconds() > self.afternoon.start_seconds() {
            bail!("morning session must end before the afternoon session starts");
        }
        Ok(())
    }
}
