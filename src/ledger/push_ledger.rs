use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use tracing::{debug, warn};

use crate::types::push_status::PushStatus;

/// File-backed record of the last successful push.
///
/// Reads fail open: a missing, empty, or unparsable file means "not pushed
/// yet". Writes go through a temp file and a rename, and are synced before
/// returning.
///
/// There is no file locking; only one process may use a given path.
#[derive(Debug, Clone)]
pub struct PushLedger {
    path: PathBuf,
}

impl PushLedger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Option<PushStatus> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no push status recorded yet");
                return None;
            }
            Err(error) => {
                warn!(path = %self.path.display(), %error, "unreadable push status; treating as not pushed");
                return None;
            }
        };

        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        match serde_json::from_str::<PushStatus>(raw) {
            Ok(status) => Some(status),
            Err(error) => {
                warn!(path = %self.path.display(), %error, "corrupt push status; treating as not pushed");
                None
            }
        }
    }

    pub fn has_pushed_today(&self, now: NaiveDateTime) -> bool {
        self.load()
            .is_some_and(|status| status.is_for(now.date()))
    }

    pub fn record_success(&self, now: NaiveDateTime) -> Result<PushStatus> {
        let status = PushStatus::at(now);
        let json = serde_json::to_string(&status).context("failed to encode push status")?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let temp_path = self.path.with_extension("tmp");
        let write_temp = || -> std::io::Result<()> {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(json.as_bytes())?;
            file.sync_all()?;
            fs::rename(&temp_path, &self.path)
        };

        if let Err(error) = write_temp() {
            let _ = fs::remove_file(&temp_path);
            return Err(error)
                .with_context(|| format!("failed to write push status {}", self.path.display()));
        }

        Ok(status)
    }

    /// Deletes the record. Returns whether a file was removed.
    pub fn clear(&self) -> Result<bool> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(false),
            Err(error) => Err(error)
                .with_context(|| format!("failed to remove push status {}", self.path.display())),
        }
    }
}
