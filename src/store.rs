use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Local, NaiveDate};
use log::debug;

/// Writes each message's raw bytes to today's day folder, one `.eml` file per
/// message, named by save time at second granularity.
pub struct MailStore {
    root: PathBuf,
}

impl MailStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        MailStore { root: root.into() }
    }

    /// Day folder for `date` under the store root. Not created until the
    /// first save of that day.
    pub fn day_folder(&self, date: NaiveDate) -> PathBuf {
        self.root.join(date.format("%Y-%m-%d").to_string())
    }

    /// Write one message's full byte serialization to
    /// `<root>/<YYYY-MM-DD>/email_<HH-MM-SS>.eml` and return the path.
    ///
    /// Two saves within the same wall-clock second produce the same filename;
    /// the second silently overwrites the first.
    pub fn save(&self, content: &[u8], now: DateTime<Local>) -> Result<PathBuf> {
        let folder = self.day_folder(now.date_naive());
        fs::create_dir_all(&folder)
            .with_context(|| format!("Unable to create day folder {}", folder.display()))?;

        let path = folder.join(format!("email_{}.eml", now.format("%H-%M-%S")));
        fs::write(&path, content)
            .with_context(|| format!("Unable to write message file {}", path.display()))?;

        debug!("Wrote {} bytes to {}", content.len(), path.display());

        Ok(path)
    }
}
