//! History management
//!
//! The log is a single JSON object mapping `YYYY-MM-DD` to that day's visits:
//!
//! ```json
//! {
//!   "2024-05-01": [
//!     { "url": "https://example.com", "timestamp": "2024-05-01T09:12:44+02:00" }
//!   ]
//! }
//! ```
//!
//! Every append reads the whole file and writes it back.

use chrono::{DateTime, FixedOffset, Local};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub url: String,
    pub timestamp: String,
}

impl HistoryEntry {
    fn sort_key(&self) -> (Option<DateTime<FixedOffset>>, &str) {
        (
            DateTime::parse_from_rfc3339(&self.timestamp).ok(),
            self.timestamp.as_str(),
        )
    }
}

/// Visits grouped by calendar date
pub type HistoryLog = BTreeMap<String, Vec<HistoryEntry>>;

#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record a visit at the current local time
    pub fn record_visit(&self, url: &str) -> Result<()> {
        self.append(url, &Local::now().to_rfc3339())
    }

    /// Append a visit under the date of `timestamp` and rewrite the log.
    pub fn append(&self, url: &str, timestamp: &str) -> Result<()> {
        let mut log = self.load()?;

        let day = log.entry(date_key(timestamp).to_string()).or_default();
        day.push(HistoryEntry {
            url: url.to_string(),
            timestamp: timestamp.to_string(),
        });
        day.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

        self.write(&log)?;

        tracing::debug!(url = %url, timestamp = %timestamp, "Recorded history entry");
        Ok(())
    }

    /// Read the full log. A missing or unreadable-as-JSON file is an empty log.
    pub fn load(&self) -> Result<HistoryLog> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(HistoryLog::new()),
            Err(e) => return Err(e.into()),
        };

        if contents.trim().is_empty() {
            return Ok(HistoryLog::new());
        }

        match serde_json::from_str(&contents) {
            Ok(log) => Ok(log),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "History file is corrupt, starting a new log"
                );
                Ok(HistoryLog::new())
            }
        }
    }

    /// Entries recorded on `date` (`YYYY-MM-DD`), oldest first
    pub fn entries_on(&self, date: &str) -> Result<Vec<HistoryEntry>> {
        Ok(self.load()?.remove(date).unwrap_or_default())
    }

    /// Most recent entries across all days, newest first
    pub fn recent(&self, limit: usize) -> Result<Vec<HistoryEntry>> {
        Ok(self
            .load()?
            .into_values()
            .rev()
            .flat_map(|day| day.into_iter().rev())
            .take(limit)
            .collect())
    }

    /// Case-insensitive URL search, newest first
    pub fn search(&self, query: &str, limit: usize) -> Result<Vec<HistoryEntry>> {
        let needle = query.to_lowercase();
        Ok(self
            .load()?
            .into_values()
            .rev()
            .flat_map(|day| day.into_iter().rev())
            .filter(|entry| entry.url.to_lowercase().contains(&needle))
            .take(limit)
            .collect())
    }

    /// Delete the log file
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, log: &HistoryLog) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(log)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// Calendar date portion of an ISO-8601 timestamp
fn date_key(timestamp: &str) -> &str {
    let timestamp = timestamp.trim();
    timestamp
        .split(|c: char| c == 'T' || c == ' ')
        .next()
        .unwrap_or(timestamp)
}
