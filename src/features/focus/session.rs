//! Session records.
//!
//! A session is one completed, or abandoned-with-progress, timer run.

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::error::FocusError;

/// Label used when the user did not enter one.
pub const DEFAULT_LABEL: &str = "Focus";

/// A persisted focus session. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    /// Creation time in milliseconds, unique per engine
    pub id: i64,
    /// Elapsed focused seconds
    pub length_sec: u64,
    /// User label
    pub label: String,
    /// When the session ended
    pub timestamp: DateTime<Utc>,
}

impl SessionRecord {
    /// Create a record, substituting [`DEFAULT_LABEL`] for an empty label.
    #[must_use]
    pub fn new(id: i64, length_sec: u64, label: &str, timestamp: DateTime<Utc>) -> Self {
        let label = if label.is_empty() {
            DEFAULT_LABEL.to_string()
        } else {
            label.to_string()
        };

        Self {
            id,
            length_sec,
            label,
            timestamp,
        }
    }

    /// Completion time in the local timezone.
    #[must_use]
    pub fn timestamp_local(&self) -> DateTime<Local> {
        self.timestamp.with_timezone(&Local)
    }
}

/// Receives session records when a run ends.
pub trait SessionSink {
    /// Persist one record.
    ///
    /// # Errors
    ///
    /// Returns an error if the record could not be stored.
    fn record(&mut self, record: SessionRecord) -> Result<(), FocusError>;
}

impl SessionSink for Vec<SessionRecord> {
    fn record(&mut self, record: SessionRecord) -> Result<(), FocusError> {
        self.insert(0, record);
        Ok(())
    }
}

/// Source of the current instant.
pub trait Clock {
    /// The current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<F> Clock for F
where
    F: Fn() -> DateTime<Utc>,
{
    fn now(&self) -> DateTime<Utc> {
        self()
    }
}
