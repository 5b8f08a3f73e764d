//! Error types for focuspot.

use thiserror::Error;

/// Errors that can occur in focuspot.
#[derive(Debug, Error)]
pub enum FocusError {
    /// Configuration could not be loaded, saved, or resolved.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The key-value database failed.
    #[error("Database error: {0}")]
    Database(String),

    /// The backing store has no space left for new data.
    #[error("Storage is full: {0}")]
    StorageFull(String),

    /// Terminal or filesystem I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Data could not be serialized or parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A destructive action was requested without confirmation.
    #[error("{0}")]
    Confirmation(String),
}

impl From<serde_json::Error> for FocusError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<rusqlite::Error> for FocusError {
    fn from(e: rusqlite::Error) -> Self {
        match e.sqlite_error_code() {
            Some(rusqlite::ffi::ErrorCode::DiskFull) => Self::StorageFull(e.to_string()),
            _ => Self::Database(e.to_string()),
        }
    }
}

impl FocusError {
    /// Whether the error means the store ran out of space.
    #[must_use]
    pub const fn is_storage_full(&self) -> bool {
        matches!(self, Self::StorageFull(_))
    }
}
