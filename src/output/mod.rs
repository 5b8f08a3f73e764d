//! Output formatting for focuspot.
//!
//! This module provides formatters for displaying session data as text or JSON.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::FocusError;
use crate::features::focus::SessionRecord;

pub use json::*;
pub use pretty::*;

/// Format the session history based on output format
///
/// # Errors
///
/// Returns `FocusError::Parse` if JSON serialization fails.
pub fn format_sessions(
    sessions: &[SessionRecord],
    limit: usize,
    format: OutputFormat,
) -> Result<String, FocusError> {
    match format {
        OutputFormat::Pretty => Ok(format_sessions_pretty(sessions, limit)),
        OutputFormat::Json => format_sessions_json(sessions, limit),
    }
}
