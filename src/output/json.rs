//! JSON output formatting for focuspot.

use serde::Serialize;
use serde_json::json;

use crate::error::FocusError;
use crate::features::focus::SessionRecord;

/// Format sessions as JSON
///
/// # Errors
///
/// Returns `FocusError::Parse` if JSON serialization fails.
pub fn format_sessions_json(
    sessions: &[SessionRecord],
    limit: usize,
) -> Result<String, FocusError> {
    let items: Vec<&SessionRecord> = sessions.iter().take(limit).collect();
    let output = json!({
        "count": sessions.len(),
        "items": items
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `FocusError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, FocusError> {
    Ok(serde_json::to_string_pretty(value)?)
}
