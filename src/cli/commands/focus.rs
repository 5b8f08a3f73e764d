//! Session history commands.
//!
//! Handles `history`, `report` and `clear`.

use chrono::Local;

use crate::cli::args::OutputFormat;
use crate::config::Config;
use crate::error::FocusError;
use crate::features::focus::{FocusReport, SessionAggregator, SessionStore};
use crate::features::stats::render_sparkline;
use crate::output::{format_sessions, format_success_pretty, to_json};
use crate::storage::KeyValueStore;

/// List stored sessions, newest first.
///
/// # Errors
///
/// Returns an error if the store cannot be read or output formatting fails.
pub fn history<S: KeyValueStore>(
    store: &mut SessionStore<S>,
    config: &Config,
    limit: Option<usize>,
    format: OutputFormat,
) -> Result<String, FocusError> {
    let aggregator = SessionAggregator::new(store);
    let sessions = aggregator.load_all()?;
    let limit = limit.unwrap_or(config.display.history_limit);

    format_sessions(&sessions, limit, format)
}

/// Show the weekly and daily focus report.
///
/// # Errors
///
/// Returns an error if the store cannot be read or output formatting fails.
pub fn report<S: KeyValueStore>(
    store: &mut SessionStore<S>,
    config: &Config,
    format: OutputFormat,
) -> Result<String, FocusError> {
    let aggregator = SessionAggregator::new(store);
    let report = FocusReport::generate(&aggregator, &Local::now())?;

    match format {
        OutputFormat::Json => to_json(&report),
        OutputFormat::Pretty => {
            if report.session_count == 0 {
                return Ok("No sessions yet!\n\nStart one with: focuspot timer".to_string());
            }

            let mut output = report.format(&config.display.date_format);
            let trend: Vec<u64> = report.daily.iter().map(|d| d.total_sec).collect();
            output.push_str(&format!("\n\nTrend: {}", render_sparkline(&trend)));
            Ok(output)
        }
    }
}

/// Delete every stored session.
///
/// # Errors
///
/// Returns [`FocusError::Confirmation`] without `--force`, or an error if the
/// store cannot be written.
pub fn clear<S: KeyValueStore>(
    store: &mut SessionStore<S>,
    force: bool,
    format: OutputFormat,
) -> Result<String, FocusError> {
    if !force {
        return Err(FocusError::Confirmation(
            "This will delete all focus session history.\nUse --force to confirm.".to_string(),
        ));
    }

    let mut aggregator = SessionAggregator::new(store);
    aggregator.clear_all()?;

    match format {
        OutputFormat::Json => to_json(&serde_json::json!({ "cleared": true })),
        OutputFormat::Pretty => Ok(format_success_pretty("Focus session history cleared.")),
    }
}
