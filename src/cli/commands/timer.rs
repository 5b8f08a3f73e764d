//! Interactive timer command.

use crate::cli::args::TimerArgs;
use crate::config::Config;
use crate::error::FocusError;
use crate::features::focus::{format_duration, SessionStore};
use crate::storage::KeyValueStore;
use crate::tui::{self, App};

/// Open the live timer and return a summary line once it closes.
///
/// # Errors
///
/// Returns an error if history cannot be read or the terminal fails.
pub fn timer<S: KeyValueStore>(
    store: SessionStore<S>,
    config: &Config,
    args: TimerArgs,
) -> Result<String, FocusError> {
    let mut app = App::new(store, config, args)?;
    tui::run(&mut app)?;

    let summary = format!(
        "This week: {} across {} sessions in total.",
        format_duration(app.report.week_total_sec()),
        app.report.session_count
    );

    Ok(match app.notice {
        Some(notice) => format!("{summary}\nwarning: {notice}"),
        None => summary,
    })
}
