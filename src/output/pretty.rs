use colored::Colorize;

use crate::features::focus::{format_duration, SessionRecord};

/// Format the session history list.
///
/// Each line reads `{label} — {duration} on {local date and time}`.
pub fn format_sessions_pretty(sessions: &[SessionRecord], limit: usize) -> String {
    if sessions.is_empty() {
        return "No sessions yet!".to_string();
    }

    let shown = sessions.len().min(limit);
    let mut output = format!("Focus Sessions ({} of {})\n", shown, sessions.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for session in sessions.iter().take(limit) {
        let when = session.timestamp_local().format("%Y-%m-%d %H:%M");
        output.push_str(&format!(
            "{} — {} on {}\n",
            session.label.bold(),
            format_duration(session.length_sec).green(),
            when.to_string().dimmed()
        ));
    }

    output
}

/// Format a confirmation line.
pub fn format_success_pretty(message: &str) -> String {
    format!("{} {}", "✓".green(), message)
}
