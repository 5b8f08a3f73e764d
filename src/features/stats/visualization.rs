//! Terminal visualization for focus statistics.
//!
//! Provides text bar charts and sparklines for the `report` command.

use crate::features::focus::format_duration;

/// Characters for sparkline rendering.
const BAR_CHARS: [char; 8] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇'];
const FULL_BLOCK: char = '█';

/// Render a horizontal bar chart of second counts.
///
/// # Arguments
///
/// * `data` - Vec of (label, seconds) pairs
/// * `max_label_width` - Maximum width for labels
/// * `bar_width` - Width of the bar portion
///
/// # Returns
///
/// A multi-line string with the chart; each bar ends with the formatted duration.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_bar_chart(
    data: &[(String, u64)],
    max_label_width: usize,
    bar_width: usize,
) -> String {
    if data.is_empty() {
        return String::new();
    }

    let max_value = data.iter().map(|(_, v)| *v).max().unwrap_or(1).max(1);
    let mut lines = Vec::new();

    for (label, value) in data {
        let truncated_label = if label.chars().count() > max_label_width && max_label_width > 3 {
            let head: String = label.chars().take(max_label_width - 3).collect();
            format!("{head}...")
        } else {
            format!("{label:max_label_width$}")
        };

        let bar_length = ((*value as f64 / max_value as f64) * bar_width as f64) as usize;
        let bar = FULL_BLOCK.to_string().repeat(bar_length);
        let padding = " ".repeat(bar_width.saturating_sub(bar_length));

        lines.push(format!(
            "{truncated_label} |{bar}{padding} {}",
            format_duration(*value)
        ));
    }

    lines.join("\n")
}

/// Render a sparkline (compact inline chart).
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_sparkline(values: &[u64]) -> String {
    if values.is_empty() {
        return String::new();
    }

    let max_value = values.iter().max().copied().unwrap_or(1).max(1);

    values
        .iter()
        .map(|&v| {
            if v == 0 {
                BAR_CHARS[0]
            } else {
                let normalized = (v as f64 / max_value as f64 * 7.0) as usize;
                BAR_CHARS[normalized.clamp(1, 7)]
            }
        })
        .collect()
}
