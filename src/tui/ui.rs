//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, Gauge, GraphType, Paragraph,
    },
    Frame,
};

use crate::features::focus::{format_clock, format_duration, Phase, WEEKDAY_LABELS};
use crate::storage::KeyValueStore;
use crate::tui::app::{App, InputMode};

/// Render the application UI.
pub fn render<S: KeyValueStore>(frame: &mut Frame<'_>, app: &App<S>) {
    // Create layout: header, timer, charts, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(7), // Timer
            Constraint::Min(8),    // Charts
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_timer(frame, app, chunks[1]);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[2]);
    render_weekly(frame, app, charts[0]);
    render_daily(frame, app, charts[1]);

    render_status_bar(frame, app, chunks[3]);
}

/// Render the header.
fn render_header<S: KeyValueStore>(frame: &mut Frame<'_>, app: &App<S>, area: Rect) {
    let label = if app.label_input.is_empty() {
        "(no label)"
    } else {
        app.label_input.as_str()
    };
    let editing = match app.mode {
        InputMode::EditDuration => format!("  duration: {}▏", app.duration_input),
        InputMode::EditLabel => format!("  label: {}▏", app.label_input),
        InputMode::Normal | InputMode::ConfirmClear => format!("  next: {}", app.duration_input),
    };

    let title = Line::from(vec![
        Span::styled(
            format!(" {label} "),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(editing, Style::default().fg(Color::DarkGray)),
    ]);

    let header = Paragraph::new(title).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" focuspot "),
    );

    frame.render_widget(header, area);
}

/// Render the countdown and progress gauge.
fn render_timer<S: KeyValueStore>(frame: &mut Frame<'_>, app: &App<S>, area: Rect) {
    let phase = app.engine.phase();
    let color = match phase {
        Phase::Running => Color::Green,
        Phase::Paused => Color::Yellow,
        Phase::Idle | Phase::Completed => Color::White,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(format!(" {phase} "));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let clock = Paragraph::new(Span::styled(
        format_clock(app.engine.remaining_sec()),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(clock, rows[0]);

    let progress = app.engine.progress().clamp(0.0, 1.0);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color).bg(Color::Black))
        .ratio(progress)
        .label(format!(
            "{} / {}",
            format_duration(app.engine.elapsed_sec()),
            format_duration(app.engine.duration_sec())
        ));
    frame.render_widget(gauge, rows[1]);
}

/// Render this week's bar chart.
fn render_weekly<S: KeyValueStore>(frame: &mut Frame<'_>, app: &App<S>, area: Rect) {
    let bars: Vec<Bar<'_>> = WEEKDAY_LABELS
        .iter()
        .zip(app.report.weekly)
        .map(|(label, sec)| {
            Bar::default()
                .value(sec)
                .label(Line::from(*label))
                .text_value(if sec == 0 {
                    String::new()
                } else {
                    format_duration(sec)
                })
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(
                    " This week: {} ",
                    format_duration(app.report.week_total_sec())
                )),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(5)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));

    frame.render_widget(chart, area);
}

/// Render the all-time daily line chart.
#[allow(clippy::cast_precision_loss)]
fn render_daily<S: KeyValueStore>(frame: &mut Frame<'_>, app: &App<S>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Focus time (all time) ");

    if app.report.daily.is_empty() {
        let empty = Paragraph::new("No sessions yet!")
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let points: Vec<(f64, f64)> = app
        .report
        .daily
        .iter()
        .enumerate()
        .map(|(i, d)| (i as f64, d.total_sec as f64))
        .collect();
    let max_sec = app.report.daily.iter().map(|d| d.total_sec).max().unwrap_or(0).max(60);
    let last = app.report.daily.len() - 1;

    let first_label = app.report.daily[0].label(&app.date_format);
    let last_label = app.report.daily[last].label(&app.date_format);

    let datasets = vec![Dataset::default()
        .name("Focus")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Blue))
        .data(&points)];

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title("Date")
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, last.max(1) as f64])
                .labels(vec![Span::raw(first_label), Span::raw(last_label)]),
        )
        .y_axis(
            Axis::default()
                .title("Time")
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, max_sec as f64])
                .labels(vec![Span::raw("0s"), Span::raw(format_duration(max_sec))]),
        );

    frame.render_widget(chart, area);
}

/// Render the status bar.
fn render_status_bar<S: KeyValueStore>(frame: &mut Frame<'_>, app: &App<S>, area: Rect) {
    let status = if let Some(notice) = &app.notice {
        Paragraph::new(format!("⚠ {notice}")).style(Style::default().fg(Color::Red))
    } else {
        let text = app
            .status
            .as_deref()
            .unwrap_or("s:start | p:pause | r:reset | ?:help | q:quit");
        Paragraph::new(text).style(Style::default().fg(Color::DarkGray))
    };

    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::TimerArgs;
    use crate::config::Config;
    use crate::features::focus::SessionStore;
    use crate::storage::MemoryStore;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_render_idle_and_running() {
        let store = SessionStore::new(MemoryStore::new());
        let args = TimerArgs {
            duration: Some("0:1:00".to_string()),
            label: Some("Study".to_string()),
        };
        let mut app = App::new(store, &Config::default(), args).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();

        terminal.draw(|frame| render(frame, &app)).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("Study"));
        assert!(text.contains("00:00:00"));
        assert!(text.contains("No sessions yet!"));

        app.start();
        app.on_tick(5);
        terminal.draw(|frame| render(frame, &app)).unwrap();
        let text = buffer_text(&terminal);
        assert!(text.contains("00:00:55"));
        assert!(text.contains("Running"));
    }

    #[test]
    fn test_render_notice() {
        let store = SessionStore::new(MemoryStore::new());
        let mut app = App::new(store, &Config::default(), TimerArgs::default()).unwrap();
        app.notice = Some("Storage is full".to_string());

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(frame, &app)).unwrap();
        assert!(buffer_text(&terminal).contains("Storage is full"));
    }
}
