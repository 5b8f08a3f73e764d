//! Terminal User Interface (TUI) for focuspot.
//!
//! Provides the interactive countdown with weekly and daily charts.
//! Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::{App, InputMode};
pub use event::{handle_key, Action};

use std::io::{self, Write};
use std::time::Instant;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::error::FocusError;
use crate::storage::KeyValueStore;

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run<S: KeyValueStore>(app: &mut App<S>) -> Result<(), FocusError> {
    // Setup terminal
    enable_raw_mode()
        .map_err(|e| FocusError::Config(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| FocusError::Config(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| FocusError::Config(format!("Failed to create terminal: {e}")))?;

    let result = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
///
/// Whole seconds of wall time are fed to the timer while it runs; the
/// cadence restarts whenever the timer is not running.
fn run_app<B: Backend + Write, S: KeyValueStore>(
    terminal: &mut Terminal<B>,
    app: &mut App<S>,
) -> Result<(), FocusError> {
    let mut last_tick = Instant::now();

    loop {
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| FocusError::Config(format!("Failed to draw: {e}")))?;

        if let Some(action) = event::handle_events(app)? {
            match action {
                Action::Quit => app.quit(),
                Action::Refresh => app.refresh(),
            }
        }

        if app.should_quit {
            break;
        }

        if app.engine.is_running() {
            let elapsed = last_tick.elapsed().as_secs();
            if elapsed > 0 {
                last_tick += std::time::Duration::from_secs(elapsed);
                app.on_tick(elapsed);
            }
        } else {
            last_tick = Instant::now();
        }

        if app.ring_bell {
            app.ring_bell = false;
            let backend = terminal.backend_mut();
            backend.write_all(b"\x07")?;
            Write::flush(backend)?;
        }
    }

    Ok(())
}
