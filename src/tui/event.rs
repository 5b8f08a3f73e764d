//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::FocusError;
use crate::storage::KeyValueStore;
use crate::tui::app::{App, InputMode};

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Reload session history.
    Refresh,
}

const HELP: &str =
    "s:start | p:pause/resume | r:reset | e:duration | l:label | c:clear | g:reload | q:quit";

/// Handle terminal events.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events<S: KeyValueStore>(app: &mut App<S>) -> Result<Option<Action>, FocusError> {
    // Poll for events with a small timeout so the countdown keeps moving
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(handle_key(app, key));
            }
        }
    }

    Ok(None)
}

/// Apply one key press to the app.
pub fn handle_key<S: KeyValueStore>(app: &mut App<S>, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match app.mode {
        InputMode::Normal => handle_normal(app, key.code),
        InputMode::EditDuration => {
            match key.code {
                KeyCode::Enter => {
                    app.mode = InputMode::Normal;
                    app.status = Some(format!("Duration set to {}", app.duration_input));
                }
                KeyCode::Esc => app.mode = InputMode::Normal,
                KeyCode::Backspace => {
                    app.duration_input.pop();
                }
                KeyCode::Char(c) if c.is_ascii_digit() || c == ':' => app.duration_input.push(c),
                _ => {}
            }
            None
        }
        InputMode::EditLabel => {
            match key.code {
                KeyCode::Enter => app.commit_label(),
                KeyCode::Esc => {
                    app.label_input = app.engine.label().to_string();
                    app.mode = InputMode::Normal;
                }
                KeyCode::Backspace => {
                    app.label_input.pop();
                }
                KeyCode::Char(c) => app.label_input.push(c),
                _ => {}
            }
            None
        }
        InputMode::ConfirmClear => {
            if key.code == KeyCode::Char('y') {
                app.clear_history();
            } else {
                app.mode = InputMode::Normal;
                app.status = Some("Clear cancelled".to_string());
            }
            None
        }
    }
}

fn handle_normal<S: KeyValueStore>(app: &mut App<S>, code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => return Some(Action::Quit),
        KeyCode::Char('s') | KeyCode::Enter => app.start(),
        KeyCode::Char('p' | ' ') => app.toggle_pause(),
        KeyCode::Char('r') => app.reset(),
        KeyCode::Char('g') => return Some(Action::Refresh),
        KeyCode::Char('e') => {
            app.mode = InputMode::EditDuration;
            app.duration_input.clear();
            app.status = Some("Type hh:mm:ss, Enter to keep".to_string());
        }
        KeyCode::Char('l') => {
            app.mode = InputMode::EditLabel;
            app.status = Some("Type a label, Enter to keep".to_string());
        }
        KeyCode::Char('c') => {
            app.mode = InputMode::ConfirmClear;
            app.status = Some("Delete all session history? (y/n)".to_string());
        }
        KeyCode::Char('?') => app.status = Some(HELP.to_string()),
        _ => {}
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::args::TimerArgs;
    use crate::config::Config;
    use crate::features::focus::{Phase, SessionStore};
    use crate::storage::MemoryStore;

    fn app() -> App<MemoryStore> {
        let store = SessionStore::new(MemoryStore::new());
        App::new(store, &Config::default(), TimerArgs::default()).unwrap()
    }

    fn press(app: &mut App<MemoryStore>, code: KeyCode) -> Option<Action> {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert_eq!(press(&mut app, KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(
            handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_start_pause_reset_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('s'));
        assert!(app.engine.is_running());
        assert_eq!(app.engine.duration_sec(), 1500);

        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.engine.phase(), Phase::Paused);
        press(&mut app, KeyCode::Char('p'));
        assert!(app.engine.is_running());

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.engine.phase(), Phase::Idle);
    }

    #[test]
    fn test_edit_duration() {
        let mut app = app();
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.mode, InputMode::EditDuration);

        for c in "0:1x:00".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, InputMode::Normal);
        assert_eq!(app.duration_input, "0:1:00");

        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.engine.duration_sec(), 60);
    }

    #[test]
    fn test_edit_label() {
        let mut app = app();
        press(&mut app, KeyCode::Char('l'));
        for c in "qs".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);

        // 'q' while editing is text, not quit
        assert!(!app.should_quit);
        assert_eq!(app.engine.label(), "Focusq");
    }

    #[test]
    fn test_clear_needs_confirmation() {
        let mut app = app();
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.mode, InputMode::ConfirmClear);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.mode, InputMode::Normal);
        assert_eq!(app.status.as_deref(), Some("Clear cancelled"));
    }
}
