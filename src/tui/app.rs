//! Application state for the TUI.

use chrono::Local;

use crate::cli::args::TimerArgs;
use crate::config::Config;
use crate::error::FocusError;
use crate::features::focus::{
    FocusReport, Phase, SessionAggregator, SessionEnd, SessionStore, Tick, TimerEngine,
};
use crate::storage::KeyValueStore;

/// What keystrokes currently edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys are commands.
    Normal,
    /// Typing a `hh:mm:ss` duration.
    EditDuration,
    /// Typing a session label.
    EditLabel,
    /// Waiting for `y` to clear history.
    ConfirmClear,
}

/// Application state.
pub struct App<S: KeyValueStore> {
    /// The countdown.
    pub engine: TimerEngine,
    store: SessionStore<S>,
    /// Duration text used for the next run.
    pub duration_input: String,
    /// Label text recorded with sessions.
    pub label_input: String,
    /// Current input mode.
    pub mode: InputMode,
    /// Status message to display.
    pub status: Option<String>,
    /// Persistent warning, e.g. the last save failed.
    pub notice: Option<String>,
    /// Charts data, refreshed whenever a session is saved.
    pub report: FocusReport,
    /// Date format for daily chart labels.
    pub date_format: String,
    /// Set when a run completes; the loop rings the bell and clears it.
    pub ring_bell: bool,
    bell_enabled: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl<S: KeyValueStore> App<S> {
    /// Create a new app instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the session history cannot be read.
    pub fn new(
        store: SessionStore<S>,
        config: &Config,
        args: TimerArgs,
    ) -> Result<Self, FocusError> {
        let mut engine = TimerEngine::new().with_min_duration(config.timer.min_duration_sec);
        let label_input = args
            .label
            .unwrap_or_else(|| config.timer.default_label.clone());
        engine.set_label(label_input.clone());

        let mut app = Self {
            engine,
            store,
            duration_input: args
                .duration
                .unwrap_or_else(|| config.timer.default_duration.clone()),
            label_input,
            mode: InputMode::Normal,
            status: Some("Press ? for help".to_string()),
            notice: None,
            report: FocusReport::from_sessions(&[], &Local::now()),
            date_format: config.display.date_format.clone(),
            ring_bell: false,
            bell_enabled: config.timer.bell,
            should_quit: false,
        };
        app.report = app.load_report()?;

        Ok(app)
    }

    fn load_report(&mut self) -> Result<FocusReport, FocusError> {
        let aggregator = SessionAggregator::new(&mut self.store);
        FocusReport::generate(&aggregator, &Local::now())
    }

    /// Re-read session history for the charts.
    pub fn refresh(&mut self) {
        match self.load_report() {
            Ok(report) => self.report = report,
            Err(e) => self.notice = Some(format!("Could not read history: {e}")),
        }
    }

    /// Start a new run from the duration input, or resume a paused one.
    pub fn start(&mut self) {
        match self.engine.phase() {
            Phase::Running => return,
            Phase::Paused => self.engine.resume(),
            Phase::Idle | Phase::Completed => {
                self.engine.set_label(self.label_input.clone());
                let duration = self.engine.configure(&self.duration_input);
                self.engine.start();
                self.status = Some(format!(
                    "Started {}",
                    crate::features::focus::format_duration(duration)
                ));
                return;
            }
        }
        self.status = Some("Resumed".to_string());
    }

    /// Pause when running, resume when paused.
    pub fn toggle_pause(&mut self) {
        match self.engine.phase() {
            Phase::Running => {
                self.engine.pause();
                self.status = Some("Paused".to_string());
            }
            Phase::Paused => {
                self.engine.resume();
                self.status = Some("Resumed".to_string());
            }
            Phase::Idle | Phase::Completed => {}
        }
    }

    /// Abandon the run, recording any elapsed time.
    pub fn reset(&mut self) {
        let end = self.engine.reset(&mut self.store);
        if self.handle_end(end) {
            self.status = Some("Reset, progress saved".to_string());
        } else {
            self.status = Some("Reset".to_string());
        }
    }

    /// Advance the countdown by whole seconds of wall time.
    pub fn on_tick(&mut self, seconds: u64) {
        if let Tick::Completed(end) = self.engine.advance(seconds, &mut self.store) {
            self.handle_end(end);
            self.ring_bell = self.bell_enabled;
            self.status = Some("Session complete!".to_string());
        }
    }

    /// Apply the outcome of a finished run. Returns whether a record was made.
    fn handle_end(&mut self, end: SessionEnd) -> bool {
        let recorded = end.record.is_some();
        match end.save {
            Ok(()) => {
                if recorded {
                    self.notice = None;
                    self.refresh();
                }
            }
            Err(e) if e.is_storage_full() => {
                self.notice =
                    Some("Storage is full: the last session was not saved".to_string());
            }
            Err(e) => {
                self.notice = Some(format!("Last session was not saved: {e}"));
            }
        }
        recorded
    }

    /// Delete all stored sessions.
    pub fn clear_history(&mut self) {
        let mut aggregator = SessionAggregator::new(&mut self.store);
        match aggregator.clear_all() {
            Ok(()) => {
                self.status = Some("History cleared".to_string());
                self.refresh();
            }
            Err(e) => self.notice = Some(format!("Could not clear history: {e}")),
        }
        self.mode = InputMode::Normal;
    }

    /// Commit the label being edited.
    pub fn commit_label(&mut self) {
        self.engine.set_label(self.label_input.clone());
        self.mode = InputMode::Normal;
        self.status = Some("Label updated".to_string());
    }

    /// Save progress and leave.
    pub fn quit(&mut self) {
        let end = self.engine.reset(&mut self.store);
        self.handle_end(end);
        self.should_quit = true;
    }
}
