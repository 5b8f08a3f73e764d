//! Countdown timer engine.
//!
//! The engine owns the countdown state and writes a [`SessionRecord`] into a
//! [`SessionSink`] whenever a run ends with time on the clock. It never reads
//! the wall clock to advance: callers feed it whole seconds through
//! [`TimerEngine::tick`] or [`TimerEngine::advance`].

use super::session::{Clock, SessionRecord, SessionSink, SystemClock};
use crate::config::MIN_DURATION_SEC;
use crate::error::FocusError;

/// Timer phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No run in progress
    Idle,
    /// Counting down
    Running,
    /// Run halted, remaining time kept
    Paused,
    /// Run reached zero; only observable while its record is being saved
    Completed,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Running => write!(f, "Running"),
            Self::Paused => write!(f, "Paused"),
            Self::Completed => write!(f, "Completed"),
        }
    }
}

/// How a run ended.
#[derive(Debug)]
pub struct SessionEnd {
    /// The record handed to the sink, if the run had elapsed time
    pub record: Option<SessionRecord>,
    /// Outcome of handing the record to the sink
    pub save: Result<(), FocusError>,
}

impl SessionEnd {
    const fn nothing() -> Self {
        Self {
            record: None,
            save: Ok(()),
        }
    }
}

/// Result of advancing the timer.
#[derive(Debug)]
pub enum Tick {
    /// The timer is not running; nothing happened
    Inactive,
    /// Still counting down
    Counting {
        /// Seconds left after this tick
        remaining_sec: u64,
    },
    /// The countdown finished and the timer returned to idle
    Completed(SessionEnd),
}

/// Countdown timer state machine.
#[derive(Debug)]
pub struct TimerEngine<C: Clock = SystemClock> {
    duration_sec: u64,
    remaining_sec: u64,
    phase: Phase,
    label: String,
    min_duration_sec: u64,
    last_id: i64,
    clock: C,
}

impl TimerEngine<SystemClock> {
    /// Create an idle engine using the wall clock for record timestamps.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for TimerEngine<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TimerEngine<C> {
    /// Create an idle engine stamping records with `clock`.
    #[must_use]
    pub const fn with_clock(clock: C) -> Self {
        Self {
            duration_sec: 0,
            remaining_sec: 0,
            phase: Phase::Idle,
            label: String::new(),
            min_duration_sec: MIN_DURATION_SEC,
            last_id: 0,
            clock,
        }
    }

    /// Override the minimum countdown length.
    #[must_use]
    pub fn with_min_duration(mut self, min_duration_sec: u64) -> Self {
        self.min_duration_sec = min_duration_sec;
        self
    }

    /// Set the countdown from a `hh:mm:ss` string.
    ///
    /// The parsed value is clamped up to the minimum duration. Input is only
    /// applied while idle; during a run the current duration is returned
    /// unchanged.
    pub fn configure(&mut self, raw: &str) -> u64 {
        if self.phase != Phase::Idle {
            return self.duration_sec;
        }

        let duration = parse_time_input(raw).max(self.min_duration_sec);
        self.duration_sec = duration;
        self.remaining_sec = duration;
        duration
    }

    /// Start or resume the countdown.
    ///
    /// Does nothing while running, or while idle with no configured duration.
    pub fn start(&mut self) {
        match self.phase {
            Phase::Running | Phase::Completed => {}
            Phase::Paused => self.phase = Phase::Running,
            Phase::Idle => {
                if self.remaining_sec > 0 {
                    self.phase = Phase::Running;
                }
            }
        }
    }

    /// Pause a running countdown.
    pub fn pause(&mut self) {
        if self.phase == Phase::Running {
            self.phase = Phase::Paused;
        }
    }

    /// Resume a paused countdown.
    pub fn resume(&mut self) {
        if self.phase == Phase::Paused {
            self.phase = Phase::Running;
        }
    }

    /// Advance the countdown by one second.
    ///
    /// A tick that finds the countdown already at zero ends the run: the
    /// full duration is recorded and the engine returns to idle.
    pub fn tick<S: SessionSink + ?Sized>(&mut self, sink: &mut S) -> Tick {
        if self.phase != Phase::Running {
            return Tick::Inactive;
        }

        if self.remaining_sec == 0 {
            self.phase = Phase::Completed;
            let end = self.finish(sink);
            tracing::info!(
                length_sec = end.record.as_ref().map_or(0, |r| r.length_sec),
                "focus session completed"
            );
            return Tick::Completed(end);
        }

        self.remaining_sec -= 1;
        Tick::Counting {
            remaining_sec: self.remaining_sec,
        }
    }

    /// Advance the countdown by up to `seconds` ticks, stopping at completion.
    pub fn advance<S: SessionSink + ?Sized>(&mut self, seconds: u64, sink: &mut S) -> Tick {
        let mut last = Tick::Inactive;
        for _ in 0..seconds {
            last = self.tick(sink);
            if !matches!(last, Tick::Counting { .. }) {
                break;
            }
        }
        last
    }

    /// Abandon the current run, recording any elapsed time, and return to idle.
    pub fn reset<S: SessionSink + ?Sized>(&mut self, sink: &mut S) -> SessionEnd {
        let end = self.finish(sink);
        if let Some(record) = &end.record {
            tracing::info!(length_sec = record.length_sec, "focus session reset");
        }
        end
    }

    /// Record the elapsed time, if any, then zero the countdown.
    fn finish<S: SessionSink + ?Sized>(&mut self, sink: &mut S) -> SessionEnd {
        let elapsed = self.elapsed_sec();

        self.duration_sec = 0;
        self.remaining_sec = 0;
        self.phase = Phase::Idle;

        if elapsed == 0 {
            return SessionEnd::nothing();
        }

        let now = self.clock.now();
        let id = now.timestamp_millis().max(self.last_id + 1);
        self.last_id = id;

        let record = SessionRecord::new(id, elapsed, &self.label, now);
        let save = sink.record(record.clone());
        if let Err(e) = &save {
            tracing::warn!(error = %e, "failed to save focus session");
        }

        SessionEnd {
            record: Some(record),
            save,
        }
    }

    /// Set the label recorded with future sessions.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// The label recorded with future sessions.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Configured countdown length in seconds.
    #[must_use]
    pub const fn duration_sec(&self) -> u64 {
        self.duration_sec
    }

    /// Seconds left on the countdown.
    #[must_use]
    pub const fn remaining_sec(&self) -> u64 {
        self.remaining_sec
    }

    /// Seconds counted down since the run was configured.
    #[must_use]
    pub const fn elapsed_sec(&self) -> u64 {
        self.duration_sec - self.remaining_sec
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Check if the timer is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Get progress as a fraction (0.0 - 1.0).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        if self.duration_sec == 0 {
            return 0.0;
        }
        1.0 - (self.remaining_sec as f64 / self.duration_sec as f64)
    }
}

/// Parse a colon-delimited `hh:mm:ss` string into seconds.
///
/// Missing or unparsable components count as zero; components after the
/// third are ignored. Never fails.
#[must_use]
pub fn parse_time_input(raw: &str) -> u64 {
    let mut parts = raw
        .split(':')
        .map(|part| part.trim().parse::<u64>().unwrap_or(0));

    let hours = parts.next().unwrap_or(0);
    let minutes = parts.next().unwrap_or(0);
    let seconds = parts.next().unwrap_or(0);

    hours
        .saturating_mul(3600)
        .saturating_add(minutes.saturating_mul(60))
        .saturating_add(seconds)
}

/// Format seconds for charts and history: `59s`, `1m 0s`, `1h 0m`.
#[must_use]
pub fn format_duration(sec: u64) -> String {
    if sec < 60 {
        format!("{sec}s")
    } else if sec < 3600 {
        format!("{}m {}s", sec / 60, sec % 60)
    } else {
        format!("{}h {}m", sec / 3600, (sec % 3600) / 60)
    }
}

/// Format seconds as a zero-padded `hh:mm:ss` clock.
#[must_use]
pub fn format_clock(sec: u64) -> String {
    let hours = sec / 3600;
    let minutes = (sec % 3600) / 60;
    let seconds = sec % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
