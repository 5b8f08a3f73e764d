//! Focus timer and session tracking.
//!
//! - Countdown timer engine with start/pause/resume/reset
//! - Session records persisted newest-first
//! - Weekly and daily aggregation for charts

pub mod report;
pub mod session;
pub mod storage;
pub mod timer;

pub use report::{
    daily_totals, weekly_totals, DailyTotal, FocusReport, SessionAggregator, WEEKDAY_LABELS,
};
pub use session::{Clock, SessionRecord, SessionSink, SystemClock, DEFAULT_LABEL};
pub use storage::{SessionStore, SESSIONS_KEY};
pub use timer::{
    format_clock, format_duration, parse_time_input, Phase, SessionEnd, Tick, TimerEngine,
};
