//! focuspot - A terminal focus timer
//!
//! This crate provides a countdown timer engine, session history kept in a
//! local key-value store, and the aggregation behind the weekly and daily
//! focus charts.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod features;
pub mod output;
pub mod storage;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::FocusError;
pub use features::focus::{SessionAggregator, SessionRecord, SessionStore, TimerEngine};
