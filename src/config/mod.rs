//! Configuration management for focuspot.
//!
//! This module handles loading configuration from `~/.focuspot/`.

mod paths;
mod settings;

pub use paths::{Paths, HOME_ENV};
pub use settings::{Config, DisplayConfig, GeneralConfig, TimerConfig, MIN_DURATION_SEC};
