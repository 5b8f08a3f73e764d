//! Configuration settings for focuspot.
//!
//! Settings are loaded from `~/.focuspot/config.yaml`.

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::error::FocusError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Timer settings.
    pub timer: TimerConfig,
    /// Chart and history display settings.
    pub display: DisplayConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
}

/// Timer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Duration pre-filled in the timer input (`hh:mm:ss`).
    #[serde(default = "default_duration")]
    pub default_duration: String,
    /// Shortest countdown a run may use; shorter inputs are clamped up.
    #[serde(default = "default_min_duration_sec")]
    pub min_duration_sec: u64,
    /// Label recorded when none is entered.
    #[serde(default = "default_label")]
    pub default_label: String,
    /// Ring the terminal bell when a run completes.
    #[serde(default = "default_true")]
    pub bell: bool,
}

/// Display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// `strftime` format for daily chart labels.
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// Number of sessions shown by `history` when no limit is given.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

fn default_duration() -> String {
    "00:25:00".to_string()
}

/// Shortest countdown accepted by the timer.
pub const MIN_DURATION_SEC: u64 = 30;

const fn default_min_duration_sec() -> u64 {
    MIN_DURATION_SEC
}

fn default_label() -> String {
    "Focus".to_string()
}

const fn default_true() -> bool {
    true
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

const fn default_history_limit() -> usize {
    20
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            default_duration: default_duration(),
            min_duration_sec: default_min_duration_sec(),
            default_label: default_label(),
            bell: default_true(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            history_limit: default_history_limit(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, FocusError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, FocusError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            FocusError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            FocusError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }
}
