//! Path resolution for focuspot configuration and data files.
//!
//! All focuspot data is stored in `~/.focuspot/` unless `FOCUSPOT_HOME`
//! points somewhere else:
//! - `config.yaml` - Main configuration file
//! - `focuspot.db` - `SQLite` key-value store holding session history

use std::path::PathBuf;

use crate::error::FocusError;

/// Environment variable overriding the data root.
pub const HOME_ENV: &str = "FOCUSPOT_HOME";

/// Paths to focuspot configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.focuspot/`
    pub root: PathBuf,
    /// Config file: `~/.focuspot/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.focuspot/focuspot.db`
    pub database: PathBuf,
}

impl Paths {
    /// Resolve paths from `FOCUSPOT_HOME`, falling back to the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if neither variable is set.
    pub fn new() -> Result<Self, FocusError> {
        if let Ok(root) = std::env::var(HOME_ENV) {
            if !root.is_empty() {
                return Ok(Self::with_root(PathBuf::from(root)));
            }
        }

        let home = std::env::var("HOME")
            .map_err(|_| FocusError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".focuspot")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("focuspot.db"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), FocusError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                FocusError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }

        Ok(())
    }
}
