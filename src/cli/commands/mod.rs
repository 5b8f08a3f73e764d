//! Command implementations for focuspot.
//!
//! This module contains the implementation of all CLI commands.

mod focus;
mod timer;

pub use focus::{clear, history, report};
pub use timer::timer;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::Cli;
use crate::error::FocusError;

/// Generate a shell completion script.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn completions(shell: Shell) -> Result<String, FocusError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "focuspot", &mut buf);
    String::from_utf8(buf).map_err(|e| FocusError::Parse(format!("UTF-8 error: {e}")))
}
