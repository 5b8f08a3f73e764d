//! Command-line interface for focuspot.

pub mod args;
pub mod commands;
