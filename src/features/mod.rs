//! Feature implementations for focuspot.
//!
//! - Focus timer and session aggregation
//! - Text charts for reports

pub mod focus;
pub mod stats;
