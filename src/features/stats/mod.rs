//! Statistics rendering.
//!
//! Text charts used by the `report` command.

pub mod visualization;

pub use visualization::{render_bar_chart, render_sparkline};
