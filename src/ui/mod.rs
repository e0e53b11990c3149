//! Terminal output.
//!
//! This module provides:
//! - [`OutputMode`] for verbosity
//! - [`EnvCheckTheme`] for styling
//! - [`HumanReport`] and [`JsonReport`] for printing check results

pub mod output;
pub mod report;
pub mod theme;

pub use output::OutputMode;
pub use report::{HumanReport, JsonReport, Report, ReportFormatter};
pub use theme::{should_use_colors, EnvCheckTheme};
