//! Check report formatters.
//!
//! Formats a rendered check result for terminals (human) or tooling (JSON).

use super::theme::EnvCheckTheme;
use crate::check::RenderedResult;
use crate::environment::ResolvedEnvironment;
use serde::Serialize;
use std::io::Write;

/// Everything shown for one check run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Name of the check.
    pub check: String,
    /// Deployment environment the check ran against.
    pub environment: String,
    /// How the environment was determined.
    pub environment_source: String,
    /// The rendered result.
    #[serde(flatten)]
    pub result: RenderedResult,
}

impl Report {
    /// Assemble a report.
    pub fn new(check: &str, environment: &ResolvedEnvironment, result: RenderedResult) -> Self {
        Self {
            check: check.to_string(),
            environment: environment.name.clone(),
            environment_source: environment.source.to_string(),
            result,
        }
    }
}

/// Trait for formatting reports.
pub trait ReportFormatter {
    /// Format `report` to the given writer.
    fn format<W: Write + ?Sized>(&self, report: &Report, writer: &mut W) -> std::io::Result<()>;
}

/// Formats reports for terminal display.
pub struct HumanReport {
    theme: EnvCheckTheme,
    show_context: bool,
}

impl HumanReport {
    /// Create a human formatter.
    ///
    /// With `show_context` the check name and resolved environment are
    /// printed before the result.
    pub fn new(use_color: bool, show_context: bool) -> Self {
        Self {
            theme: EnvCheckTheme::for_color(use_color),
            show_context,
        }
    }
}

impl ReportFormatter for HumanReport {
    fn format<W: Write + ?Sized>(&self, report: &Report, writer: &mut W) -> std::io::Result<()> {
        if self.show_context {
            writeln!(writer, "{}", self.theme.format_header(&report.check))?;
            writeln!(
                writer,
                "{}",
                self.theme.format_key_value(
                    "Environment",
                    &format!("{} ({})", report.environment, report.environment_source)
                )
            )?;
            writeln!(writer)?;
        }

        if report.result.ok {
            writeln!(writer, "{}", self.theme.format_success(&report.result.summary))?;
            return Ok(());
        }

        writeln!(writer, "{}", self.theme.format_error(&report.result.summary))?;
        if !report.result.message.is_empty() {
            writeln!(writer, "{}", self.theme.format_detail(&report.result.message))?;
        }
        Ok(())
    }
}

/// Formats reports as machine-readable JSON.
#[derive(Debug, Default)]
pub struct JsonReport;

impl ReportFormatter for JsonReport {
    fn format<W: Write + ?Sized>(&self, report: &Report, writer: &mut W) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, report)?;
        writeln!(writer)
    }
}
