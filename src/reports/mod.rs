//! Headless report generation for a composed dashboard.
//!
//! The `render` command composes a [`DashboardView`] without opening the
//! terminal UI and writes it in one of these formats:
//! - Text: aligned, optionally colored terminal output
//! - JSON: the view tree for programmatic consumers

mod json;
mod output;
mod text;

pub use json::JsonReporter;
pub use output::{OutputTarget, should_use_color, write_output};
pub use text::TextReporter;

use crate::tui::DashboardView;
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable text
    #[default]
    Text,
    /// Structured JSON output
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report for a composed view
    fn generate(&self, view: &DashboardView) -> Result<String, ReportError>;

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Build the reporter for `format`.
#[must_use]
pub fn create_reporter(format: ReportFormat, colored: bool) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Text => {
            let reporter = TextReporter::new();
            Box::new(if colored { reporter } else { reporter.no_color() })
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
    }
}

/// Generate `view` in `format` and write it to `target`.
pub fn emit_report(
    view: &DashboardView,
    format: ReportFormat,
    target: &OutputTarget,
    colored: bool,
) -> crate::Result<()> {
    let report = create_reporter(format, colored).generate(view)?;
    write_output(&report, target)
}
