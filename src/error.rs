//! Unified error types for family-office.
//!
//! The dashboard itself has almost no failure modes: every interactive
//! input is a closed enumeration. Errors arise only at the edges, where raw
//! identifiers, config files and output sinks enter the program.

use crate::reports::ReportError;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which identifier family failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    Service,
    Tab,
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Service => f.write_str("service"),
            Self::Tab => f.write_str("tab"),
        }
    }
}

/// Main error type for family-office operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DashboardError {
    /// An event or flag named a service or tab outside the known set
    #[error("Unknown {kind} identifier: '{id}'")]
    UnknownIdentifier { kind: IdentifierKind, id: String },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// IO errors with context
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    /// Errors while writing a headless report
    #[error(transparent)]
    Report(#[from] ReportError),
}

impl DashboardError {
    /// Build an [`DashboardError::UnknownIdentifier`].
    pub fn unknown(kind: IdentifierKind, id: impl Into<String>) -> Self {
        Self::UnknownIdentifier {
            kind,
            id: id.into(),
        }
    }

    /// Wrap an IO error with the path that caused it.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: Some(path.into()),
            source,
        }
    }

    /// Whether this error can be recovered by dropping the triggering event.
    #[must_use]
    pub const fn is_ignorable(&self) -> bool {
        matches!(self, Self::UnknownIdentifier { .. })
    }
}

impl From<std::io::Error> for DashboardError {
    fn from(source: std::io::Error) -> Self {
        Self::Io { path: None, source }
    }
}

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, DashboardError>;
