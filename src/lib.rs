//! **A terminal dashboard for a family office management platform.**
//!
//! `family-office` presents the state of four service integrations (Google
//! Drive, Blackbox AI, Plaid and Docusign) alongside portfolio, document,
//! insight and automation views over a built-in sample dataset. It powers
//! both an interactive ratatui interface and a headless `render` command.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: The dataset ([`Dataset`]) and the closed set of
//!   services ([`ServiceId`]) with their connection flags.
//! - **[`tui`]**: The controller ([`DashboardApp`]), the pure [`compose`]
//!   function that turns state into a [`DashboardView`], and the terminal
//!   surface that draws it.
//! - **[`reports`]**: Text and JSON renderings of a composed view.
//! - **[`config`]**: YAML configuration discovery, validation and merging.
//!
//! ## Composing a view
//!
//! ```
//! use family_office::{DashboardApp, DashboardTab, ServiceId, TabContent};
//!
//! let mut app = DashboardApp::default();
//! app.toggle_connection(ServiceId::Plaid);
//! app.select_tab(DashboardTab::Portfolio);
//!
//! let view = app.render();
//! assert!(view.integrations[2].connected);
//! assert!(matches!(view.content, TabContent::Portfolio(_)));
//! ```
//!
//! ## Driving it with raw identifiers
//!
//! ```
//! use family_office::{DashboardApp, EventResult, UiEvent};
//!
//! let mut app = DashboardApp::default();
//! let result = app.dispatch(UiEvent::ToggleConnection("dropbox".into()));
//! assert_eq!(result, EventResult::Ignored);
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Cast safety: usize/u16/f64 casts are pervasive in TUI layout math
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    // Doc completeness: # Errors / # Panics sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // TUI render functions are inherently long
    clippy::too_many_lines,
    // Variable names like `min`/`mid` are clear in context
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod reports;
pub mod tui;

// Re-export main types for convenience
pub use config::{AppConfig, ConfigError, ConfigOverrides, OutputConfig, TuiConfig, Validatable};
pub use error::{DashboardError, IdentifierKind, Result};
pub use model::{ConnectionStatus, Dataset, NOMINAL_PORTFOLIO_TOTAL, ServiceId};
pub use reports::{ReportFormat, ReportGenerator};
pub use tui::{
    DashboardApp, DashboardState, DashboardTab, DashboardView, EventResult, TabContent, UiEvent,
    compose,
};
