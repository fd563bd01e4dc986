//! Rich TUI interface using ratatui.
//!
//! # Architecture
//!
//! `DashboardApp` owns the mutable state (connection flags, active tab).
//! `view::compose` turns that state and the static dataset into a
//! `DashboardView` value, and `ui` draws that value onto a ratatui frame.
//! The headless reporters in `crate::reports` draw the same value as text
//! or JSON.

mod app;
mod events;
pub mod theme;
mod ui;
pub mod view;
pub(crate) mod widgets;

// Theme exports
pub use theme::{ColorScheme, FooterHints, Styles, Theme, colors, set_theme, toggle_theme};

pub use app::{DashboardApp, DashboardState, DashboardTab, EventResult, UiEvent};
pub use events::{Event, EventHandler, handle_key_event, handle_mouse_event};
pub use ui::{render, run_dashboard_tui};
pub use view::{BadgeVariant, DashboardView, TabContent, compose};
