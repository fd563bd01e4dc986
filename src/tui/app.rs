//! `DashboardApp` - view controller for the family office dashboard.
//!
//! Holds the only mutable state of the program: which services are marked
//! connected and which tab is visible. Everything displayed is derived from
//! that state plus the static [`Dataset`] by [`compose`].

use super::view::{DashboardView, compose};
use crate::error::{DashboardError, IdentifierKind, Result};
use crate::model::{ConnectionStatus, Dataset, ServiceId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The five mutually exclusive content panels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DashboardTab {
    /// Headline metric cards
    #[default]
    Dashboard,
    /// Asset allocation with gauges
    Portfolio,
    /// Recent documents and processing status
    Documents,
    /// Canned analysis strings
    AiInsights,
    /// Workflow descriptors
    Automation,
}

impl DashboardTab {
    /// All tabs in display order.
    pub const ALL: [Self; 5] = [
        Self::Dashboard,
        Self::Portfolio,
        Self::Documents,
        Self::AiInsights,
        Self::Automation,
    ];

    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Portfolio => "portfolio",
            Self::Documents => "documents",
            Self::AiInsights => "ai-insights",
            Self::Automation => "automation",
        }
    }

    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Portfolio => "Portfolio",
            Self::Documents => "Documents",
            Self::AiInsights => "AI Insights",
            Self::Automation => "Automation",
        }
    }

    #[must_use]
    pub const fn shortcut(&self) -> &'static str {
        match self {
            Self::Dashboard => "1",
            Self::Portfolio => "2",
            Self::Documents => "3",
            Self::AiInsights => "4",
            Self::Automation => "5",
        }
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Dashboard => 0,
            Self::Portfolio => 1,
            Self::Documents => 2,
            Self::AiInsights => 3,
            Self::Automation => 4,
        }
    }

    #[must_use]
    pub const fn next(&self) -> Self {
        match self {
            Self::Dashboard => Self::Portfolio,
            Self::Portfolio => Self::Documents,
            Self::Documents => Self::AiInsights,
            Self::AiInsights => Self::Automation,
            Self::Automation => Self::Dashboard,
        }
    }

    #[must_use]
    pub const fn prev(&self) -> Self {
        match self {
            Self::Dashboard => Self::Automation,
            Self::Portfolio => Self::Dashboard,
            Self::Documents => Self::Portfolio,
            Self::AiInsights => Self::Documents,
            Self::Automation => Self::AiInsights,
        }
    }
}

impl fmt::Display for DashboardTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for DashboardTab {
    type Err = DashboardError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DashboardError::unknown(IdentifierKind::Tab, s))
    }
}

/// A discrete UI event carrying a raw identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    ToggleConnection(String),
    SelectTab(String),
}

/// Outcome of dispatching a [`UiEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// State changed; the surface should redraw
    Rerender,
    /// The event named an unknown identifier and was dropped
    Ignored,
}

/// The state that drives composition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub connections: ConnectionStatus,
    pub active_tab: DashboardTab,
}

/// Idle ticks a status message stays in the footer.
const STATUS_MESSAGE_TICKS: u64 = 30;

/// Main application state for the dashboard.
pub struct DashboardApp {
    /// Static data shown in the tabs
    pub(crate) dataset: Dataset,

    /// Connection flags and active tab
    pub(crate) state: DashboardState,

    /// Service card that Enter/Space toggles
    pub(crate) focused_service: ServiceId,

    /// Show help overlay
    pub(crate) show_help: bool,

    /// Status message to display in the footer
    pub(crate) status_message: Option<String>,

    /// Should quit
    pub(crate) should_quit: bool,

    /// Idle tick counter
    pub(crate) tick: u64,

    /// Tick at which the status message is cleared
    pub(crate) status_expires_at: u64,
}

impl DashboardApp {
    /// Create a dashboard over the given dataset with all services
    /// disconnected and the dashboard tab visible.
    #[must_use]
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            state: DashboardState::default(),
            focused_service: ServiceId::ALL[0],
            show_help: false,
            status_message: None,
            should_quit: false,
            tick: 0,
            status_expires_at: 0,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &DashboardState {
        &self.state
    }

    #[must_use]
    pub const fn active_tab(&self) -> DashboardTab {
        self.state.active_tab
    }

    #[must_use]
    pub const fn connections(&self) -> &ConnectionStatus {
        &self.state.connections
    }

    #[must_use]
    pub const fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[must_use]
    pub const fn focused_service(&self) -> ServiceId {
        self.focused_service
    }

    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Flip one service's connection flag.
    pub fn toggle_connection(&mut self, service: ServiceId) {
        let connected = self.state.connections.toggle(service);
        tracing::debug!(service = service.id(), connected, "toggled connection");
        self.set_status_message(format!(
            "{} {}",
            service.label(),
            if connected { "connected" } else { "disconnected" }
        ));
    }

    /// Make `tab` the visible panel.
    pub fn select_tab(&mut self, tab: DashboardTab) {
        if self.state.active_tab != tab {
            tracing::debug!(from = %self.state.active_tab, to = %tab, "selected tab");
        }
        self.state.active_tab = tab;
    }

    pub fn next_tab(&mut self) {
        self.select_tab(self.state.active_tab.next());
    }

    pub fn prev_tab(&mut self) {
        self.select_tab(self.state.active_tab.prev());
    }

    /// Toggle a service by its raw identifier.
    pub fn toggle_connection_by_id(&mut self, id: &str) -> Result<()> {
        let service = id.parse::<ServiceId>()?;
        self.toggle_connection(service);
        Ok(())
    }

    /// Select a tab by its raw identifier.
    pub fn select_tab_by_id(&mut self, id: &str) -> Result<()> {
        let tab = id.parse::<DashboardTab>()?;
        self.select_tab(tab);
        Ok(())
    }

    /// Apply an event; unknown identifiers leave the state untouched.
    pub fn dispatch(&mut self, event: UiEvent) -> EventResult {
        let outcome = match &event {
            UiEvent::ToggleConnection(id) => self.toggle_connection_by_id(id),
            UiEvent::SelectTab(id) => self.select_tab_by_id(id),
        };
        match outcome {
            Ok(()) => EventResult::Rerender,
            Err(err) => {
                tracing::warn!(?event, "ignoring event: {err}");
                EventResult::Ignored
            }
        }
    }

    /// Compose the current view.
    #[must_use]
    pub fn render(&self) -> DashboardView {
        compose(&self.state, &self.dataset)
    }

    /// Move the service cursor right, wrapping.
    pub fn focus_next_service(&mut self) {
        let idx = (self.focused_service.index() + 1) % ServiceId::ALL.len();
        self.focused_service = ServiceId::ALL[idx];
    }

    /// Move the service cursor left, wrapping.
    pub fn focus_prev_service(&mut self) {
        let len = ServiceId::ALL.len();
        let idx = (self.focused_service.index() + len - 1) % len;
        self.focused_service = ServiceId::ALL[idx];
    }

    /// Toggle the service under the cursor.
    pub fn toggle_focused(&mut self) {
        self.toggle_connection(self.focused_service);
    }

    pub const fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn set_status_message(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
        self.status_expires_at = self.tick + STATUS_MESSAGE_TICKS;
    }

    /// Advance the idle clock, expiring a stale status message.
    pub fn on_tick(&mut self) {
        self.tick += 1;
        if self.status_message.is_some() && self.tick >= self.status_expires_at {
            self.status_message = None;
        }
    }

    pub fn clear_status_message(&mut self) {
        self.status_message = None;
    }

    pub const fn quit(&mut self) {
        self.should_quit = true;
    }
}

impl Default for DashboardApp {
    fn default() -> Self {
        Self::new(Dataset::builtin())
    }
}
