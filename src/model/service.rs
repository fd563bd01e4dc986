//! External service identifiers and their mocked connection flags.

use crate::error::{DashboardError, IdentifierKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four integrations shown in the status grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceId {
    #[serde(rename = "googleDrive")]
    GoogleDrive,
    #[serde(rename = "blackboxAI")]
    BlackboxAi,
    #[serde(rename = "plaid")]
    Plaid,
    #[serde(rename = "docusign")]
    Docusign,
}

impl ServiceId {
    /// All services in grid order.
    pub const ALL: [Self; 4] = [
        Self::GoogleDrive,
        Self::BlackboxAi,
        Self::Plaid,
        Self::Docusign,
    ];

    /// Stable identifier used by events and the CLI.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::GoogleDrive => "googleDrive",
            Self::BlackboxAi => "blackboxAI",
            Self::Plaid => "plaid",
            Self::Docusign => "docusign",
        }
    }

    /// Human-readable card title.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::GoogleDrive => "Google Drive",
            Self::BlackboxAi => "Blackbox AI",
            Self::Plaid => "Plaid",
            Self::Docusign => "Docusign",
        }
    }

    /// Position in [`ServiceId::ALL`] and in the status array.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::GoogleDrive => 0,
            Self::BlackboxAi => 1,
            Self::Plaid => 2,
            Self::Docusign => 3,
        }
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ServiceId {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|service| service.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DashboardError::unknown(IdentifierKind::Service, s))
    }
}

/// Per-service connection flags.
///
/// The key set is fixed by [`ServiceId`]; only the values change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConnectionStatus {
    flags: [bool; ServiceId::ALL.len()],
}

impl ConnectionStatus {
    /// All services disconnected.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            flags: [false; ServiceId::ALL.len()],
        }
    }

    #[must_use]
    pub const fn is_connected(&self, service: ServiceId) -> bool {
        self.flags[service.index()]
    }

    /// Flip one service's flag, returning the new value.
    pub const fn toggle(&mut self, service: ServiceId) -> bool {
        let idx = service.index();
        self.flags[idx] = !self.flags[idx];
        self.flags[idx]
    }

    /// Iterate `(service, connected)` in grid order.
    pub fn iter(&self) -> impl Iterator<Item = (ServiceId, bool)> + '_ {
        ServiceId::ALL
            .into_iter()
            .map(|service| (service, self.is_connected(service)))
    }

    /// Number of services currently marked connected.
    #[must_use]
    pub fn connected_count(&self) -> usize {
        self.flags.iter().filter(|connected| **connected).count()
    }
}
