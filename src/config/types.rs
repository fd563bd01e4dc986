//! Configuration types for family-office.

use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments are layered over file settings with [`AppConfig::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// TUI-specific configuration
    pub tui: TuiConfig,
    /// Headless output configuration
    pub output: OutputConfig,
}

// ============================================================================
// TUI Configuration
// ============================================================================

/// TUI-specific configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TuiConfig {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
    /// Milliseconds between idle ticks of the event loop
    #[schemars(range(min = 10, max = 5000))]
    pub tick_rate_ms: u64,
    /// Capture mouse events while the dashboard is open
    pub mouse_enabled: bool,
}

pub const DEFAULT_TICK_RATE_MS: u64 = 100;

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            mouse_enabled: false,
        }
    }
}

// ============================================================================
// Output Configuration
// ============================================================================

/// Output settings for the `render` command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Disable colored output (also respects `NO_COLOR`)
    pub no_color: bool,
}

// ============================================================================
// CLI Overrides
// ============================================================================

/// Values given on the command line, layered over the file config.
///
/// `None` means the flag was not passed. Switch flags can only turn a
/// setting on, so they stay plain `bool`s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub theme: Option<String>,
    pub tick_rate_ms: Option<u64>,
    pub mouse_enabled: bool,
    pub format: Option<ReportFormat>,
    pub no_color: bool,
}
