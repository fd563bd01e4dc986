//! Configuration validation for family-office.

use super::types::{AppConfig, OutputConfig, TuiConfig};
use crate::tui::Theme;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.tui.validate());
        errors.extend(self.output.validate());
        errors
    }
}

impl AppConfig {
    /// Reset every field that fails validation to its default, returning
    /// the errors that were repaired.
    pub fn repair(&mut self) -> Vec<ConfigError> {
        let mut errors = self.tui.repair();
        errors.extend(self.output.validate());
        errors
    }
}

impl TuiConfig {
    /// Reset invalid TUI settings to their defaults.
    pub fn repair(&mut self) -> Vec<ConfigError> {
        let errors = self.validate();
        let defaults = Self::default();
        for err in &errors {
            match err.field.as_str() {
                THEME_FIELD => self.theme = defaults.theme.clone(),
                TICK_RATE_FIELD => self.tick_rate_ms = defaults.tick_rate_ms,
                _ => {}
            }
        }
        errors
    }
}

const THEME_FIELD: &str = "tui.theme";
const TICK_RATE_FIELD: &str = "tui.tick_rate_ms";

impl Validatable for TuiConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if !Theme::is_known(&self.theme) {
            errors.push(ConfigError {
                field: THEME_FIELD.to_string(),
                message: format!(
                    "Invalid theme '{}'. Valid options: {}",
                    self.theme,
                    Theme::NAMES.join(", ")
                ),
            });
        }

        if !(10..=5000).contains(&self.tick_rate_ms) {
            errors.push(ConfigError {
                field: TICK_RATE_FIELD.to_string(),
                message: format!(
                    "Tick rate must be between 10 and 5000 ms, got {}",
                    self.tick_rate_ms
                ),
            });
        }
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        Vec::new()
    }
}
