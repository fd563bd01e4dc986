//! Configuration module for family-office.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument overrides
//!
//! # Configuration File
//!
//! Place a `.family-office.yaml` file in your working directory or
//! `~/.config/family-office/`:
//!
//! ```yaml
//! tui:
//!   theme: light
//! output:
//!   format: json
//! ```

pub mod file;
mod types;
mod validation;

pub use types::{AppConfig, ConfigOverrides, DEFAULT_TICK_RATE_MS, OutputConfig, TuiConfig};
pub use validation::{ConfigError, Validatable};

pub use file::{
    ConfigFileError, discover_config_file, generate_example_config, load_config_file,
    load_or_default,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it for validation and autocompletion of
/// `.family-office.yaml` files.
pub fn generate_json_schema() -> serde_json::Result<String> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}
