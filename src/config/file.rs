//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::{AppConfig, ConfigOverrides};
use crate::error::DashboardError;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".family-office.yaml",
    ".family-office.yml",
    "family-office.yaml",
    "family-office.yml",
];

/// Directory name under the user config directory.
const CONFIG_DIR_NAME: &str = "family-office";

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/family-office/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path
        && path.exists()
    {
        return Some(path.to_path_buf());
    }

    search_dirs().iter().find_map(|dir| find_config_in_dir(dir))
}

/// Directories searched after an explicit path, in order.
#[must_use]
pub fn search_dirs() -> Vec<PathBuf> {
    let mut dirs_list = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        dirs_list.push(cwd);
    }
    if let Some(git_root) = find_git_root() {
        dirs_list.push(git_root);
    }
    if let Some(config_dir) = dirs::config_dir() {
        dirs_list.push(config_dir.join(CONFIG_DIR_NAME));
    }
    if let Some(home) = dirs::home_dir() {
        dirs_list.push(home);
    }
    dirs_list
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();

    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                (config, Some(path))
            }
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Layer CLI overrides over this config. Every flag that was passed
    /// wins, even when it spells out the default.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(theme) = &overrides.theme {
            self.tui.theme.clone_from(theme);
        }
        if let Some(tick_rate_ms) = overrides.tick_rate_ms {
            self.tui.tick_rate_ms = tick_rate_ms;
        }
        if overrides.mouse_enabled {
            self.tui.mouse_enabled = true;
        }

        if let Some(format) = overrides.format {
            self.output.format = format;
        }
        if overrides.no_color {
            self.output.no_color = true;
        }
    }

    /// Load from file, apply CLI overrides, then reset invalid fields.
    ///
    /// An explicit `config_path` must load; otherwise discovery falls back
    /// to defaults.
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        overrides: &ConfigOverrides,
    ) -> crate::Result<(Self, Option<PathBuf>)> {
        let (mut config, loaded_from) = match config_path {
            Some(path) => {
                let config = load_config_file(path)
                    .map_err(|e| DashboardError::Config(format!("{}: {e}", path.display())))?;
                tracing::info!("Loaded config from {}", path.display());
                (config, Some(path.to_path_buf()))
            }
            None => load_or_default(None),
        };

        config.apply_overrides(overrides);
        for err in config.repair() {
            tracing::warn!("{err}; using the default");
        }
        Ok((config, loaded_from))
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_example_config() -> String {
    r"# Family Office Dashboard Configuration
# ======================================
#
# Place this file at:
#   - .family-office.yaml in your working directory
#   - ~/.config/family-office/family-office.yaml for global config
#
# CLI arguments always override file settings.

# Interactive dashboard
tui:
  # Theme: dark, light, high-contrast
  theme: dark
  # Idle tick interval in milliseconds (10-5000)
  tick_rate_ms: 100
  # Capture mouse events
  mouse_enabled: false

# Headless `render` output
output:
  # Format: text, json
  format: text
  # Disable colored output
  no_color: false
"
    .to_string()
}
