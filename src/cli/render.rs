//! Render command handler.
//!
//! Implements the `render` subcommand: compose the dashboard headlessly
//! after replaying a sequence of UI events, then write it as a report.

use crate::config::OutputConfig;
use crate::reports::{OutputTarget, emit_report, should_use_color};
use crate::tui::{DashboardApp, EventResult, UiEvent};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Settings for a headless render.
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Tab to select after the toggles are applied
    pub tab: Option<String>,
    /// Service identifiers to toggle, in order
    pub toggles: Vec<String>,
    /// Output format and color settings
    pub output: OutputConfig,
    /// Write to this file instead of stdout
    pub file: Option<PathBuf>,
}

impl RenderConfig {
    /// The event sequence this render replays.
    #[must_use]
    pub fn events(&self) -> Vec<UiEvent> {
        self.toggles
            .iter()
            .cloned()
            .map(UiEvent::ToggleConnection)
            .chain(self.tab.iter().cloned().map(UiEvent::SelectTab))
            .collect()
    }
}

/// Replay `events` against `app`, returning how many were ignored.
pub fn apply_events(app: &mut DashboardApp, events: impl IntoIterator<Item = UiEvent>) -> usize {
    events
        .into_iter()
        .filter(|event| app.dispatch(event.clone()) == EventResult::Ignored)
        .count()
}

/// Run the render command
pub fn run_render(config: &RenderConfig) -> Result<()> {
    let mut app = DashboardApp::default();
    let ignored = apply_events(&mut app, config.events());
    if ignored > 0 {
        tracing::warn!("{ignored} event(s) referenced unknown identifiers and were skipped");
    }

    let view = app.render();
    let target = OutputTarget::from_option(config.file.clone());
    let colored = should_use_color(config.output.no_color) && target.is_terminal();
    emit_report(&view, config.output.format, &target, colored)
        .with_context(|| format!("failed to write {} report", config.output.format))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ServiceId;
    use crate::reports::ReportFormat;
    use crate::tui::DashboardTab;
    use tempfile::TempDir;

    #[test]
    fn test_events_order_toggles_before_tab() {
        let config = RenderConfig {
            tab: Some("portfolio".to_string()),
            toggles: vec!["plaid".to_string(), "docusign".to_string()],
            ..RenderConfig::default()
        };
        assert_eq!(
            config.events(),
            vec![
                UiEvent::ToggleConnection("plaid".to_string()),
                UiEvent::ToggleConnection("docusign".to_string()),
                UiEvent::SelectTab("portfolio".to_string()),
            ]
        );
    }

    #[test]
    fn test_apply_events_counts_ignored() {
        let mut app = DashboardApp::default();
        let ignored = apply_events(
            &mut app,
            [
                UiEvent::ToggleConnection("plaid".to_string()),
                UiEvent::ToggleConnection("dropbox".to_string()),
                UiEvent::SelectTab("settings".to_string()),
            ],
        );
        assert_eq!(ignored, 2);
        assert!(app.connections().is_connected(ServiceId::Plaid));
        assert_eq!(app.active_tab(), DashboardTab::Dashboard);
    }

    #[test]
    fn test_run_render_to_file() {
        let tmp = TempDir::new().expect("tempdir");
        let path = tmp.path().join("dashboard.json");
        let config = RenderConfig {
            tab: Some("automation".to_string()),
            toggles: vec!["googleDrive".to_string()],
            output: OutputConfig {
                format: ReportFormat::Json,
                no_color: true,
            },
            file: Some(path.clone()),
        };
        run_render(&config).expect("render");

        let written = std::fs::read_to_string(path).expect("read");
        let value: serde_json::Value = serde_json::from_str(&written).expect("json");
        assert_eq!(value["view"]["content"]["tab"], "automation");
        assert_eq!(value["view"]["integrations"][0]["status_label"], "Connected");
    }
}
