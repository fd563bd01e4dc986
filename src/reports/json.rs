//! JSON report generator.

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::tui::DashboardView;
use chrono::Utc;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(&self, view: &DashboardView) -> Result<String, ReportError> {
        let report = JsonDashboardReport {
            metadata: JsonReportMetadata {
                tool: ToolInfo {
                    name: env!("CARGO_PKG_NAME"),
                    version: env!("CARGO_PKG_VERSION"),
                },
                generated_at: Utc::now().to_rfc3339(),
                active_tab: view.active_tab().id(),
                connected_services: view.integrations.iter().filter(|c| c.connected).count(),
            },
            view,
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        };
        json.map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[derive(Serialize)]
struct JsonDashboardReport<'a> {
    metadata: JsonReportMetadata,
    view: &'a DashboardView,
}

#[derive(Serialize)]
struct JsonReportMetadata {
    tool: ToolInfo,
    generated_at: String,
    active_tab: &'static str,
    connected_services: usize,
}

#[derive(Serialize)]
struct ToolInfo {
    name: &'static str,
    version: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Dataset, ServiceId};
    use crate::tui::{DashboardState, DashboardTab, compose};

    #[test]
    fn test_json_report_structure() {
        let mut state = DashboardState {
            active_tab: DashboardTab::AiInsights,
            ..DashboardState::default()
        };
        state.connections.toggle(ServiceId::Plaid);
        let view = compose(&state, &Dataset::builtin());

        let json = JsonReporter::new().generate(&view).expect("report");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value["metadata"]["active_tab"], "ai-insights");
        assert_eq!(value["metadata"]["connected_services"], 1);
        assert_eq!(value["view"]["content"]["tab"], "ai-insights");
        assert_eq!(
            value["view"]["content"]["items"].as_array().map(Vec::len),
            Some(Dataset::builtin().insights.len())
        );
        assert_eq!(value["view"]["integrations"][2]["connected"], true);
        assert_eq!(value["view"]["integrations"][2]["button_label"], "Disconnect");
    }

    #[test]
    fn test_compact_output_is_single_line() {
        let view = compose(&DashboardState::default(), &Dataset::builtin());
        let json = JsonReporter::new().pretty(false).generate(&view).expect("report");
        assert!(!json.contains('\n'));
        assert!(json.contains("\"tab\":\"dashboard\""));
    }
}
