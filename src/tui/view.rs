//! Pure composition of the dashboard view tree.
//!
//! [`compose`] turns `(state, dataset)` into a [`DashboardView`] value. The
//! terminal surface and the headless reporters both draw from this value,
//! so every label, badge and ratio is decided here exactly once.

use super::app::{DashboardState, DashboardTab};
use crate::model::{
    Dataset, DocumentStatus, MetricCard, PortfolioEntry, ServiceId, WorkflowStatus, format_change,
    format_dollars,
};
use serde::Serialize;

pub const PLATFORM_TITLE: &str = "Family Office Management Platform";
pub const PLATFORM_SUBTITLE: &str = "AI-Powered Wealth Management & Document Intelligence";

/// Visual emphasis of a badge or button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVariant {
    Default,
    Secondary,
    Outline,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderView {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub badge: &'static str,
}

/// One card in the always-visible integration grid.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntegrationCard {
    pub service: ServiceId,
    pub label: &'static str,
    pub connected: bool,
    pub status_label: &'static str,
    pub status_variant: BadgeVariant,
    pub button_label: &'static str,
    pub button_variant: BadgeVariant,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabTitle {
    pub tab: DashboardTab,
    pub title: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioRow {
    pub name: String,
    pub value_label: String,
    pub change_label: String,
    pub gain: bool,
    /// Share of the nominal total; may exceed 1.0
    pub ratio: f64,
    pub ratio_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentRow {
    pub name: String,
    pub subtitle: String,
    pub status_label: &'static str,
    pub status_variant: BadgeVariant,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkflowRow {
    pub title: String,
    pub description: String,
    pub status_label: &'static str,
    pub status_variant: BadgeVariant,
    pub action_label: &'static str,
    pub action_variant: BadgeVariant,
}

/// The single content region selected by the active tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "tab", content = "items", rename_all = "kebab-case")]
pub enum TabContent {
    Dashboard(Vec<MetricCard>),
    Portfolio(Vec<PortfolioRow>),
    Documents(Vec<DocumentRow>),
    AiInsights(Vec<String>),
    Automation(Vec<WorkflowRow>),
}

impl TabContent {
    /// The tab this region belongs to.
    #[must_use]
    pub const fn tab(&self) -> DashboardTab {
        match self {
            Self::Dashboard(_) => DashboardTab::Dashboard,
            Self::Portfolio(_) => DashboardTab::Portfolio,
            Self::Documents(_) => DashboardTab::Documents,
            Self::AiInsights(_) => DashboardTab::AiInsights,
            Self::Automation(_) => DashboardTab::Automation,
        }
    }

    /// Panel heading and description.
    #[must_use]
    pub const fn heading(&self) -> (&'static str, Option<&'static str>) {
        match self {
            Self::Dashboard(_) => ("Overview", None),
            Self::Portfolio(_) => ("Portfolio Overview", Some("Asset allocation and performance")),
            Self::Documents(_) => (
                "Recent Documents",
                Some("Google Drive integration and AI processing status"),
            ),
            Self::AiInsights(_) => (
                "AI-Generated Insights",
                Some("Blackbox AI analysis of your documents and data"),
            ),
            Self::Automation(_) => (
                "Automation Workflows",
                Some("Document-to-code generation and automated processes"),
            ),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Dashboard(items) => items.len(),
            Self::Portfolio(items) => items.len(),
            Self::Documents(items) => items.len(),
            Self::AiInsights(items) => items.len(),
            Self::Automation(items) => items.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The full composed dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub header: HeaderView,
    pub integrations: Vec<IntegrationCard>,
    pub tabs: Vec<TabTitle>,
    pub content: TabContent,
}

impl DashboardView {
    #[must_use]
    pub const fn active_tab(&self) -> DashboardTab {
        self.content.tab()
    }
}

/// Build the view tree for `state` over `dataset`. No I/O, no mutation.
#[must_use]
pub fn compose(state: &DashboardState, dataset: &Dataset) -> DashboardView {
    DashboardView {
        header: HeaderView {
            title: PLATFORM_TITLE,
            subtitle: PLATFORM_SUBTITLE,
            badge: "Live Demo",
        },
        integrations: state
            .connections
            .iter()
            .map(|(service, connected)| integration_card(service, connected))
            .collect(),
        tabs: DashboardTab::ALL
            .into_iter()
            .map(|tab| TabTitle {
                tab,
                title: tab.title(),
                active: tab == state.active_tab,
            })
            .collect(),
        content: tab_content(state.active_tab, dataset),
    }
}

fn integration_card(service: ServiceId, connected: bool) -> IntegrationCard {
    IntegrationCard {
        service,
        label: service.label(),
        connected,
        status_label: if connected { "Connected" } else { "Not Connected" },
        status_variant: if connected {
            BadgeVariant::Default
        } else {
            BadgeVariant::Secondary
        },
        button_label: if connected { "Disconnect" } else { "Connect" },
        button_variant: if connected {
            BadgeVariant::Outline
        } else {
            BadgeVariant::Default
        },
    }
}

fn tab_content(tab: DashboardTab, dataset: &Dataset) -> TabContent {
    match tab {
        DashboardTab::Dashboard => TabContent::Dashboard(dataset.metrics.clone()),
        DashboardTab::Portfolio => {
            TabContent::Portfolio(dataset.portfolio.iter().map(portfolio_row).collect())
        }
        DashboardTab::Documents => TabContent::Documents(
            dataset
                .documents
                .iter()
                .map(|doc| DocumentRow {
                    name: doc.name.clone(),
                    subtitle: doc.subtitle(),
                    status_label: doc.status.label(),
                    status_variant: document_variant(doc.status),
                })
                .collect(),
        ),
        DashboardTab::AiInsights => TabContent::AiInsights(dataset.insights.clone()),
        DashboardTab::Automation => TabContent::Automation(
            dataset
                .workflows
                .iter()
                .map(|wf| WorkflowRow {
                    title: wf.title.clone(),
                    description: wf.description.clone(),
                    status_label: wf.status.label(),
                    status_variant: match wf.status {
                        WorkflowStatus::Active => BadgeVariant::Outline,
                        WorkflowStatus::PendingSetup => BadgeVariant::Secondary,
                    },
                    action_label: wf.status.action_label(),
                    action_variant: match wf.status {
                        WorkflowStatus::Active => BadgeVariant::Outline,
                        WorkflowStatus::PendingSetup => BadgeVariant::Default,
                    },
                })
                .collect(),
        ),
    }
}

fn portfolio_row(entry: &PortfolioEntry) -> PortfolioRow {
    PortfolioRow {
        name: entry.name.clone(),
        value_label: format_dollars(entry.value),
        change_label: format_change(entry.change_percent),
        gain: entry.is_gain(),
        ratio: entry.nominal_ratio(),
        ratio_label: entry.allocation_label(),
    }
}

const fn document_variant(status: DocumentStatus) -> BadgeVariant {
    match status {
        DocumentStatus::Processed | DocumentStatus::Signed => BadgeVariant::Default,
        DocumentStatus::AiAnalyzed => BadgeVariant::Secondary,
        DocumentStatus::Pending => BadgeVariant::Outline,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ConnectionStatus, PortfolioEntry};

    fn state_for(tab: DashboardTab) -> DashboardState {
        DashboardState {
            connections: ConnectionStatus::new(),
            active_tab: tab,
        }
    }

    #[test]
    fn test_each_tab_yields_its_region() {
        let data = Dataset::builtin();
        for tab in DashboardTab::ALL {
            let view = compose(&state_for(tab), &data);
            assert_eq!(view.active_tab(), tab);
            assert_eq!(view.tabs.iter().filter(|t| t.active).count(), 1);
            assert!(view.tabs[tab.index()].active);
        }
    }

    #[test]
    fn test_compose_is_pure() {
        let data = Dataset::builtin();
        let mut state = state_for(DashboardTab::Portfolio);
        state.connections.toggle(ServiceId::BlackboxAi);
        assert_eq!(compose(&state, &data), compose(&state, &data));
    }

    #[test]
    fn test_integration_grid_always_present() {
        let data = Dataset::builtin();
        for tab in DashboardTab::ALL {
            let view = compose(&state_for(tab), &data);
            assert_eq!(view.integrations.len(), 4);
            assert!(
                view.integrations
                    .iter()
                    .all(|card| card.status_label == "Not Connected"
                        && card.button_label == "Connect")
            );
        }
    }

    #[test]
    fn test_portfolio_ratio_uses_nominal_total_with_extra_entry() {
        let mut data = Dataset::builtin();
        data.portfolio
            .push(PortfolioEntry::new("Collectibles", 600_000, -2.5));

        let view = compose(&state_for(DashboardTab::Portfolio), &data);
        let TabContent::Portfolio(rows) = view.content else {
            panic!("expected portfolio panel");
        };
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].ratio_label, "41.67%");
        assert_eq!(rows[0].value_label, "$2,500,000");
        assert_eq!(rows[0].change_label, "+5.2%");
        assert_eq!(rows[4].ratio_label, "10.00%");
        assert_eq!(rows[4].change_label, "-2.5%");
        assert!(!rows[4].gain);
    }

    #[test]
    fn test_document_badge_variants() {
        let view = compose(&state_for(DashboardTab::Documents), &Dataset::builtin());
        let TabContent::Documents(rows) = view.content else {
            panic!("expected documents panel");
        };
        let variants: Vec<_> = rows.iter().map(|r| r.status_variant).collect();
        assert_eq!(
            variants,
            vec![
                BadgeVariant::Default,
                BadgeVariant::Secondary,
                BadgeVariant::Outline,
                BadgeVariant::Default,
            ]
        );
    }

    #[test]
    fn test_content_serializes_with_tab_tag() {
        let view = compose(&state_for(DashboardTab::AiInsights), &Dataset::builtin());
        let json = serde_json::to_value(&view.content).expect("serialize");
        assert_eq!(json["tab"], "ai-insights");
        assert_eq!(json["items"].as_array().map(Vec::len), Some(4));
    }
}
