//! The static datasets shown across the dashboard tabs.

use super::automation::{AutomationWorkflow, builtin_workflows};
use super::documents::{DocumentRecord, builtin_documents};
use super::portfolio::{PortfolioEntry, builtin_portfolio};
use serde::Serialize;

/// Colour intent of a headline metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricTone {
    Success,
    Info,
    Accent,
}

/// A headline card on the dashboard tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricCard {
    pub title: String,
    pub value: String,
    pub caption: String,
    pub tone: MetricTone,
}

impl MetricCard {
    pub fn new(
        title: impl Into<String>,
        value: impl Into<String>,
        caption: impl Into<String>,
        tone: MetricTone,
    ) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            caption: caption.into(),
            tone,
        }
    }
}

/// Everything the dashboard displays that is not view state.
///
/// Read-only once built; the view composes from a shared reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    pub metrics: Vec<MetricCard>,
    pub portfolio: Vec<PortfolioEntry>,
    pub documents: Vec<DocumentRecord>,
    pub insights: Vec<String>,
    pub workflows: Vec<AutomationWorkflow>,
}

impl Dataset {
    /// The mocked data shipped with the dashboard.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            metrics: builtin_metrics(),
            portfolio: builtin_portfolio(),
            documents: builtin_documents(),
            insights: builtin_insights(),
            workflows: builtin_workflows(),
        }
    }

    /// Sum of the displayed holdings.
    ///
    /// Not used by the allocation gauge, which divides by
    /// [`super::NOMINAL_PORTFOLIO_TOTAL`].
    #[must_use]
    pub fn displayed_total(&self) -> u64 {
        self.portfolio.iter().map(|entry| entry.value).sum()
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_metrics() -> Vec<MetricCard> {
    vec![
        MetricCard::new(
            "Total Assets",
            "$6.0M",
            "+4.2% from last month",
            MetricTone::Success,
        ),
        MetricCard::new(
            "Documents Processed",
            "247",
            "15 processed today",
            MetricTone::Info,
        ),
        MetricCard::new(
            "AI Recommendations",
            "12",
            "3 high priority",
            MetricTone::Accent,
        ),
    ]
}

fn builtin_insights() -> Vec<String> {
    [
        "Portfolio diversification suggests reducing equity exposure by 5%",
        "Tax optimization opportunities identified in real estate holdings",
        "Estate planning documents require updates based on new regulations",
        "Investment strategy alignment with family goals shows 92% match",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NOMINAL_PORTFOLIO_TOTAL;

    #[test]
    fn test_builtin_dataset_shape() {
        let data = Dataset::builtin();
        assert_eq!(data.metrics.len(), 3);
        assert_eq!(data.portfolio.len(), 4);
        assert_eq!(data.documents.len(), 4);
        assert_eq!(data.insights.len(), 4);
        assert_eq!(data.workflows.len(), 3);
    }

    #[test]
    fn test_displayed_total_diverges_from_nominal() {
        let mut data = Dataset::builtin();
        assert_eq!(data.displayed_total(), NOMINAL_PORTFOLIO_TOTAL);

        data.portfolio
            .push(PortfolioEntry::new("Private Credit", 1_500_000, -0.4));
        assert_eq!(data.displayed_total(), 7_500_000);
        // Gauge still measures against the nominal target
        assert_eq!(data.portfolio[0].allocation_label(), "41.67%");
    }
}
