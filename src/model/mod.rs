//! Dashboard data model.
//!
//! Two kinds of data live here: the mocked, read-only datasets the tabs
//! display, and the [`ConnectionStatus`] flags that the integration grid
//! toggles.

mod automation;
mod dataset;
mod documents;
mod portfolio;
mod service;

pub use automation::{AutomationWorkflow, WorkflowStatus, builtin_workflows};
pub use dataset::{Dataset, MetricCard, MetricTone};
pub use documents::{DocumentKind, DocumentRecord, DocumentStatus, builtin_documents};
pub use portfolio::{
    NOMINAL_PORTFOLIO_TOTAL, PortfolioEntry, builtin_portfolio, format_change, format_dollars,
};
pub use service::{ConnectionStatus, ServiceId};
