//! Automation workflow descriptors.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WorkflowStatus {
    Active,
    #[serde(rename = "Pending Setup")]
    PendingSetup,
}

impl WorkflowStatus {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::PendingSetup => "Pending Setup",
        }
    }

    /// The inert button offered next to the status badge.
    #[must_use]
    pub const fn action_label(&self) -> &'static str {
        match self {
            Self::Active => "Configure",
            Self::PendingSetup => "Setup",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AutomationWorkflow {
    pub title: String,
    pub description: String,
    pub status: WorkflowStatus,
}

impl AutomationWorkflow {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        status: WorkflowStatus,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            status,
        }
    }
}

#[must_use]
pub fn builtin_workflows() -> Vec<AutomationWorkflow> {
    vec![
        AutomationWorkflow::new(
            "Google Drive → Code Generation",
            "Automatically generate code components from document updates",
            WorkflowStatus::Active,
        ),
        AutomationWorkflow::new(
            "Document Processing Pipeline",
            "OCR, text extraction, and AI analysis of uploaded documents",
            WorkflowStatus::Active,
        ),
        AutomationWorkflow::new(
            "Financial Data Sync",
            "Real-time synchronization with banking and investment APIs",
            WorkflowStatus::PendingSetup,
        ),
    ]
}
