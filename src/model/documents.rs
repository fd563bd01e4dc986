//! Recent document records.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Source format of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DocumentKind {
    #[serde(rename = "PDF")]
    Pdf,
    #[serde(rename = "Google Doc")]
    GoogleDoc,
    #[serde(rename = "Google Sheet")]
    GoogleSheet,
}

impl DocumentKind {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::GoogleDoc => "Google Doc",
            Self::GoogleSheet => "Google Sheet",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Processing state shown as a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DocumentStatus {
    Processed,
    #[serde(rename = "AI Analyzed")]
    AiAnalyzed,
    Pending,
    Signed,
}

impl DocumentStatus {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Processed => "Processed",
            Self::AiAnalyzed => "AI Analyzed",
            Self::Pending => "Pending",
            Self::Signed => "Signed",
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentRecord {
    pub name: String,
    pub kind: DocumentKind,
    pub status: DocumentStatus,
    pub date: NaiveDate,
}

impl DocumentRecord {
    /// Secondary line under the document name, e.g. `PDF • 2024-01-15`.
    #[must_use]
    pub fn subtitle(&self) -> String {
        format!("{} • {}", self.kind, self.date.format("%Y-%m-%d"))
    }
}

/// The built-in document list, newest first.
#[must_use]
pub fn builtin_documents() -> Vec<DocumentRecord> {
    [
        ("Q4 Financial Report", DocumentKind::Pdf, DocumentStatus::Processed, 15),
        (
            "Investment Strategy 2024",
            DocumentKind::GoogleDoc,
            DocumentStatus::AiAnalyzed,
            14,
        ),
        (
            "Tax Planning Notes",
            DocumentKind::GoogleSheet,
            DocumentStatus::Pending,
            13,
        ),
        (
            "Estate Planning Updates",
            DocumentKind::Pdf,
            DocumentStatus::Signed,
            12,
        ),
    ]
    .into_iter()
    .filter_map(|(name, kind, status, day)| {
        NaiveDate::from_ymd_opt(2024, 1, day).map(|date| DocumentRecord {
            name: name.to_string(),
            kind,
            status,
            date,
        })
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_documents() {
        let docs = builtin_documents();
        assert_eq!(docs.len(), 4);
        assert_eq!(docs[0].subtitle(), "PDF • 2024-01-15");
        assert_eq!(docs[1].status.label(), "AI Analyzed");
        assert_eq!(docs[2].kind, DocumentKind::GoogleSheet);
        assert_eq!(docs[3].status, DocumentStatus::Signed);
    }

    #[test]
    fn test_documents_sorted_newest_first() {
        let docs = builtin_documents();
        assert!(docs.windows(2).all(|w| w[0].date > w[1].date));
    }

    #[test]
    fn test_status_serializes_display_label() {
        let json = serde_json::to_string(&DocumentStatus::AiAnalyzed).expect("serialize");
        assert_eq!(json, "\"AI Analyzed\"");
    }
}
