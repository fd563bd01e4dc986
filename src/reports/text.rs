//! Plain text report for shell output.

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::tui::widgets::AllocationBar;
use crate::tui::{DashboardView, TabContent};
use std::fmt::Write as _;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Width of the text gauge in characters.
const GAUGE_WIDTH: usize = 20;

/// Text reporter for shell output
pub struct TextReporter {
    /// Use colored output
    colored: bool,
}

impl TextReporter {
    /// Create a new text reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn write_content(&self, out: &mut String, content: &TabContent) -> std::fmt::Result {
        match content {
            TabContent::Dashboard(cards) => {
                for card in cards {
                    writeln!(
                        out,
                        "  {:<22} {:>8}  {}",
                        card.title,
                        self.color(&card.value, "bold"),
                        self.color(&card.caption, "dim")
                    )?;
                }
            }
            TabContent::Portfolio(rows) => {
                for row in rows {
                    let filled = AllocationBar::filled_cells(row.ratio, GAUGE_WIDTH);
                    let gauge = format!(
                        "{}{}",
                        "█".repeat(filled),
                        "░".repeat(GAUGE_WIDTH - filled)
                    );
                    writeln!(
                        out,
                        "  {:<26} {:>12} {:>7}  {} {}",
                        row.name,
                        row.value_label,
                        self.color(&row.change_label, if row.gain { "green" } else { "red" }),
                        gauge,
                        row.ratio_label
                    )?;
                }
            }
            TabContent::Documents(rows) => {
                for row in rows {
                    writeln!(
                        out,
                        "  {:<28} [{}]",
                        row.name,
                        self.color(row.status_label, "cyan")
                    )?;
                    writeln!(out, "    {}", self.color(&row.subtitle, "dim"))?;
                }
            }
            TabContent::AiInsights(insights) => {
                for insight in insights {
                    writeln!(out, "  ◆ {insight}")?;
                }
            }
            TabContent::Automation(rows) => {
                for row in rows {
                    writeln!(
                        out,
                        "  {}  [{}]  ‹ {} ›",
                        self.color(&row.title, "bold"),
                        row.status_label,
                        row.action_label
                    )?;
                    writeln!(out, "    {}", self.color(&row.description, "dim"))?;
                }
            }
        }
        Ok(())
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TextReporter {
    fn generate(&self, view: &DashboardView) -> Result<String, ReportError> {
        let mut out = String::new();

        writeln!(out, "{}", self.color(view.header.title, "bold"))?;
        writeln!(out, "{}", self.color(view.header.subtitle, "dim"))?;
        writeln!(out, "{}", self.color("─".repeat(60).as_str(), "dim"))?;

        writeln!(out, "{}", self.color("API Integration Status", "cyan"))?;
        for card in &view.integrations {
            let status = if card.connected {
                self.color(card.status_label, "green")
            } else {
                self.color(card.status_label, "yellow")
            };
            writeln!(out, "  {:<14} {}", card.label, status)?;
        }
        writeln!(out)?;

        let tabs: Vec<String> = view
            .tabs
            .iter()
            .map(|t| {
                if t.active {
                    self.color(&format!("[{}]", t.title), "bold")
                } else {
                    t.title.to_string()
                }
            })
            .collect();
        writeln!(out, "{}", tabs.join(" │ "))?;

        let (heading, description) = view.content.heading();
        writeln!(out, "{}", self.color(heading, "cyan"))?;
        if let Some(desc) = description {
            writeln!(out, "{}", self.color(desc, "dim"))?;
        }
        self.write_content(&mut out, &view.content)?;

        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Text
    }
}
