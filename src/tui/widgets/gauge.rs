//! Allocation gauge for portfolio rows.

use crate::tui::theme::colors;
use ratatui::{prelude::*, widgets::Widget};

/// A one-line block gauge with a trailing percentage label.
///
/// The ratio is clamped to `[0, 1]` for the filled width only; the label is
/// drawn as given.
pub struct AllocationBar {
    ratio: f64,
    label: String,
    color: Color,
}

impl AllocationBar {
    pub fn new(ratio: f64, label: impl Into<String>) -> Self {
        Self {
            ratio,
            label: label.into(),
            color: colors().primary,
        }
    }

    #[must_use]
    pub const fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Number of filled cells for a bar `width` cells wide.
    #[must_use]
    pub fn filled_cells(ratio: f64, width: usize) -> usize {
        let clamped = if ratio.is_finite() {
            ratio.clamp(0.0, 1.0)
        } else {
            0.0
        };
        ((clamped * width as f64).round() as usize).min(width)
    }
}

impl Widget for AllocationBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 10 || area.height < 1 {
            return;
        }

        let label_width = self.label.chars().count() + 1;
        let bar_width = (area.width as usize).saturating_sub(label_width);
        let filled = Self::filled_cells(self.ratio, bar_width);

        let y = area.y;
        let mut x = area.x;

        for i in 0..bar_width {
            let (ch, style) = if i < filled {
                ('█', Style::default().fg(self.color))
            } else {
                ('░', Style::default().fg(colors().muted))
            };
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(ch).set_style(style);
            }
            x += 1;
        }

        // Space
        if let Some(cell) = buf.cell_mut((x, y)) {
            cell.set_char(' ');
        }
        x += 1;

        for ch in self.label.chars() {
            if x >= area.x + area.width {
                break;
            }
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(ch)
                    .set_style(Style::default().fg(colors().text).bold());
            }
            x += 1;
        }
    }
}
