//! Centralized theme and color scheme for the TUI.
//!
//! This module provides consistent styling across all dashboard panels.

use super::app::DashboardTab;
use super::view::BadgeVariant;
use crate::model::MetricTone;
use ratatui::prelude::*;
use std::sync::RwLock;

/// Color scheme for the TUI application.
/// Provides semantic colors for different UI elements.
#[derive(Debug, Clone, Copy)]
pub struct ColorScheme {
    // UI element colors
    pub primary: Color,
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
    pub border_focused: Color,
    pub text: Color,
    pub text_muted: Color,
    pub selection: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub insight: Color,

    // Badge foreground colors (for text on colored backgrounds)
    pub badge_fg_dark: Color,
    pub badge_fg_light: Color,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ColorScheme {
    /// Const dark theme for static initialization
    const fn dark_const() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            muted: Color::DarkGray,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            text: Color::White,
            text_muted: Color::Gray,
            selection: Color::DarkGray,

            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            info: Color::Blue,
            insight: Color::Magenta,

            badge_fg_dark: Color::Black,
            badge_fg_light: Color::White,
        }
    }

    /// Dark theme (default)
    #[must_use]
    pub const fn dark() -> Self {
        Self::dark_const()
    }

    /// Light theme
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Rgb(0, 100, 160),
            accent: Color::Rgb(180, 110, 0),
            muted: Color::Rgb(140, 140, 140),
            border: Color::Rgb(170, 170, 170),
            border_focused: Color::Rgb(0, 100, 160),
            text: Color::Rgb(20, 20, 20),
            text_muted: Color::Rgb(100, 100, 100),
            selection: Color::Rgb(210, 210, 220),

            success: Color::Rgb(0, 128, 0),
            warning: Color::Rgb(180, 140, 0),
            error: Color::Rgb(200, 0, 0),
            info: Color::Rgb(0, 0, 200),
            insight: Color::Rgb(128, 0, 128),

            badge_fg_dark: Color::Rgb(0, 0, 0),
            badge_fg_light: Color::Rgb(255, 255, 255),
        }
    }

    /// High contrast theme for accessibility
    #[must_use]
    pub const fn high_contrast() -> Self {
        Self {
            primary: Color::White,
            accent: Color::LightYellow,
            muted: Color::Gray,
            border: Color::White,
            border_focused: Color::LightYellow,
            text: Color::White,
            text_muted: Color::Gray,
            selection: Color::Blue,

            success: Color::LightGreen,
            warning: Color::LightYellow,
            error: Color::LightRed,
            info: Color::LightBlue,
            insight: Color::LightMagenta,

            badge_fg_dark: Color::Black,
            badge_fg_light: Color::White,
        }
    }

    /// Color of a headline metric value.
    #[must_use]
    pub const fn metric_color(&self, tone: MetricTone) -> Color {
        match tone {
            MetricTone::Success => self.success,
            MetricTone::Info => self.info,
            MetricTone::Accent => self.insight,
        }
    }

    /// Color of a signed change figure.
    #[must_use]
    pub const fn change_color(&self, gain: bool) -> Color {
        if gain { self.success } else { self.error }
    }
}

static THEME: RwLock<Theme> = RwLock::new(Theme::dark_const());

/// Theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: ColorScheme,
    pub name: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Names accepted by [`Theme::from_name`].
    pub const NAMES: [&'static str; 3] = ["dark", "light", "high-contrast"];

    /// Const dark theme for static initialization
    const fn dark_const() -> Self {
        Self {
            colors: ColorScheme::dark_const(),
            name: "dark",
        }
    }

    #[must_use]
    pub const fn dark() -> Self {
        Self::dark_const()
    }

    #[must_use]
    pub const fn light() -> Self {
        Self {
            colors: ColorScheme::light(),
            name: "light",
        }
    }

    #[must_use]
    pub const fn high_contrast() -> Self {
        Self {
            colors: ColorScheme::high_contrast(),
            name: "high-contrast",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            "high-contrast" | "highcontrast" | "hc" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }

    /// Whether `name` selects a known theme (rather than the dark fallback).
    #[must_use]
    pub fn is_known(name: &str) -> bool {
        matches!(
            name.to_lowercase().as_str(),
            "dark" | "light" | "high-contrast" | "highcontrast" | "hc"
        )
    }

    /// Get the next theme in the rotation
    #[must_use]
    pub fn next(&self) -> Self {
        match self.name {
            "dark" => Self::light(),
            "light" => Self::high_contrast(),
            _ => Self::dark(),
        }
    }
}

/// Set the current theme
pub fn set_theme(theme: Theme) {
    *THEME.write().expect("THEME lock not poisoned") = theme;
}

/// Toggle to the next theme in rotation (dark -> light -> high-contrast -> dark)
pub fn toggle_theme() -> &'static str {
    let mut theme = THEME.write().expect("THEME lock not poisoned");
    *theme = theme.next();
    theme.name
}

/// Convenience function to get current colors
pub fn colors() -> ColorScheme {
    THEME.read().expect("THEME lock not poisoned").colors
}

// ============================================================================
// Style Helpers
// ============================================================================

/// Common style presets for consistent UI elements
pub struct Styles;

impl Styles {
    pub fn header_title() -> Style {
        Style::default().fg(colors().primary).bold()
    }

    pub fn section_title() -> Style {
        Style::default().fg(colors().primary).bold()
    }

    pub fn text() -> Style {
        Style::default().fg(colors().text)
    }

    pub fn text_muted() -> Style {
        Style::default().fg(colors().text_muted)
    }

    pub fn border() -> Style {
        Style::default().fg(colors().border)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(colors().border_focused)
    }

    pub fn shortcut_key() -> Style {
        Style::default().fg(colors().accent)
    }

    pub fn shortcut_desc() -> Style {
        Style::default().fg(colors().text_muted)
    }
}

// ============================================================================
// Badge Rendering Helpers
// ============================================================================

/// Render a badge in one of the three component-library variants.
///
/// `Default` is filled with the primary color, `Secondary` is filled with a
/// muted color, `Outline` is bracketed text with no fill.
pub fn badge(label: &str, variant: BadgeVariant) -> Span<'static> {
    let scheme = colors();
    match variant {
        BadgeVariant::Default => Span::styled(
            format!(" {label} "),
            Style::default()
                .fg(scheme.badge_fg_dark)
                .bg(scheme.primary)
                .bold(),
        ),
        BadgeVariant::Secondary => Span::styled(
            format!(" {label} "),
            Style::default().fg(scheme.badge_fg_light).bg(scheme.muted),
        ),
        BadgeVariant::Outline => {
            Span::styled(format!("[{label}]"), Style::default().fg(scheme.text))
        }
    }
}

/// Render an inert or live button caption.
pub fn button(label: &str, variant: BadgeVariant, focused: bool) -> Span<'static> {
    let scheme = colors();
    let base = match variant {
        BadgeVariant::Default => Style::default().fg(scheme.accent).bold(),
        BadgeVariant::Secondary | BadgeVariant::Outline => Style::default().fg(scheme.text_muted),
    };
    let style = if focused {
        base.bg(scheme.selection).add_modifier(Modifier::REVERSED)
    } else {
        base
    };
    Span::styled(format!("‹ {label} ›"), style)
}

// ============================================================================
// Footer Hints
// ============================================================================

/// Tab-specific footer hints
pub struct FooterHints;

impl FooterHints {
    /// Get hints for a specific dashboard tab
    pub fn for_tab(tab: DashboardTab) -> Vec<(&'static str, &'static str)> {
        let mut hints = Self::global();

        match tab {
            DashboardTab::Portfolio => {
                hints.insert(0, ("bar", "share of $6.0M target"));
            }
            DashboardTab::Dashboard
            | DashboardTab::Documents
            | DashboardTab::AiInsights
            | DashboardTab::Automation => {}
        }

        hints
    }

    /// Global hints (always shown)
    pub fn global() -> Vec<(&'static str, &'static str)> {
        vec![
            ("1-5/Tab", "switch"),
            ("←→", "service"),
            ("Enter", "connect"),
            ("T", "theme"),
            ("?", "help"),
            ("q", "quit"),
        ]
    }
}

/// Render footer hints as spans
pub fn render_footer_hints(hints: &[(&str, &str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!("[{key}]"), Styles::shortcut_key()));
        spans.push(Span::styled((*desc).to_string(), Styles::shortcut_desc()));
    }

    spans
}
