//! Portfolio holdings and the allocation gauge ratio.

use serde::Serialize;

/// Divisor of the allocation gauge.
///
/// This is a fixed nominal target, not the sum of the displayed holdings.
/// The built-in holdings happen to add up to the same figure.
pub const NOMINAL_PORTFOLIO_TOTAL: u64 = 6_000_000;

/// A single asset class row on the portfolio tab.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioEntry {
    pub name: String,
    /// Market value in whole dollars
    pub value: u64,
    /// Period change in percent, signed
    pub change_percent: f64,
}

impl PortfolioEntry {
    pub fn new(name: impl Into<String>, value: u64, change_percent: f64) -> Self {
        Self {
            name: name.into(),
            value,
            change_percent,
        }
    }

    /// Share of [`NOMINAL_PORTFOLIO_TOTAL`] held by this entry.
    ///
    /// Not clamped: an entry larger than the nominal total yields a ratio
    /// above 1.0.
    #[must_use]
    pub fn nominal_ratio(&self) -> f64 {
        self.value as f64 / NOMINAL_PORTFOLIO_TOTAL as f64
    }

    /// Gauge label, two decimals ("41.67%").
    #[must_use]
    pub fn allocation_label(&self) -> String {
        format!("{:.2}%", self.nominal_ratio() * 100.0)
    }

    #[must_use]
    pub fn is_gain(&self) -> bool {
        self.change_percent > 0.0
    }
}

/// The built-in holdings.
#[must_use]
pub fn builtin_portfolio() -> Vec<PortfolioEntry> {
    vec![
        PortfolioEntry::new("Equity Investments", 2_500_000, 5.2),
        PortfolioEntry::new("Real Estate", 1_800_000, 2.1),
        PortfolioEntry::new("Fixed Income", 950_000, 1.8),
        PortfolioEntry::new("Alternative Investments", 750_000, 8.7),
    ]
}

/// Format whole dollars with US digit grouping: `2500000` -> `"$2,500,000"`.
#[must_use]
pub fn format_dollars(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    grouped.push('$');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Format a signed change: `+5.2%` for gains, `-1.3%` for losses, `0%` flat.
#[must_use]
pub fn format_change(change_percent: f64) -> String {
    // -0.0 + 0.0 is +0.0
    let change_percent = change_percent + 0.0;
    let sign = if change_percent > 0.0 { "+" } else { "" };
    format!("{sign}{change_percent}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equity_ratio_against_nominal_total() {
        let equity = &builtin_portfolio()[0];
        assert_eq!(equity.name, "Equity Investments");
        assert_eq!(equity.allocation_label(), "41.67%");
    }

    #[test]
    fn test_builtin_sum_matches_nominal_total() {
        let sum: u64 = builtin_portfolio().iter().map(|e| e.value).sum();
        assert_eq!(sum, NOMINAL_PORTFOLIO_TOTAL);
    }

    #[test]
    fn test_ratio_not_clamped() {
        let whale = PortfolioEntry::new("Whale", 12_000_000, 0.0);
        assert!((whale.nominal_ratio() - 2.0).abs() < f64::EPSILON);
        assert_eq!(whale.allocation_label(), "200.00%");
    }

    #[test]
    fn test_format_dollars() {
        assert_eq!(format_dollars(0), "$0");
        assert_eq!(format_dollars(950), "$950");
        assert_eq!(format_dollars(950_000), "$950,000");
        assert_eq!(format_dollars(2_500_000), "$2,500,000");
        assert_eq!(format_dollars(12_345_678_901), "$12,345,678,901");
    }

    #[test]
    fn test_format_change() {
        assert_eq!(format_change(5.2), "+5.2%");
        assert_eq!(format_change(-1.3), "-1.3%");
        assert_eq!(format_change(0.0), "0%");
    }

    #[test]
    fn test_format_change_negative_zero() {
        assert_eq!(format_change(-0.0), "0%");
        assert!(!PortfolioEntry::new("Cash", 1, -0.0).is_gain());
    }
}
