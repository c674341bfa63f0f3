//! Terminal bar chart of the income distribution.
//!
//! Renders the four categories of a summary (gross, tax, pension, net) as
//! horizontal bars scaled to the largest of them, colored by the active
//! theme.

use paye_core::calculations::TaxResult;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::format::format_naira;
use crate::prefs::Theme;

const BAR_WIDTH: usize = 40;
const RESET: &str = "\x1b[0m";

/// ANSI colors for (gross, tax, pension, net). The dark palette uses the
/// bright variants; the light palette the standard ones.
fn palette(theme: Theme) -> [&'static str; 4] {
    match theme {
        Theme::Dark => ["\x1b[96m", "\x1b[91m", "\x1b[93m", "\x1b[92m"],
        Theme::Light => ["\x1b[36m", "\x1b[31m", "\x1b[33m", "\x1b[32m"],
    }
}

/// Renders the distribution chart for one summary result.
pub fn render_distribution(
    result: &TaxResult,
    theme: Theme,
) -> String {
    let categories = [
        ("Gross", result.gross_income),
        ("Tax", result.total_tax),
        ("Pension", result.pension_contribution),
        ("Net", result.net_income),
    ];
    let colors = palette(theme);
    let max = categories
        .iter()
        .map(|(_, amount)| *amount)
        .max()
        .unwrap_or(Decimal::ZERO);

    let mut lines = Vec::with_capacity(categories.len());
    for ((label, amount), color) in categories.into_iter().zip(colors) {
        let bar = "█".repeat(bar_length(amount, max));
        lines.push(format!(
            "  {label:<8}{color}{bar}{RESET} {}",
            format_naira(amount)
        ));
    }
    lines.join("\n")
}

fn bar_length(
    amount: Decimal,
    max: Decimal,
) -> usize {
    if max <= Decimal::ZERO || amount <= Decimal::ZERO {
        return 0;
    }
    let scaled = (amount * Decimal::from(BAR_WIDTH as u64) / max)
        .round()
        .to_usize()
        .unwrap_or(0);
    // A non-zero category always shows at least one cell.
    scaled.max(1)
}
