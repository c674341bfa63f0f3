//! Display formatting for naira amounts and rates.

use paye_core::calculations::common::round_half_up;
use rust_decimal::Decimal;

/// Formats an amount as naira with comma thousands separators and two
/// decimal places, e.g. `₦1,154,400.00`.
pub fn format_naira(amount: Decimal) -> String {
    let rounded = round_half_up(amount);
    let negative = rounded < Decimal::ZERO;
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = match text.split_once('.') {
        Some((whole, cents)) => (whole, cents),
        None => (text.as_str(), "00"),
    };
    let grouped = group_thousands(whole);
    if negative {
        format!("-₦{grouped}.{cents}")
    } else {
        format!("₦{grouped}.{cents}")
    }
}

/// Formats a percentage rate without trailing zeros, e.g. `15%` or `12.5%`.
pub fn format_rate(rate_percent: Decimal) -> String {
    format!("{}%", rate_percent.normalize())
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn format_naira_groups_thousands() {
        assert_eq!(format_naira(dec!(1154400)), "₦1,154,400.00");
        assert_eq!(format_naira(dec!(800000)), "₦800,000.00");
    }

    #[test]
    fn format_naira_keeps_small_amounts_ungrouped() {
        assert_eq!(format_naira(dec!(0)), "₦0.00");
        assert_eq!(format_naira(dec!(999)), "₦999.00");
    }

    #[test]
    fn format_naira_shows_two_decimal_places() {
        assert_eq!(format_naira(dec!(45600.5)), "₦45,600.50");
        assert_eq!(format_naira(dec!(45599.855)), "₦45,599.86");
    }

    #[test]
    fn format_naira_handles_negative_amounts() {
        assert_eq!(format_naira(dec!(-14400)), "-₦14,400.00");
    }

    #[test]
    fn format_rate_drops_trailing_zeros() {
        assert_eq!(format_rate(dec!(15)), "15%");
        assert_eq!(format_rate(dec!(15.00)), "15%");
        assert_eq!(format_rate(dec!(12.5)), "12.5%");
    }

    #[test]
    fn format_rate_zero() {
        assert_eq!(format_rate(dec!(0)), "0%");
    }
}
