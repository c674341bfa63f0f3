//! Shared helpers for monetary arithmetic.

use rust_decimal::Decimal;

/// Rounds a monetary value to two decimal places using half-up rounding,
/// away from zero at the midpoint.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use paye_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(45599.854)), dec!(45599.85));
/// assert_eq!(round_half_up(dec!(45599.855)), dec!(45599.86));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Applies a percentage rate to an amount, rounded to two decimal places.
///
/// Rates are expressed as percentages (15 means 15%), matching how the
/// bracket schedule carries them.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use paye_core::calculations::common::percent_of;
///
/// assert_eq!(percent_of(dec!(304000), dec!(15)), dec!(45600.00));
/// assert_eq!(percent_of(dec!(100000), dec!(10)), dec!(10000.00));
/// ```
pub fn percent_of(
    amount: Decimal,
    rate_percent: Decimal,
) -> Decimal {
    round_half_up(amount * rate_percent / Decimal::ONE_HUNDRED)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn round_half_up_rounds_down_below_midpoint() {
        let result = round_half_up(dec!(0.054));

        assert_eq!(result, dec!(0.05));
    }

    #[test]
    fn round_half_up_rounds_up_at_midpoint() {
        let result = round_half_up(dec!(0.055));

        assert_eq!(result, dec!(0.06));
    }

    #[test]
    fn round_half_up_preserves_whole_amounts() {
        let result = round_half_up(dec!(45600));

        assert_eq!(result, dec!(45600));
    }

    #[test]
    fn percent_of_zero_rate_is_zero() {
        let result = percent_of(dec!(800000), Decimal::ZERO);

        assert_eq!(result, dec!(0.00));
    }

    #[test]
    fn percent_of_applies_marginal_rate() {
        let result = percent_of(dec!(2200000), dec!(15));

        assert_eq!(result, dec!(330000.00));
    }

    #[test]
    fn percent_of_zero_amount_is_zero() {
        let result = percent_of(Decimal::ZERO, dec!(25));

        assert_eq!(result, dec!(0.00));
    }
}
