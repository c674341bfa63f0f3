//! Flat-rate tax on one-off bonuses.
//!
//! Bonuses sit outside the progressive schedule entirely: a single flat rate
//! applies to the whole amount, with no brackets and no deductions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{percent_of, round_half_up};

/// Tax and take-home amounts for a one-off bonus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BonusTaxResult {
    pub bonus: Decimal,
    pub tax: Decimal,
    pub net: Decimal,
}

/// Taxes a bonus at the given flat rate.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use paye_core::calculations::calculate_bonus_tax;
///
/// let result = calculate_bonus_tax(dec!(100000), dec!(10));
///
/// assert_eq!(result.tax, dec!(10000.00));
/// assert_eq!(result.net, dec!(90000.00));
/// ```
pub fn calculate_bonus_tax(
    bonus: Decimal,
    flat_rate_percent: Decimal,
) -> BonusTaxResult {
    let tax = percent_of(bonus, flat_rate_percent);
    let net = round_half_up(bonus - tax);
    BonusTaxResult { bonus, tax, net }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn bonus_is_taxed_at_flat_rate() {
        let result = calculate_bonus_tax(dec!(100000), dec!(10));

        assert_eq!(result.tax, dec!(10000.00));
        assert_eq!(result.net, dec!(90000.00));
    }

    #[test]
    fn zero_bonus_owes_nothing() {
        let result = calculate_bonus_tax(Decimal::ZERO, dec!(10));

        assert_eq!(result.tax, dec!(0.00));
        assert_eq!(result.net, dec!(0.00));
    }

    #[test]
    fn tax_and_net_sum_to_bonus() {
        let result = calculate_bonus_tax(dec!(333333.33), dec!(10));

        assert_eq!(result.tax + result.net, result.bonus);
    }
}
