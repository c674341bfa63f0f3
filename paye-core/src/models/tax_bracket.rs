use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single marginal-rate band covering the half-open income interval
/// `(min_income, max_income]`. The final band of a schedule is open-ended
/// (`max_income` is `None`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub rate_percent: Decimal,
    /// Display form with the statutory integer bounds, e.g. "₦800,001 - ₦3,000,000".
    pub label: String,
}

impl TaxBracket {
    /// Width of the bracket's income interval, `None` for the open-ended band.
    pub fn capacity(&self) -> Option<Decimal> {
        self.max_income.map(|max| max - self.min_income)
    }

    /// Whether `income` falls inside this bracket. Income exactly on the
    /// statutory boundary belongs to the lower bracket.
    pub fn contains(&self, income: Decimal) -> bool {
        let above_min = income > self.min_income || self.min_income.is_zero();
        let below_max = self.max_income.is_none_or(|max| income <= max);
        above_min && below_max
    }
}
