use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Whether an entered income amount covers a year or a single month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncomePeriod {
    #[default]
    Annual,
    Monthly,
}

impl IncomePeriod {
    /// Converts an amount in this period to its annual equivalent.
    pub fn annualize(
        &self,
        amount: Decimal,
    ) -> Decimal {
        match self {
            Self::Annual => amount,
            Self::Monthly => amount * Decimal::from(12),
        }
    }
}
