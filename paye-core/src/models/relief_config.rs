use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Relief and flat-rate parameters that sit alongside the bracket schedule.
///
/// `Default` carries the statutory values: 8% pension contribution when the
/// payer does not specify one, rent relief of 25% of annual rent capped at
/// ₦500,000, and a 10% flat rate on one-off bonuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReliefConfig {
    pub default_pension_rate_percent: Decimal,
    pub rent_relief_fraction: Decimal,
    pub rent_relief_cap: Decimal,
    pub bonus_flat_rate_percent: Decimal,
}

impl Default for ReliefConfig {
    fn default() -> Self {
        Self {
            default_pension_rate_percent: Decimal::from(8),
            rent_relief_fraction: Decimal::new(25, 2),
            rent_relief_cap: Decimal::from(500_000),
            bonus_flat_rate_percent: Decimal::from(10),
        }
    }
}
