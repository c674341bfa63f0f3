//! Deductions and derived summary metrics on top of the progressive walk.
//!
//! The summary pipeline:
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Pension contribution: gross income × pension rate |
//! | 2    | Rent relief: 25% of annual rent, capped at ₦500,000 |
//! | 3    | Total deductions: pension + rent relief |
//! | 4    | Taxable income: gross − deductions, floored at zero |
//! | 5    | Progressive walk over taxable income |
//! | 6    | Net income: gross − tax |
//! | 7    | Effective rate: tax ÷ gross × 100 |
//!
//! Deductions reduce the taxable base only; take-home pay is reduced by tax
//! alone. That asymmetry is deliberate and matches the statutory model.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use paye_core::{ReliefConfig, TaxSchedule};
//! use paye_core::calculations::{TaxSummary, TaxSummaryInput};
//!
//! let schedule = TaxSchedule::nigeria_2026().unwrap();
//! let reliefs = ReliefConfig::default();
//! let summary = TaxSummary::new(&schedule, &reliefs);
//!
//! let result = summary.calculate(&TaxSummaryInput {
//!     gross_income: dec!(1200000),
//!     pension_rate_percent: dec!(8),
//!     annual_rent: dec!(0),
//! });
//!
//! assert_eq!(result.pension_contribution, dec!(96000.00));
//! assert_eq!(result.taxable_income, dec!(1104000.00));
//! assert_eq!(result.total_tax, dec!(45600.00));
//! assert_eq!(result.net_income, dec!(1154400.00));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::{percent_of, round_half_up};
use crate::calculations::progressive::{BracketContribution, ProgressiveTax};
use crate::models::{ReliefConfig, TaxSchedule};

/// Validated inputs for one summary calculation.
///
/// All amounts are annual, non-negative, and already normalized by the
/// input layer (monthly income annualized, pension rate defaulted).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSummaryInput {
    pub gross_income: Decimal,
    pub pension_rate_percent: Decimal,
    pub annual_rent: Decimal,
}

/// The full derived result for one income: deductions, liability, take-home
/// figures, and the per-bracket breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    pub gross_income: Decimal,
    pub pension_contribution: Decimal,
    pub rent_relief: Decimal,
    pub total_deductions: Decimal,
    pub taxable_income: Decimal,
    pub total_tax: Decimal,
    pub net_income: Decimal,
    pub effective_rate_percent: Decimal,
    pub breakdown: Vec<BracketContribution>,
}

impl TaxResult {
    /// Tax liability per month.
    pub fn monthly_tax(&self) -> Decimal {
        round_half_up(self.total_tax / Decimal::from(12))
    }

    /// Take-home pay per month.
    pub fn monthly_net_income(&self) -> Decimal {
        round_half_up(self.net_income / Decimal::from(12))
    }
}

/// Summary calculator binding a bracket schedule to relief parameters.
#[derive(Debug, Clone)]
pub struct TaxSummary<'a> {
    schedule: &'a TaxSchedule,
    reliefs: &'a ReliefConfig,
}

impl<'a> TaxSummary<'a> {
    pub fn new(
        schedule: &'a TaxSchedule,
        reliefs: &'a ReliefConfig,
    ) -> Self {
        Self { schedule, reliefs }
    }

    /// Computes deductions, walks the brackets, and derives the summary
    /// metrics. Pure: identical inputs give identical results.
    pub fn calculate(
        &self,
        input: &TaxSummaryInput,
    ) -> TaxResult {
        debug!(gross_income = %input.gross_income, "calculating tax summary");

        let pension_contribution =
            percent_of(input.gross_income, input.pension_rate_percent);
        let rent_relief = self.rent_relief(input.annual_rent);
        let total_deductions = round_half_up(pension_contribution + rent_relief);
        let taxable_income =
            round_half_up(input.gross_income - total_deductions).max(Decimal::ZERO);

        let progressive = ProgressiveTax::new(self.schedule).compute(taxable_income);
        let total_tax = progressive.total_tax;

        // Only tax reduces take-home pay; deductions shrink the taxable base.
        let net_income = round_half_up(input.gross_income - total_tax);
        let effective_rate_percent = self.effective_rate(total_tax, input.gross_income);

        TaxResult {
            gross_income: input.gross_income,
            pension_contribution,
            rent_relief,
            total_deductions,
            taxable_income,
            total_tax,
            net_income,
            effective_rate_percent,
            breakdown: progressive.breakdown,
        }
    }

    /// Rent relief: a fraction of annual rent, capped.
    pub fn rent_relief(
        &self,
        annual_rent: Decimal,
    ) -> Decimal {
        round_half_up(annual_rent * self.reliefs.rent_relief_fraction)
            .min(self.reliefs.rent_relief_cap)
    }

    fn effective_rate(
        &self,
        total_tax: Decimal,
        gross_income: Decimal,
    ) -> Decimal {
        if gross_income > Decimal::ZERO {
            round_half_up(total_tax / gross_income * Decimal::ONE_HUNDRED)
        } else {
            Decimal::ZERO
        }
    }
}
