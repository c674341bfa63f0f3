//! Progressive bracket walk over a marginal-rate schedule.
//!
//! Taxable income is poured into the ordered brackets from the bottom up,
//! each bracket absorbing at most its interval width, and the open-ended top
//! bracket absorbing the remainder. The breakdown always carries one entry
//! per schedule bracket, zero rows included, so renderers decide for
//! themselves what to show.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use paye_core::TaxSchedule;
//! use paye_core::calculations::ProgressiveTax;
//!
//! let schedule = TaxSchedule::nigeria_2026().unwrap();
//! let result = ProgressiveTax::new(&schedule).compute(dec!(1104000));
//!
//! // ₦800,000 exempt, the remaining ₦304,000 taxed at 15%.
//! assert_eq!(result.total_tax, dec!(45600.00));
//! assert_eq!(result.breakdown.len(), 6);
//! assert_eq!(result.breakdown[1].taxed_amount, dec!(304000));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::percent_of;
use crate::models::{TaxBracket, TaxSchedule};

/// The slice of taxable income that fell into one bracket, and the tax it
/// attracted there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketContribution {
    pub bracket: TaxBracket,
    pub taxed_amount: Decimal,
    pub tax: Decimal,
}

/// Total liability plus the per-bracket breakdown, in schedule order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressiveTaxResult {
    pub total_tax: Decimal,
    pub breakdown: Vec<BracketContribution>,
}

/// Marginal tax calculator over a validated schedule.
#[derive(Debug, Clone)]
pub struct ProgressiveTax<'a> {
    schedule: &'a TaxSchedule,
}

impl<'a> ProgressiveTax<'a> {
    pub fn new(schedule: &'a TaxSchedule) -> Self {
        Self { schedule }
    }

    /// Walks the brackets and assigns every unit of `taxable_income` to
    /// exactly one of them.
    ///
    /// Callers validate that the income is a non-negative finite amount;
    /// the walk itself is total and produces an all-zero breakdown for
    /// zero income.
    pub fn compute(
        &self,
        taxable_income: Decimal,
    ) -> ProgressiveTaxResult {
        debug!(%taxable_income, "computing progressive tax");

        let mut remaining = taxable_income;
        let mut total_tax = Decimal::ZERO;
        let mut breakdown = Vec::with_capacity(self.schedule.brackets().len());

        for bracket in self.schedule.brackets() {
            let taxed_amount = match bracket.capacity() {
                Some(capacity) => remaining.min(capacity),
                None => remaining,
            };
            let tax = percent_of(taxed_amount, bracket.rate_percent);

            total_tax += tax;
            remaining -= taxed_amount;
            breakdown.push(BracketContribution {
                bracket: bracket.clone(),
                taxed_amount,
                tax,
            });
        }

        ProgressiveTaxResult {
            total_tax,
            breakdown,
        }
    }
}
