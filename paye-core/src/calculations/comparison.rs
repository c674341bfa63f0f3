//! Side-by-side comparison of two income scenarios.
//!
//! The summary calculation runs once per scenario with zero rent, and the
//! result carries both summaries plus the absolute differences in total tax
//! and net income.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::summary::{TaxResult, TaxSummary, TaxSummaryInput};
use crate::models::{ReliefConfig, TaxSchedule};

/// One side of a comparison: an income and its pension contribution rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub gross_income: Decimal,
    pub pension_rate_percent: Decimal,
}

/// Both full summaries and the absolute gaps between them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub first: TaxResult,
    pub second: TaxResult,
    pub tax_difference: Decimal,
    pub net_income_difference: Decimal,
}

/// Runs the summary for each scenario and diffs the headline figures.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use paye_core::{ReliefConfig, TaxSchedule};
/// use paye_core::calculations::{Scenario, compare_scenarios};
///
/// let schedule = TaxSchedule::nigeria_2026().unwrap();
/// let reliefs = ReliefConfig::default();
///
/// let result = compare_scenarios(
///     &schedule,
///     &reliefs,
///     &Scenario { gross_income: dec!(1200000), pension_rate_percent: dec!(8) },
///     &Scenario { gross_income: dec!(1200000), pension_rate_percent: dec!(0) },
/// );
///
/// // The 8% pension shrinks the taxable base, so scenario one owes less.
/// assert_eq!(result.tax_difference, dec!(14400.00));
/// ```
pub fn compare_scenarios(
    schedule: &TaxSchedule,
    reliefs: &ReliefConfig,
    first: &Scenario,
    second: &Scenario,
) -> ComparisonResult {
    let summary = TaxSummary::new(schedule, reliefs);
    let first = summary.calculate(&scenario_input(first));
    let second = summary.calculate(&scenario_input(second));

    let tax_difference = (first.total_tax - second.total_tax).abs();
    let net_income_difference = (first.net_income - second.net_income).abs();

    ComparisonResult {
        first,
        second,
        tax_difference,
        net_income_difference,
    }
}

fn scenario_input(scenario: &Scenario) -> TaxSummaryInput {
    TaxSummaryInput {
        gross_income: scenario.gross_income,
        pension_rate_percent: scenario.pension_rate_percent,
        annual_rent: Decimal::ZERO,
    }
}
