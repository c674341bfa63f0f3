//! End-to-end checks of the published worked examples for the 2026 schedule.

use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use paye_core::calculations::{
    ProgressiveTax, Scenario, TaxSummary, TaxSummaryInput, calculate_bonus_tax, compare_scenarios,
};
use paye_core::{IncomePeriod, MonthlyIncomes, ReliefConfig, TaxSchedule};

#[test]
fn salary_of_1_2m_with_default_pension() {
    let schedule = TaxSchedule::nigeria_2026().unwrap();
    let reliefs = ReliefConfig::default();
    let summary = TaxSummary::new(&schedule, &reliefs);

    let result = summary.calculate(&TaxSummaryInput {
        gross_income: dec!(1200000),
        pension_rate_percent: reliefs.default_pension_rate_percent,
        annual_rent: dec!(0),
    });

    assert_eq!(result.pension_contribution, dec!(96000.00));
    assert_eq!(result.rent_relief, dec!(0.00));
    assert_eq!(result.taxable_income, dec!(1104000.00));
    assert_eq!(result.total_tax, dec!(45600.00));
    assert_eq!(result.net_income, dec!(1154400.00));
    assert_eq!(result.effective_rate_percent, dec!(3.80));

    // The exempt band contributes nothing; the 15% band carries it all.
    assert_eq!(result.breakdown[0].tax, dec!(0.00));
    assert_eq!(result.breakdown[1].taxed_amount, dec!(304000.00));
    assert_eq!(result.breakdown[1].tax, dec!(45600.00));
}

#[test]
fn monthly_salary_annualizes_to_the_same_result() {
    let schedule = TaxSchedule::nigeria_2026().unwrap();
    let reliefs = ReliefConfig::default();
    let summary = TaxSummary::new(&schedule, &reliefs);

    let annual = IncomePeriod::Monthly.annualize(dec!(100000));
    let result = summary.calculate(&TaxSummaryInput {
        gross_income: annual,
        pension_rate_percent: dec!(8),
        annual_rent: dec!(0),
    });

    assert_eq!(annual, dec!(1200000));
    assert_eq!(result.total_tax, dec!(45600.00));
    assert_eq!(result.monthly_net_income(), dec!(96200.00));
}

#[test]
fn twelve_monthly_entries_feed_the_summary() {
    let schedule = TaxSchedule::nigeria_2026().unwrap();
    let reliefs = ReliefConfig::default();
    let summary = TaxSummary::new(&schedule, &reliefs);

    let incomes = MonthlyIncomes::new([dec!(100000); 12]);
    let result = summary.calculate(&TaxSummaryInput {
        gross_income: incomes.total(),
        pension_rate_percent: dec!(8),
        annual_rent: dec!(0),
    });

    assert_eq!(result.gross_income, dec!(1200000));
    assert_eq!(result.total_tax, dec!(45600.00));
}

#[test]
fn income_of_3m_never_reaches_the_18_percent_band() {
    let schedule = TaxSchedule::nigeria_2026().unwrap();

    let result = ProgressiveTax::new(&schedule).compute(dec!(3000000));

    assert_eq!(result.breakdown[2].taxed_amount, Decimal::ZERO);
    assert_eq!(result.total_tax, dec!(330000.00));
}

#[test]
fn bonus_of_100k_at_the_flat_rate() {
    let reliefs = ReliefConfig::default();

    let result = calculate_bonus_tax(dec!(100000), reliefs.bonus_flat_rate_percent);

    assert_eq!(result.tax, dec!(10000.00));
    assert_eq!(result.net, dec!(90000.00));
}

#[test]
fn comparison_reports_absolute_gaps() {
    let schedule = TaxSchedule::nigeria_2026().unwrap();
    let reliefs = ReliefConfig::default();

    let result = compare_scenarios(
        &schedule,
        &reliefs,
        &Scenario {
            gross_income: dec!(1200000),
            pension_rate_percent: dec!(8),
        },
        &Scenario {
            gross_income: dec!(2400000),
            pension_rate_percent: dec!(8),
        },
    );

    // 2.4M gross: taxable 2,208,000, all above the exempt band at 15%.
    assert_eq!(result.second.total_tax, dec!(211200.00));
    assert_eq!(result.tax_difference, dec!(165600.00));
    assert_eq!(result.net_income_difference, dec!(1034400.00));
}
