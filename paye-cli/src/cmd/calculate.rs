//! The main calculation command: one gross income through the full summary.

use clap::{Args, ValueEnum};
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

use paye_core::calculations::{TaxResult, TaxSummary, TaxSummaryInput};
use paye_core::{IncomePeriod, ReliefConfig, TaxSchedule};

use crate::chart;
use crate::format::{format_naira, format_rate};
use crate::input;
use crate::prefs::{self, Theme};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum PeriodArg {
    #[default]
    Annual,
    Monthly,
}

impl From<PeriodArg> for IncomePeriod {
    fn from(arg: PeriodArg) -> Self {
        match arg {
            PeriodArg::Annual => IncomePeriod::Annual,
            PeriodArg::Monthly => IncomePeriod::Monthly,
        }
    }
}

#[derive(Args, Debug)]
pub struct CalculateCommand {
    /// Gross income, e.g. "1,200,000" or "₦1,200,000".
    income: String,

    /// Period the income amount covers; monthly incomes are annualized.
    #[arg(long, value_enum, default_value_t = PeriodArg::Annual)]
    period: PeriodArg,

    /// Pension contribution rate in percent (defaults to 8).
    #[arg(long)]
    pension_rate: Option<String>,

    /// Annual rent paid, for rent relief.
    #[arg(long)]
    rent: Option<String>,

    /// Output the result as JSON instead of formatted text.
    #[arg(long)]
    json: bool,
}

impl CalculateCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let reliefs = ReliefConfig::default();
        let schedule = TaxSchedule::nigeria_2026()?;

        let entered = input::parse_amount(&self.income)?;
        let period: IncomePeriod = self.period.into();
        let gross_income = period.annualize(entered);
        let pension_rate = input::parse_pension_rate(
            self.pension_rate.as_deref(),
            reliefs.default_pension_rate_percent,
        );
        let annual_rent = input::parse_optional_amount(self.rent.as_deref())?;

        let summary = TaxSummary::new(&schedule, &reliefs);
        let result = summary.calculate(&TaxSummaryInput {
            gross_income,
            pension_rate_percent: pension_rate,
            annual_rent,
        });

        if self.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }
        print_summary(&schedule, &result, prefs::load().theme);
        Ok(())
    }
}

/// Prints the summary block, then the breakdown table and distribution chart
/// unless the income is zero (a valid but degenerate result).
pub(crate) fn print_summary(
    schedule: &TaxSchedule,
    result: &TaxResult,
    theme: Theme,
) {
    let bracket = schedule.bracket_for(result.gross_income);

    println!();
    println!("TAX SUMMARY ({} schedule)", schedule.tax_year());
    println!();
    println!("  Gross income:     {}", format_naira(result.gross_income));
    println!(
        "  Tax bracket:      {} ({})",
        bracket.label,
        format_rate(bracket.rate_percent)
    );
    println!(
        "  Pension:          {}",
        format_naira(result.pension_contribution)
    );
    println!("  Rent relief:      {}", format_naira(result.rent_relief));
    println!(
        "  Total deductions: {}",
        format_naira(result.total_deductions)
    );
    println!(
        "  Taxable income:   {}",
        format_naira(result.taxable_income)
    );
    println!();
    println!("  Annual tax:       {}", format_naira(result.total_tax));
    println!("  Monthly tax:      {}", format_naira(result.monthly_tax()));
    println!("  Effective rate:   {:.2}%", result.effective_rate_percent);
    println!("  Annual net:       {}", format_naira(result.net_income));
    println!(
        "  Monthly net:      {}",
        format_naira(result.monthly_net_income())
    );

    if result.gross_income.is_zero() {
        return;
    }

    println!();
    print_breakdown(result);
    println!();
    println!("{}", chart::render_distribution(result, theme));
}

/// Row for the per-bracket breakdown table.
#[derive(Debug, Clone, Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Bracket")]
    bracket: String,

    #[tabled(rename = "Rate")]
    rate: String,

    #[tabled(rename = "Amount taxed")]
    taxed: String,

    #[tabled(rename = "Tax")]
    tax: String,
}

/// The engine emits a row for every bracket; only the non-zero ones are
/// worth showing.
fn print_breakdown(result: &TaxResult) {
    let rows: Vec<BreakdownRow> = result
        .breakdown
        .iter()
        .filter(|c| !c.taxed_amount.is_zero())
        .map(|c| BreakdownRow {
            bracket: c.bracket.label.clone(),
            rate: format_rate(c.bracket.rate_percent),
            taxed: format_naira(c.taxed_amount),
            tax: format_naira(c.tax),
        })
        .collect();
    if rows.is_empty() {
        return;
    }

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
        .to_string();
    println!("{table}");
}
