//! Side-by-side comparison of two income scenarios.

use clap::Args;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

use paye_core::calculations::{Scenario, TaxResult, compare_scenarios};
use paye_core::{ReliefConfig, TaxSchedule};

use crate::format::format_naira;
use crate::input;

#[derive(Args, Debug)]
pub struct CompareCommand {
    /// Gross annual income of the first scenario.
    first_income: String,

    /// Gross annual income of the second scenario.
    second_income: String,

    /// Pension rate in percent for the first scenario (defaults to 8).
    #[arg(long)]
    first_pension_rate: Option<String>,

    /// Pension rate in percent for the second scenario (defaults to 8).
    #[arg(long)]
    second_pension_rate: Option<String>,

    /// Output the result as JSON instead of formatted text.
    #[arg(long)]
    json: bool,
}

impl CompareCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let reliefs = ReliefConfig::default();
        let schedule = TaxSchedule::nigeria_2026()?;

        let first = self.scenario(&self.first_income, self.first_pension_rate.as_deref(), &reliefs)?;
        let second = self.scenario(
            &self.second_income,
            self.second_pension_rate.as_deref(),
            &reliefs,
        )?;

        let result = compare_scenarios(&schedule, &reliefs, &first, &second);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        println!();
        println!("SCENARIO COMPARISON ({} schedule)", schedule.tax_year());
        println!();
        let table = Table::new([
            ScenarioRow::new("First", &result.first),
            ScenarioRow::new("Second", &result.second),
        ])
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
        .to_string();
        println!("{table}");
        println!();
        println!(
            "  Tax difference:        {}",
            format_naira(result.tax_difference)
        );
        println!(
            "  Net income difference: {}",
            format_naira(result.net_income_difference)
        );
        Ok(())
    }

    fn scenario(
        &self,
        income: &str,
        pension_rate: Option<&str>,
        reliefs: &ReliefConfig,
    ) -> anyhow::Result<Scenario> {
        Ok(Scenario {
            gross_income: input::parse_amount(income)?,
            pension_rate_percent: input::parse_pension_rate(
                pension_rate,
                reliefs.default_pension_rate_percent,
            ),
        })
    }
}

#[derive(Debug, Clone, Tabled)]
struct ScenarioRow {
    #[tabled(rename = "Scenario")]
    scenario: &'static str,

    #[tabled(rename = "Gross income")]
    gross: String,

    #[tabled(rename = "Total tax")]
    tax: String,

    #[tabled(rename = "Effective rate")]
    effective_rate: String,

    #[tabled(rename = "Net income")]
    net: String,
}

impl ScenarioRow {
    fn new(
        scenario: &'static str,
        result: &TaxResult,
    ) -> Self {
        Self {
            scenario,
            gross: format_naira(result.gross_income),
            tax: format_naira(result.total_tax),
            effective_rate: format!("{:.2}%", result.effective_rate_percent),
            net: format_naira(result.net_income),
        }
    }
}
