//! Month-by-month entry: twelve monthly incomes summed into an annual gross.

use anyhow::ensure;
use clap::Args;
use rust_decimal::Decimal;

use paye_core::calculations::{TaxSummary, TaxSummaryInput};
use paye_core::{MonthlyIncomes, ReliefConfig, TaxSchedule};

use crate::cmd::calculate::print_summary;
use crate::format::format_naira;
use crate::input;
use crate::prefs;

#[derive(Args, Debug)]
pub struct MonthsCommand {
    /// Twelve monthly income amounts, January through December.
    #[arg(num_args = 12, value_name = "AMOUNT")]
    amounts: Vec<String>,

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

impl MonthsCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        ensure!(
            self.amounts.len() == 12,
            "expected twelve monthly amounts, got {}",
            self.amounts.len()
        );

        let mut amounts = [Decimal::ZERO; 12];
        for (slot, raw) in amounts.iter_mut().zip(&self.amounts) {
            *slot = input::parse_amount(raw)?;
        }
        let incomes = MonthlyIncomes::new(amounts);

        let reliefs = ReliefConfig::default();
        let schedule = TaxSchedule::nigeria_2026()?;
        let pension_rate = input::parse_pension_rate(
            self.pension_rate.as_deref(),
            reliefs.default_pension_rate_percent,
        );
        let annual_rent = input::parse_optional_amount(self.rent.as_deref())?;

        let summary = TaxSummary::new(&schedule, &reliefs);
        let result = summary.calculate(&TaxSummaryInput {
            gross_income: incomes.total(),
            pension_rate_percent: pension_rate,
            annual_rent,
        });

        if self.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        println!();
        println!("MONTHLY INCOME");
        println!();
        for (month, amount) in incomes.entries() {
            println!("  {month:<10} {}", format_naira(amount));
        }
        print_summary(&schedule, &result, prefs::load().theme);
        Ok(())
    }
}
