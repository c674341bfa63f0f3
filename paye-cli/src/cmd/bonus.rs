//! Flat-rate tax on a one-off bonus.

use clap::Args;

use paye_core::ReliefConfig;
use paye_core::calculations::calculate_bonus_tax;

use crate::format::{format_naira, format_rate};
use crate::input;

#[derive(Args, Debug)]
pub struct BonusCommand {
    /// Bonus amount, e.g. "100,000".
    amount: String,

    /// Output the result as JSON instead of formatted text.
    #[arg(long)]
    json: bool,
}

impl BonusCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let reliefs = ReliefConfig::default();
        let amount = input::parse_amount(&self.amount)?;

        let result = calculate_bonus_tax(amount, reliefs.bonus_flat_rate_percent);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        println!();
        println!(
            "BONUS TAX ({} flat rate)",
            format_rate(reliefs.bonus_flat_rate_percent)
        );
        println!();
        println!("  Bonus: {}", format_naira(result.bonus));
        println!("  Tax:   {}", format_naira(result.tax));
        println!("  Net:   {}", format_naira(result.net));
        Ok(())
    }
}
