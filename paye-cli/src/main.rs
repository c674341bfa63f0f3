use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use paye_cli::cmd::{BonusCommand, CalculateCommand, CompareCommand, MonthsCommand, ThemeCommand};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Progressive income tax calculator for the Nigerian PAYE schedule.
///
/// Applies the Nigeria Tax Act marginal brackets to a gross income and
/// prints the liability, take-home figures, and per-bracket breakdown.
#[derive(Debug, Parser)]
#[command(name = "paye", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Calculate tax for a gross income.
    Calculate(CalculateCommand),

    /// Enter twelve monthly incomes and tax the annual total.
    Months(MonthsCommand),

    /// Compare two income scenarios side by side.
    Compare(CompareCommand),

    /// Tax a one-off bonus at the flat rate.
    Bonus(BonusCommand),

    /// Show or set the persisted display theme.
    Theme(ThemeCommand),
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    match Cli::parse().command {
        Command::Calculate(cmd) => cmd.exec(),
        Command::Months(cmd) => cmd.exec(),
        Command::Compare(cmd) => cmd.exec(),
        Command::Bonus(cmd) => cmd.exec(),
        Command::Theme(cmd) => cmd.exec(),
    }
}
