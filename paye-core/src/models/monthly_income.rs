use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Calendar month names, in order, for month-by-month income entry.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Twelve month-by-month income amounts, January through December.
///
/// The sum of the entries is the annual gross income fed to the summary
/// calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyIncomes {
    amounts: [Decimal; 12],
}

impl MonthlyIncomes {
    pub fn new(amounts: [Decimal; 12]) -> Self {
        Self { amounts }
    }

    /// Annual gross income: the sum of all twelve entries.
    pub fn total(&self) -> Decimal {
        self.amounts.iter().sum()
    }

    /// Month name and amount pairs, January first.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, Decimal)> + '_ {
        MONTH_NAMES.iter().copied().zip(self.amounts.iter().copied())
    }
}
