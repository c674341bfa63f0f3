use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::TaxBracket;

/// Errors detected while validating a bracket schedule.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxScheduleError {
    #[error("schedule has no brackets")]
    Empty,

    #[error("first bracket must start at 0, got {0}")]
    NonZeroStart(Decimal),

    /// Adjacent brackets must share a boundary.
    #[error("bracket {index} starts at {actual}, expected {expected}")]
    NotContiguous {
        index: usize,
        expected: Decimal,
        actual: Decimal,
    },

    #[error("bracket {index} upper bound {max} is not above its lower bound {min}")]
    EmptyInterval {
        index: usize,
        min: Decimal,
        max: Decimal,
    },

    /// Only the final bracket may be open-ended.
    #[error("bracket {0} has no upper bound but is not the last bracket")]
    EarlyOpenEnd(usize),

    #[error("last bracket must be open-ended")]
    BoundedTail,

    #[error("bracket {index} rate {rate} is outside 0-100")]
    RateOutOfRange { index: usize, rate: Decimal },
}

/// An ordered, validated sequence of marginal tax brackets for one tax year.
///
/// Brackets are contiguous from zero upward and the last bracket is
/// open-ended, so every non-negative income belongs to exactly one bracket.
/// Construction goes through [`TaxSchedule::new`], which enforces those
/// invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxSchedule {
    tax_year: i32,
    brackets: Vec<TaxBracket>,
}

impl TaxSchedule {
    /// Builds a schedule after checking the bracket invariants.
    pub fn new(
        tax_year: i32,
        brackets: Vec<TaxBracket>,
    ) -> Result<Self, TaxScheduleError> {
        let Some(first) = brackets.first() else {
            return Err(TaxScheduleError::Empty);
        };
        if !first.min_income.is_zero() {
            return Err(TaxScheduleError::NonZeroStart(first.min_income));
        }

        let last_index = brackets.len() - 1;
        let mut expected_min = Decimal::ZERO;
        for (index, bracket) in brackets.iter().enumerate() {
            if bracket.min_income != expected_min {
                return Err(TaxScheduleError::NotContiguous {
                    index,
                    expected: expected_min,
                    actual: bracket.min_income,
                });
            }
            if bracket.rate_percent < Decimal::ZERO || bracket.rate_percent > Decimal::ONE_HUNDRED {
                return Err(TaxScheduleError::RateOutOfRange {
                    index,
                    rate: bracket.rate_percent,
                });
            }
            match bracket.max_income {
                Some(max) if max <= bracket.min_income => {
                    return Err(TaxScheduleError::EmptyInterval {
                        index,
                        min: bracket.min_income,
                        max,
                    });
                }
                Some(max) => expected_min = max,
                None if index != last_index => {
                    return Err(TaxScheduleError::EarlyOpenEnd(index));
                }
                None => {}
            }
        }
        if brackets[last_index].max_income.is_some() {
            return Err(TaxScheduleError::BoundedTail);
        }

        Ok(Self { tax_year, brackets })
    }

    /// The personal income tax schedule of the Nigeria Tax Act, effective 2026.
    pub fn nigeria_2026() -> Result<Self, TaxScheduleError> {
        let bands: [(i64, Option<i64>, i64, &str); 6] = [
            (0, Some(800_000), 0, "₦0 - ₦800,000"),
            (800_000, Some(3_000_000), 15, "₦800,001 - ₦3,000,000"),
            (3_000_000, Some(12_000_000), 18, "₦3,000,001 - ₦12,000,000"),
            (12_000_000, Some(25_000_000), 21, "₦12,000,001 - ₦25,000,000"),
            (25_000_000, Some(50_000_000), 24, "₦25,000,001 - ₦50,000,000"),
            (50_000_000, None, 25, "Above ₦50,000,000"),
        ];
        let brackets = bands
            .into_iter()
            .map(|(min, max, rate, label)| TaxBracket {
                min_income: Decimal::from(min),
                max_income: max.map(Decimal::from),
                rate_percent: Decimal::from(rate),
                label: label.to_string(),
            })
            .collect();
        Self::new(2026, brackets)
    }

    pub fn tax_year(&self) -> i32 {
        self.tax_year
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// The marginal bracket an income falls into. Zero income maps to the
    /// first bracket. Always succeeds for non-negative income because the
    /// last bracket is open-ended.
    pub fn bracket_for(
        &self,
        income: Decimal,
    ) -> &TaxBracket {
        self.brackets
            .iter()
            .find(|b| b.contains(income))
            .unwrap_or(&self.brackets[0])
    }
}
