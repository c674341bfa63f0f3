//! Parsing and validation of user-entered amounts and rates.
//!
//! This is the boundary where invalid input stops: nothing negative or
//! non-numeric reaches the tax engine.

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::warn;

/// Error returned when entered text cannot be used as a monetary amount.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("'{input}' is not a valid amount")]
    NotANumber {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("'{input}' is negative; amounts must be zero or more")]
    Negative { input: String },
}

/// Strips the currency sign, comma thousands separators, and surrounding
/// whitespace before parsing.
fn normalize_amount(s: &str) -> String {
    s.trim().trim_start_matches('₦').replace(',', "")
}

/// Parses entered currency text into a non-negative [`Decimal`].
///
/// Accepts plain numbers, comma-grouped numbers, and a leading `₦`
/// (e.g. `"₦1,200,000"`). Empty or whitespace-only input is treated as 0.
pub fn parse_amount(s: &str) -> Result<Decimal, InputError> {
    let normalized = normalize_amount(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    let value: Decimal = normalized.parse().map_err(|source| InputError::NotANumber {
        input: s.to_string(),
        source,
    })?;
    if value < Decimal::ZERO {
        return Err(InputError::Negative {
            input: s.to_string(),
        });
    }
    Ok(value)
}

/// Parses an optional amount; absent means 0.
pub fn parse_optional_amount(s: Option<&str>) -> Result<Decimal, InputError> {
    match s {
        Some(raw) => parse_amount(raw),
        None => Ok(Decimal::ZERO),
    }
}

/// Parses a pension contribution rate, falling back to `default` when the
/// rate is unset or unusable (not a number, negative, or above 100).
///
/// A trailing `%` is tolerated.
pub fn parse_pension_rate(
    s: Option<&str>,
    default: Decimal,
) -> Decimal {
    let Some(raw) = s else {
        return default;
    };
    let normalized = raw.trim().trim_end_matches('%').trim();
    match normalized.parse::<Decimal>() {
        Ok(rate) if rate >= Decimal::ZERO && rate <= Decimal::ONE_HUNDRED => rate,
        _ => {
            warn!(input = %raw, "invalid pension rate, using default {default}%");
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_amount_accepts_plain_number() {
        assert_eq!(parse_amount("1200000").unwrap(), dec!(1200000));
    }

    #[test]
    fn parse_amount_accepts_naira_sign_and_commas() {
        assert_eq!(parse_amount("₦1,200,000").unwrap(), dec!(1200000));
        assert_eq!(parse_amount("1,234.56").unwrap(), dec!(1234.56));
    }

    #[test]
    fn parse_amount_trims_whitespace() {
        assert_eq!(parse_amount("  250000  ").unwrap(), dec!(250000));
    }

    #[test]
    fn parse_amount_empty_is_zero() {
        assert_eq!(parse_amount("").unwrap(), dec!(0));
        assert_eq!(parse_amount("   ").unwrap(), dec!(0));
    }

    #[test]
    fn parse_amount_rejects_text() {
        let result = parse_amount("abc");

        assert!(matches!(result, Err(InputError::NotANumber { .. })));
    }

    #[test]
    fn parse_amount_rejects_negative() {
        let result = parse_amount("-5");

        assert!(matches!(result, Err(InputError::Negative { .. })));
    }

    #[test]
    fn parse_optional_amount_none_is_zero() {
        assert_eq!(parse_optional_amount(None).unwrap(), dec!(0));
    }

    #[test]
    fn pension_rate_defaults_when_unset() {
        assert_eq!(parse_pension_rate(None, dec!(8)), dec!(8));
    }

    #[test]
    fn pension_rate_uses_supplied_value() {
        assert_eq!(parse_pension_rate(Some("12"), dec!(8)), dec!(12));
        assert_eq!(parse_pension_rate(Some("12.5%"), dec!(8)), dec!(12.5));
    }

    #[test]
    fn pension_rate_zero_is_respected() {
        assert_eq!(parse_pension_rate(Some("0"), dec!(8)), dec!(0));
    }

    #[test]
    fn pension_rate_defaults_on_invalid_text() {
        assert_eq!(parse_pension_rate(Some("abc"), dec!(8)), dec!(8));
    }

    #[test]
    fn pension_rate_defaults_when_out_of_range() {
        assert_eq!(parse_pension_rate(Some("150"), dec!(8)), dec!(8));
        assert_eq!(parse_pension_rate(Some("-3"), dec!(8)), dec!(8));
    }
}
