//! Money conversion and display helpers.
//!
//! Amounts live as integer cents everywhere in the client; the only place a
//! fractional value exists is the final display string and the entry-form
//! parse, which goes through exact decimal arithmetic rather than floats.

use std::str::FromStr;

use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::errors::{Error, Result, ValidationError};

/// Currency symbol the app renders everywhere.
pub const CURRENCY_SYMBOL: &str = "₱";

/// Formats an amount in cents as a display string, e.g. 42087 -> "₱420.87".
///
/// Thousands are comma-grouped and the minus sign precedes the symbol,
/// matching the en-PH rendering the UI has always shown.
pub fn format_cents(amount_cents: i64) -> String {
    let negative = amount_cents < 0;
    let abs = amount_cents.unsigned_abs();
    let whole = abs / 100;
    let frac = abs % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{CURRENCY_SYMBOL}{grouped}.{frac:02}")
}

/// Parses a user-entered decimal amount (e.g. "12.50") into cents.
///
/// Rounds half away from zero to the nearest cent. Sign is preserved;
/// callers that require a non-negative amount enforce that in their own
/// validation.
pub fn parse_amount_to_cents(input: &str) -> Result<i64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "Amount cannot be empty".to_string(),
        )));
    }

    let amount = Decimal::from_str(trimmed)?;
    (amount * dec!(100))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(|| {
            Error::Validation(ValidationError::InvalidInput(format!(
                "Amount out of range: {trimmed}"
            )))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_converts_cents_to_display() {
        assert_eq!(format_cents(42087), "₱420.87");
        assert_eq!(format_cents(150), "₱1.50");
        assert_eq!(format_cents(99999), "₱999.99");
    }

    #[test]
    fn test_format_zero() {
        assert_eq!(format_cents(0), "₱0.00");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_cents(-15000), "-₱150.00");
    }

    #[test]
    fn test_format_thousand_separators() {
        assert_eq!(format_cents(1000000), "₱10,000.00");
        assert_eq!(format_cents(123456789), "₱1,234,567.89");
    }

    #[test]
    fn test_format_sub_peso_amounts() {
        assert_eq!(format_cents(105), "₱1.05");
        assert_eq!(format_cents(50), "₱0.50");
        assert_eq!(format_cents(99), "₱0.99");
        assert_eq!(format_cents(123), "₱1.23");
    }

    #[test]
    fn test_parse_plain_and_decimal_input() {
        assert_eq!(parse_amount_to_cents("420.87").unwrap(), 42087);
        assert_eq!(parse_amount_to_cents("0").unwrap(), 0);
        assert_eq!(parse_amount_to_cents("12.5").unwrap(), 1250);
        assert_eq!(parse_amount_to_cents(" 15 ").unwrap(), 1500);
    }

    #[test]
    fn test_parse_rounds_half_away_from_zero() {
        assert_eq!(parse_amount_to_cents("12.505").unwrap(), 1251);
        assert_eq!(parse_amount_to_cents("12.504").unwrap(), 1250);
    }

    #[test]
    fn test_parse_preserves_sign() {
        assert_eq!(parse_amount_to_cents("-5").unwrap(), -500);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_amount_to_cents("").is_err());
        assert!(parse_amount_to_cents("   ").is_err());
        assert!(parse_amount_to_cents("12.5.0").is_err());
        assert!(parse_amount_to_cents("abc").is_err());
    }
}
