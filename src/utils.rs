//! Parsing helpers for ledger-format values.
//!
//! Brokerage exports carry amounts as display strings (`$1,234.56`,
//! `(45.00)` for negatives) and dates as `M/D/YYYY`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::errors::ParseError;

/// Parses a ledger amount string into a `Decimal`.
///
/// Accepts currency symbols, thousands separators and parenthesised
/// negatives. An empty or whitespace-only cell parses as zero, matching the
/// blank share/amount columns of non-trade ledger rows.
pub fn parse_decimal(raw: &str) -> Result<Decimal, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(Decimal::ZERO);
    }

    let mut cleaned: String = trimmed
        .chars()
        .filter(|c| !matches!(c, '$' | ',' | ' '))
        .collect();

    // Parenthesised values are negatives.
    if cleaned.starts_with('(') && cleaned.ends_with(')') {
        cleaned = format!("-{}", &cleaned[1..cleaned.len() - 1]);
    }

    Decimal::from_str(&cleaned).map_err(|_| ParseError::InvalidDecimal(raw.to_string()))
}

/// Parses a ledger date, trying the export format `M/D/YYYY` first and the
/// ISO `YYYY-MM-DD` form the relational store uses second.
pub fn parse_date(raw: &str) -> Result<NaiveDate, ParseError> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, "%m/%d/%Y")
        .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d"))
        .map_err(|_| ParseError::InvalidDate(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_decimal_plain() {
        assert_eq!(parse_decimal("123.45").unwrap(), dec!(123.45));
        assert_eq!(parse_decimal("-2.5").unwrap(), dec!(-2.5));
    }

    #[test]
    fn test_parse_decimal_ledger_formats() {
        assert_eq!(parse_decimal("$1,234.56").unwrap(), dec!(1234.56));
        assert_eq!(parse_decimal("(45.00)").unwrap(), dec!(-45.00));
        assert_eq!(parse_decimal(" $0.02 ").unwrap(), dec!(0.02));
    }

    #[test]
    fn test_parse_decimal_empty_is_zero() {
        assert_eq!(parse_decimal("").unwrap(), Decimal::ZERO);
        assert_eq!(parse_decimal("   ").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_parse_decimal_invalid() {
        assert!(parse_decimal("N/A").is_err());
        assert!(parse_decimal("12..3").is_err());
    }

    #[test]
    fn test_parse_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2021, 3, 9).unwrap();
        assert_eq!(parse_date("3/9/2021").unwrap(), expected);
        assert_eq!(parse_date("03/09/2021").unwrap(), expected);
        assert_eq!(parse_date("2021-03-09").unwrap(), expected);
    }

    #[test]
    fn test_parse_date_invalid() {
        assert!(parse_date("not a date").is_err());
        assert!(parse_date("13/45/2021").is_err());
    }
}
