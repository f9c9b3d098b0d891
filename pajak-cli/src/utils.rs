use std::num::IntErrorKind;

use pajak_core::{MAX_PTKP_DEPENDENTS, clamp_dependents};
use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a string cannot be parsed as an amount or a rate.
#[derive(Debug, Error)]
#[error("invalid amount '{input}': {source}")]
pub struct ParseAmountError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Normalizes a Rupiah amount: drops an `Rp` prefix, whitespace, `_` and
/// the `.` thousands separators, and turns a `,` decimal mark into `.`.
fn normalize_amount_input(s: &str) -> String {
    let trimmed = s.trim();
    let without_prefix = trimmed
        .strip_prefix("Rp.")
        .or_else(|| trimmed.strip_prefix("Rp"))
        .unwrap_or(trimmed);

    without_prefix
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.' && *c != '_')
        .map(|c| if c == ',' { '.' } else { c })
        .collect()
}

/// Normalizes a percentage: drops whitespace and a trailing `%`, and
/// accepts either `.` or `,` as the decimal mark.
fn normalize_rate_input(s: &str) -> String {
    let trimmed = s.trim();
    trimmed
        .strip_suffix('%')
        .unwrap_or(trimmed)
        .trim()
        .replace(',', ".")
}

fn parse_normalized(
    original: &str,
    normalized: &str,
) -> Result<Decimal, ParseAmountError> {
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| ParseAmountError {
        input: original.to_string(),
        source: e,
    })
}

/// Parses a Rupiah amount written the Indonesian way.
///
/// Accepts `"Rp 1.500.000"`, `"1500000"` and `"1.234,50"`.
/// Empty or whitespace-only input is treated as 0.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    parse_normalized(s, &normalize_amount_input(s))
}

/// Parses a percentage such as `"12.5"`, `"12,5"` or `"12.5%"`.
/// Empty or whitespace-only input is treated as 0.
pub fn parse_rate(s: &str) -> Result<Decimal, ParseAmountError> {
    parse_normalized(s, &normalize_rate_input(s))
}

/// Parses an amount, mapping anything unparseable to 0 with a warning.
pub fn coerce_amount(s: &str) -> Decimal {
    parse_amount(s).unwrap_or_else(|error| {
        tracing::warn!(input = %s, %error, "treating unparseable amount as 0");
        Decimal::ZERO
    })
}

/// Parses a rate, mapping anything unparseable to 0 with a warning.
pub fn coerce_rate(s: &str) -> Decimal {
    parse_rate(s).unwrap_or_else(|error| {
        tracing::warn!(input = %s, %error, "treating unparseable rate as 0");
        Decimal::ZERO
    })
}

/// Parses a dependent count and saturates it into the PTKP range. Anything
/// unparseable counts as 0.
pub fn coerce_count(s: &str) -> u8 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0;
    }
    match trimmed.parse::<i64>() {
        Ok(count) => clamp_dependents(count),
        Err(error) if *error.kind() == IntErrorKind::PosOverflow => MAX_PTKP_DEPENDENTS,
        Err(error) if *error.kind() == IntErrorKind::NegOverflow => 0,
        Err(error) => {
            tracing::warn!(input = %s, %error, "treating unparseable count as 0");
            0
        }
    }
}
