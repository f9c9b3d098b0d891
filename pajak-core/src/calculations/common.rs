//! Common utility functions for tax calculations.
//!
//! This module provides shared functionality used across the individual tax
//! calculators: rounding, clamping, percentage application, the NPWP
//! surcharge and Indonesian digit grouping.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Multiplier applied when the payee has no NPWP (taxpayer identification
/// number): 20% on top of the normal rate or tax.
pub const NO_TAX_ID_SURCHARGE_FACTOR: Decimal = dec!(1.2);

/// Share of the tax added as a separate penalty when the taxpayer has no
/// NPWP.
pub const NO_TAX_ID_PENALTY_SHARE: Decimal = dec!(0.2);

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// This follows standard financial rounding conventions where values at exactly
/// 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use pajak_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(1008333.3333)), dec!(1008333.33));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use pajak_core::calculations::common::max;
///
/// assert_eq!(max(dec!(-5000), dec!(0)), dec!(0));
/// assert_eq!(max(dec!(200.00), dec!(100.00)), dec!(200.00));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Applies a percentage rate (`dec!(2.5)` is 2.5%) to an amount.
pub fn percent_of(
    amount: Decimal,
    rate: Decimal,
) -> Decimal {
    amount * rate / dec!(100)
}

/// Raises a rate, or a tax, by the no-NPWP surcharge when `has_tax_id` is
/// false.
pub fn apply_surcharge(
    value: Decimal,
    has_tax_id: bool,
) -> Decimal {
    if has_tax_id {
        value
    } else {
        value * NO_TAX_ID_SURCHARGE_FACTOR
    }
}

/// Formats a value with Indonesian digit grouping: `.` between thousands
/// and `,` before the fraction. Trailing fractional zeros are dropped.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use pajak_core::calculations::common::group_thousands;
///
/// assert_eq!(group_thousands(dec!(50000000)), "50.000.000");
/// assert_eq!(group_thousands(dec!(1234.50)), "1.234,5");
/// ```
pub fn group_thousands(value: Decimal) -> String {
    let normalized = value.normalize();
    let text = normalized.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(text.len() + int_part.len() / 3 + 1);
    if normalized.is_sign_negative() && !normalized.is_zero() {
        grouped.push('-');
    }
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    if let Some(frac_part) = frac_part {
        grouped.push(',');
        grouped.push_str(frac_part);
    }
    grouped
}
