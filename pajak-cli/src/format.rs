//! Display formatting for Rupiah amounts and percentages.

use pajak_core::calculations::common::group_thousands;
use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount as whole Rupiah, e.g. `"Rp 1.008.333"`.
///
/// Fractions are rounded half away from zero; Rupiah has no sub-unit in
/// everyday use.
pub fn format_rupiah(amount: Decimal) -> String {
    let whole = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    if whole.is_sign_negative() && !whole.is_zero() {
        format!("-Rp {}", group_thousands(whole.abs()))
    } else {
        format!("Rp {}", group_thousands(whole.abs()))
    }
}

/// Formats a percentage with two decimals and a `,` decimal mark, e.g.
/// `"2,50%"`.
pub fn format_percentage(rate: Decimal) -> String {
    let rounded = rate.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}%", rounded).replace('.', ",")
}
