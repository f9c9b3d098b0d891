//! PTKP (Penghasilan Tidak Kena Pajak), the annual non-taxable income
//! threshold.
//!
//! | Status | Addition |
//! |--------|----------|
//! | Taxpayer | Rp 54,000,000 |
//! | Married | + Rp 4,500,000 |
//! | Each dependent, up to 3 | + Rp 4,500,000 |

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::models::{MAX_PTKP_DEPENDENTS, TaxpayerProfile};

pub const PTKP_BASE: Decimal = dec!(54000000);
pub const PTKP_MARRIED_ADDITION: Decimal = dec!(4500000);
pub const PTKP_DEPENDENT_ADDITION: Decimal = dec!(4500000);

/// Annual exemption for the given marital status and dependent count.
///
/// Dependents beyond three are ignored.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use pajak_core::calculations::ptkp::ptkp;
///
/// assert_eq!(ptkp(false, 0), dec!(54000000));
/// assert_eq!(ptkp(true, 2), dec!(67500000));
/// assert_eq!(ptkp(true, 5), dec!(72000000));
/// ```
pub fn ptkp(
    married: bool,
    dependents: u8,
) -> Decimal {
    let counted = dependents.min(MAX_PTKP_DEPENDENTS);
    if counted < dependents {
        debug!(dependents, counted, "dependents above PTKP cap");
    }

    let mut exemption = PTKP_BASE;
    if married {
        exemption += PTKP_MARRIED_ADDITION;
    }
    exemption + PTKP_DEPENDENT_ADDITION * Decimal::from(counted)
}

/// Annual exemption for a taxpayer profile.
pub fn ptkp_for(profile: &TaxpayerProfile) -> Decimal {
    ptkp(profile.married, profile.dependents)
}
