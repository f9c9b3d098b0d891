//! PPN (value added tax) with the optional PPnBM luxury goods surcharge.
//!
//! PPN is a flat 11% of the transaction value. Luxury goods add PPnBM at
//! 10-50% depending on the tier; both are levied on the same base.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::{percent_of, round_half_up};
use crate::error::{CalculationError, ensure_amount};
use crate::models::{LuxuryCategory, VatTransactionType};

pub const VAT_RATE: Decimal = dec!(11);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatInput {
    #[serde(default = "default_transaction_type")]
    pub transaction_type: VatTransactionType,
    pub transaction_value: Decimal,

    #[serde(default)]
    pub luxury_category: Option<LuxuryCategory>,
}

fn default_transaction_type() -> VatTransactionType {
    VatTransactionType::Sale
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatResult {
    pub transaction_type: VatTransactionType,
    pub transaction_value: Decimal,
    pub vat_rate: Decimal,
    pub vat: Decimal,
    pub luxury_rate: Decimal,
    pub luxury_tax: Decimal,
    pub total_tax: Decimal,
}

/// Calculates PPN and PPnBM on a transaction.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use pajak_core::calculations::vat::{VatInput, calculate_vat};
/// use pajak_core::{LuxuryCategory, VatTransactionType};
///
/// let input = VatInput {
///     transaction_type: VatTransactionType::Sale,
///     transaction_value: dec!(100000000),
///     luxury_category: Some(LuxuryCategory::Category3),
/// };
///
/// let result = calculate_vat(&input).unwrap();
///
/// assert_eq!(result.vat, dec!(11000000));
/// assert_eq!(result.luxury_tax, dec!(30000000));
/// assert_eq!(result.total_tax, dec!(41000000));
/// ```
///
/// # Errors
///
/// Returns [`CalculationError::NegativeAmount`] for a negative transaction
/// value.
pub fn calculate_vat(input: &VatInput) -> Result<VatResult, CalculationError> {
    let transaction_value = ensure_amount("transaction_value", input.transaction_value)?;

    let vat = round_half_up(percent_of(transaction_value, VAT_RATE));
    let luxury_rate = input
        .luxury_category
        .map_or(Decimal::ZERO, |category| category.rate());
    let luxury_tax = round_half_up(percent_of(transaction_value, luxury_rate));
    let total_tax = vat + luxury_tax;

    debug!(%vat, %luxury_tax, %total_tax, "calculated PPN");

    Ok(VatResult {
        transaction_type: input.transaction_type,
        transaction_value,
        vat_rate: VAT_RATE,
        vat,
        luxury_rate,
        luxury_tax,
        total_tax,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn plain_sale_pays_only_vat() {
        let input = VatInput {
            transaction_type: VatTransactionType::Sale,
            transaction_value: dec!(25000000),
            luxury_category: None,
        };

        let result = calculate_vat(&input).unwrap();

        assert_eq!(result.vat, dec!(2750000));
        assert_eq!(result.luxury_rate, dec!(0));
        assert_eq!(result.luxury_tax, dec!(0));
        assert_eq!(result.total_tax, dec!(2750000));
    }

    #[test]
    fn top_luxury_tier_adds_fifty_percent() {
        let input = VatInput {
            transaction_type: VatTransactionType::Import,
            transaction_value: dec!(10000000),
            luxury_category: Some(LuxuryCategory::Category5),
        };

        let result = calculate_vat(&input).unwrap();

        assert_eq!(result.luxury_tax, dec!(5000000));
        assert_eq!(result.total_tax, dec!(6100000));
        assert_eq!(result.transaction_type, VatTransactionType::Import);
    }

    #[test]
    fn vat_on_fractional_value_is_rounded() {
        let input = VatInput {
            transaction_type: VatTransactionType::Sale,
            transaction_value: dec!(1234.57),
            luxury_category: None,
        };

        let result = calculate_vat(&input).unwrap();

        // 135.8027
        assert_eq!(result.vat, dec!(135.80));
    }
}
