//! PPh 26 withholding on payments to foreign taxpayers.
//!
//! The standard rate is 20%. When a tax treaty applies and a treaty rate is
//! given, the treaty rate replaces the standard rate outright.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::{percent_of, round_half_up};
use crate::error::{CalculationError, ensure_amount};
use crate::models::CrossBorderIncomeType;

pub const STANDARD_RATE: Decimal = dec!(20);

/// Highest rate a treaty may set, in percent.
pub const MAX_TREATY_RATE: Decimal = dec!(20);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossBorderTaxInput {
    pub income_type: CrossBorderIncomeType,
    pub income_amount: Decimal,

    #[serde(default)]
    pub has_tax_treaty: bool,

    /// Treaty rate in percent. Zero or absent means no treaty rate was given.
    #[serde(default)]
    pub treaty_rate: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossBorderTaxResult {
    pub income_type: CrossBorderIncomeType,
    pub income_amount: Decimal,
    pub standard_rate: Decimal,
    pub applied_rate: Decimal,
    pub tax: Decimal,
    pub has_tax_treaty: bool,
}

/// Calculates PPh 26 on a single payment abroad.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use pajak_core::calculations::cross_border::{CrossBorderTaxInput, calculate_cross_border_tax};
/// use pajak_core::CrossBorderIncomeType;
///
/// let input = CrossBorderTaxInput {
///     income_type: CrossBorderIncomeType::Royalty,
///     income_amount: dec!(50000000),
///     has_tax_treaty: true,
///     treaty_rate: Some(dec!(10)),
/// };
///
/// let result = calculate_cross_border_tax(&input).unwrap();
///
/// assert_eq!(result.standard_rate, dec!(20));
/// assert_eq!(result.applied_rate, dec!(10));
/// assert_eq!(result.tax, dec!(5000000));
/// ```
///
/// # Errors
///
/// - [`CalculationError::NegativeAmount`] for a negative amount.
/// - [`CalculationError::AmountTooLarge`] for an amount above
///   [`MAX_AMOUNT`](crate::error::MAX_AMOUNT).
/// - [`CalculationError::TreatyRateOutOfRange`] for a treaty rate outside
///   0-20%.
pub fn calculate_cross_border_tax(
    input: &CrossBorderTaxInput
) -> Result<CrossBorderTaxResult, CalculationError> {
    let income_amount = ensure_amount("income_amount", input.income_amount)?;
    if let Some(rate) = input.treaty_rate {
        if rate < Decimal::ZERO || rate > MAX_TREATY_RATE {
            return Err(CalculationError::TreatyRateOutOfRange(rate));
        }
    }

    let applied_rate = applied_rate(input.has_tax_treaty, input.treaty_rate);
    let tax = round_half_up(percent_of(income_amount, applied_rate));

    debug!(
        income_type = input.income_type.as_str(),
        %applied_rate,
        %tax,
        "calculated PPh 26"
    );

    Ok(CrossBorderTaxResult {
        income_type: input.income_type,
        income_amount,
        standard_rate: STANDARD_RATE,
        applied_rate,
        tax,
        has_tax_treaty: input.has_tax_treaty,
    })
}

fn applied_rate(
    has_tax_treaty: bool,
    treaty_rate: Option<Decimal>,
) -> Decimal {
    match treaty_rate {
        Some(rate) if has_tax_treaty && !rate.is_zero() => rate,
        _ => STANDARD_RATE,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn test_input() -> CrossBorderTaxInput {
        CrossBorderTaxInput {
            income_type: CrossBorderIncomeType::Dividend,
            income_amount: dec!(100000000),
            has_tax_treaty: false,
            treaty_rate: None,
        }
    }

    // =========================================================================
    // applied_rate tests
    // =========================================================================

    #[test]
    fn applied_rate_is_standard_without_treaty() {
        assert_eq!(applied_rate(false, None), dec!(20));
    }

    #[test]
    fn applied_rate_ignores_treaty_rate_when_flag_unset() {
        assert_eq!(applied_rate(false, Some(dec!(10))), dec!(20));
    }

    #[test]
    fn applied_rate_falls_back_when_treaty_rate_missing_or_zero() {
        assert_eq!(applied_rate(true, None), dec!(20));
        assert_eq!(applied_rate(true, Some(dec!(0))), dec!(20));
    }

    #[test]
    fn applied_rate_uses_treaty_rate() {
        assert_eq!(applied_rate(true, Some(dec!(12.5))), dec!(12.5));
    }

    // =========================================================================
    // calculate (integration) tests
    // =========================================================================

    #[test]
    fn calculate_standard_rate() {
        let result = calculate_cross_border_tax(&test_input()).unwrap();

        assert_eq!(result.applied_rate, dec!(20));
        assert_eq!(result.tax, dec!(20000000));
        assert!(!result.has_tax_treaty);
    }

    #[test]
    fn calculate_treaty_rate_replaces_standard_rate() {
        let mut input = test_input();
        input.has_tax_treaty = true;
        input.treaty_rate = Some(dec!(15));

        let result = calculate_cross_border_tax(&input).unwrap();

        assert_eq!(result.standard_rate, dec!(20));
        assert_eq!(result.applied_rate, dec!(15));
        assert_eq!(result.tax, dec!(15000000));
    }

    #[test]
    fn calculate_rejects_treaty_rate_above_twenty() {
        let mut input = test_input();
        input.has_tax_treaty = true;
        input.treaty_rate = Some(dec!(25));

        assert_eq!(
            calculate_cross_border_tax(&input),
            Err(CalculationError::TreatyRateOutOfRange(dec!(25)))
        );
    }
}
