//! Article 4(2) final tax on land and building, construction, lottery,
//! interest and securities income.
//!
//! Corporate and personal payees share one rate table but differ on the
//! NPWP surcharge. A corporate payee without NPWP pays 1.2 times the rate
//! on property rental and construction income only; a personal payee never
//! pays a surcharge.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::{apply_surcharge, percent_of, round_half_up};
use crate::error::{CalculationError, ensure_amount};
use crate::models::FinalIncomeType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorporateFinalTaxInput {
    pub income_type: FinalIncomeType,
    pub income_amount: Decimal,
    pub has_tax_id: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorporateFinalTaxResult {
    pub income_type: FinalIncomeType,
    pub income_amount: Decimal,

    /// Applied rate in percent, after any surcharge.
    pub rate: Decimal,
    pub tax: Decimal,

    /// Label of the income category, with a note when the surcharge applied.
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalFinalTaxInput {
    pub income_type: FinalIncomeType,
    pub income_amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalFinalTaxResult {
    pub income_type: FinalIncomeType,
    pub income_amount: Decimal,
    pub rate: Decimal,
    pub tax: Decimal,
}

/// Final tax withheld from a corporate payee.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use pajak_core::calculations::final_withholding::{
///     CorporateFinalTaxInput, calculate_corporate_final_tax,
/// };
/// use pajak_core::FinalIncomeType;
///
/// let input = CorporateFinalTaxInput {
///     income_type: FinalIncomeType::ConstructionService,
///     income_amount: dec!(200000000),
///     has_tax_id: false,
/// };
///
/// let result = calculate_corporate_final_tax(&input).unwrap();
///
/// assert_eq!(result.rate, dec!(3.6));
/// assert_eq!(result.tax, dec!(7200000));
/// ```
///
/// # Errors
///
/// Returns [`CalculationError::NegativeAmount`] for a negative amount.
pub fn calculate_corporate_final_tax(
    input: &CorporateFinalTaxInput
) -> Result<CorporateFinalTaxResult, CalculationError> {
    let income_amount = ensure_amount("income_amount", input.income_amount)?;

    let surcharged = !input.has_tax_id && input.income_type.is_property_or_construction();
    let rate = apply_surcharge(input.income_type.rate(), !surcharged);
    let tax = round_half_up(percent_of(income_amount, rate));

    let description = if surcharged {
        format!("{} (20% surcharge, no NPWP)", input.income_type.label())
    } else {
        input.income_type.label().to_string()
    };

    debug!(
        income_type = input.income_type.as_str(),
        surcharged,
        %rate,
        %tax,
        "calculated corporate PPh 4(2)"
    );

    Ok(CorporateFinalTaxResult {
        income_type: input.income_type,
        income_amount,
        rate,
        tax,
        description,
    })
}

/// Final tax withheld from an individual.
///
/// # Errors
///
/// Returns [`CalculationError::NegativeAmount`] for a negative amount.
pub fn calculate_personal_final_tax(
    input: &PersonalFinalTaxInput
) -> Result<PersonalFinalTaxResult, CalculationError> {
    let income_amount = ensure_amount("income_amount", input.income_amount)?;

    let rate = input.income_type.rate();
    let tax = round_half_up(percent_of(income_amount, rate));

    debug!(income_type = input.income_type.as_str(), %rate, %tax, "calculated personal PPh 4(2)");

    Ok(PersonalFinalTaxResult {
        income_type: input.income_type,
        income_amount,
        rate,
        tax,
    })
}
