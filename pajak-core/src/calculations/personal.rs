//! Annual progressive income tax for individuals with bookkeeping.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::max;
use crate::calculations::progressive::{TaxLayer, assess_personal_income};
use crate::error::{CalculationError, ensure_amount};
use crate::models::TaxpayerProfile;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalIncomeTaxInput {
    /// Annual gross income.
    pub gross_income: Decimal,

    /// Annual deductible expenses.
    #[serde(default)]
    pub allowable_deductions: Decimal,

    #[serde(flatten)]
    pub taxpayer: TaxpayerProfile,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalIncomeTaxResult {
    pub gross_income: Decimal,
    pub allowable_deductions: Decimal,
    pub net_income: Decimal,
    pub ptkp: Decimal,
    pub taxable_income: Decimal,
    pub tax_layers: Vec<TaxLayer>,
    pub total_tax: Decimal,
    pub no_tax_id_penalty: Decimal,
    pub total_tax_with_penalty: Decimal,
}

/// Calculates annual personal income tax on net income.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use pajak_core::calculations::personal::{PersonalIncomeTaxInput, calculate_personal_income_tax};
/// use pajak_core::TaxpayerProfile;
///
/// let input = PersonalIncomeTaxInput {
///     gross_income: dec!(200000000),
///     allowable_deductions: dec!(20000000),
///     taxpayer: TaxpayerProfile::new(true, 2, true),
/// };
///
/// let result = calculate_personal_income_tax(&input).unwrap();
///
/// assert_eq!(result.ptkp, dec!(67500000));
/// assert_eq!(result.taxable_income, dec!(112500000));
/// assert_eq!(result.total_tax, dec!(11875000));
/// ```
///
/// # Errors
///
/// Returns [`CalculationError::NegativeAmount`] for negative income or
/// deductions.
pub fn calculate_personal_income_tax(
    input: &PersonalIncomeTaxInput
) -> Result<PersonalIncomeTaxResult, CalculationError> {
    let gross_income = ensure_amount("gross_income", input.gross_income)?;
    let allowable_deductions =
        ensure_amount("allowable_deductions", input.allowable_deductions)?;

    let net_income = max(gross_income - allowable_deductions, Decimal::ZERO);
    let assessment = assess_personal_income(net_income, &input.taxpayer)?;

    debug!(
        %net_income,
        taxable_income = %assessment.taxable_income,
        total_tax = %assessment.total_tax_with_penalty,
        "calculated personal income tax"
    );

    Ok(PersonalIncomeTaxResult {
        gross_income,
        allowable_deductions,
        net_income,
        ptkp: assessment.ptkp,
        taxable_income: assessment.taxable_income,
        tax_layers: assessment.tax_layers,
        total_tax: assessment.total_tax,
        no_tax_id_penalty: assessment.no_tax_id_penalty,
        total_tax_with_penalty: assessment.total_tax_with_penalty,
    })
}
