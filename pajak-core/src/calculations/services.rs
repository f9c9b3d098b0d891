//! PPh 23 withholding on services, royalties, rent and passive income.
//!
//! Rent and other PPh 23 activities are withheld at 2%, everything else at
//! 15%. A payee without NPWP pays 1.2 times the rate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::{apply_surcharge, percent_of, round_half_up};
use crate::error::{CalculationError, ensure_amount};
use crate::models::ServiceIncomeType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicesTaxInput {
    pub income_type: ServiceIncomeType,
    pub income_amount: Decimal,
    pub has_tax_id: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicesTaxResult {
    pub income_amount: Decimal,

    /// Applied rate in percent, after any surcharge.
    pub rate: Decimal,
    pub tax: Decimal,
}

/// Calculates PPh 23 on a single payment.
///
/// # Errors
///
/// Returns [`CalculationError::NegativeAmount`] for a negative amount.
pub fn calculate_services_tax(
    input: &ServicesTaxInput
) -> Result<ServicesTaxResult, CalculationError> {
    let income_amount = ensure_amount("income_amount", input.income_amount)?;

    let rate = apply_surcharge(input.income_type.rate(), input.has_tax_id);
    let tax = round_half_up(percent_of(income_amount, rate));

    debug!(income_type = input.income_type.as_str(), %rate, %tax, "calculated PPh 23");

    Ok(ServicesTaxResult {
        income_amount,
        rate,
        tax,
    })
}
