//! PPh 15 final tax on deemed-profit sectors (shipping, aviation, foreign
//! drilling and construction).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::{apply_surcharge, percent_of, round_half_up};
use crate::error::{CalculationError, ensure_amount};
use crate::models::SectorBusiness;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorTaxInput {
    pub business: SectorBusiness,
    pub gross_income: Decimal,
    pub has_tax_id: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorTaxResult {
    pub gross_income: Decimal,

    /// Applied rate in percent, after any surcharge.
    pub rate: Decimal,
    pub tax: Decimal,
}

/// Calculates PPh 15 on gross income.
///
/// # Errors
///
/// Returns [`CalculationError::NegativeAmount`] for negative gross income.
pub fn calculate_sector_tax(input: &SectorTaxInput) -> Result<SectorTaxResult, CalculationError> {
    let gross_income = ensure_amount("gross_income", input.gross_income)?;

    let rate = apply_surcharge(input.business.rate(), input.has_tax_id);
    let tax = round_half_up(percent_of(gross_income, rate));

    debug!(business = input.business.as_str(), %rate, %tax, "calculated PPh 15");

    Ok(SectorTaxResult {
        gross_income,
        rate,
        tax,
    })
}
