//! Personal income tax for unbooked businesses using the presumptive net
//! margin (NPPN).
//!
//! | Step | Description |
//! |------|-------------|
//! | 1 | Net income = turnover × margin for the business type |
//! | 2 | Taxable income = net income - PTKP, minimum 0 |
//! | 3 | Tax from the progressive schedule |
//! | 4 | Penalty = 20% of the tax when there is no NPWP |

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::{percent_of, round_half_up};
use crate::calculations::progressive::{TaxLayer, assess_personal_income};
use crate::error::{CalculationError, ensure_amount};
use crate::models::{NppnBusinessType, TaxpayerProfile};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresumptiveTaxInput {
    pub business_type: NppnBusinessType,

    /// Annual gross turnover.
    pub gross_turnover: Decimal,

    #[serde(flatten)]
    pub taxpayer: TaxpayerProfile,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresumptiveTaxResult {
    pub gross_turnover: Decimal,

    /// Presumptive margin in percent.
    pub margin_rate: Decimal,
    pub net_income: Decimal,
    pub ptkp: Decimal,
    pub taxable_income: Decimal,
    pub tax_layers: Vec<TaxLayer>,
    pub total_tax: Decimal,
    pub no_tax_id_penalty: Decimal,
    pub total_tax_with_penalty: Decimal,
}

/// Calculates annual personal income tax from turnover.
///
/// # Errors
///
/// Returns [`CalculationError::NegativeAmount`] for negative turnover.
pub fn calculate_presumptive_tax(
    input: &PresumptiveTaxInput
) -> Result<PresumptiveTaxResult, CalculationError> {
    let gross_turnover = ensure_amount("gross_turnover", input.gross_turnover)?;

    let margin_rate = input.business_type.margin();
    let net_income = round_half_up(percent_of(gross_turnover, margin_rate));
    let assessment = assess_personal_income(net_income, &input.taxpayer)?;

    debug!(
        business_type = input.business_type.as_str(),
        %net_income,
        total_tax = %assessment.total_tax_with_penalty,
        "calculated NPPN income tax"
    );

    Ok(PresumptiveTaxResult {
        gross_turnover,
        margin_rate,
        net_income,
        ptkp: assessment.ptkp,
        taxable_income: assessment.taxable_income,
        tax_layers: assessment.tax_layers,
        total_tax: assessment.total_tax,
        no_tax_id_penalty: assessment.no_tax_id_penalty,
        total_tax_with_penalty: assessment.total_tax_with_penalty,
    })
}
