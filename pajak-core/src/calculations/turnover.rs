//! Flat 0.5% final tax on the turnover of small businesses (PP 23/2018).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::{percent_of, round_half_up};
use crate::error::{CalculationError, ensure_amount};

pub const TURNOVER_TAX_RATE: Decimal = dec!(0.5);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnoverTaxInput {
    pub gross_turnover: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnoverTaxResult {
    pub gross_turnover: Decimal,
    pub rate: Decimal,
    pub tax: Decimal,
}

/// # Errors
///
/// Returns [`CalculationError::NegativeAmount`] for negative turnover.
pub fn calculate_turnover_tax(
    input: &TurnoverTaxInput
) -> Result<TurnoverTaxResult, CalculationError> {
    let gross_turnover = ensure_amount("gross_turnover", input.gross_turnover)?;
    let tax = round_half_up(percent_of(gross_turnover, TURNOVER_TAX_RATE));

    debug!(%gross_turnover, %tax, "calculated turnover tax");

    Ok(TurnoverTaxResult {
        gross_turnover,
        rate: TURNOVER_TAX_RATE,
        tax,
    })
}
