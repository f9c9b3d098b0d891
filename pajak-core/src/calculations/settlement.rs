//! Annual corporate income tax settlement (PPh 29).
//!
//! | Step | Description |
//! |------|-------------|
//! | 1 | Taxable income = net income - loss carryforward, minimum 0 |
//! | 2 | Corporate tax = taxable income × 11% (small business) or 22% |
//! | 3 | Remaining tax = corporate tax - tax paid, minimum 0 |
//! | 4 | Overpayment = tax paid - corporate tax, minimum 0 |

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::{max, percent_of, round_half_up};
use crate::error::{CalculationError, ensure_amount};

/// Standard corporate income tax rate in percent.
pub const CORPORATE_TAX_RATE: Decimal = dec!(22);

/// Rate for small businesses eligible for the 50% reduction.
pub const SMALL_BUSINESS_TAX_RATE: Decimal = dec!(11);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementInput {
    pub net_income: Decimal,

    #[serde(default)]
    pub loss_carryforward: Decimal,

    /// Tax already paid during the year (PPh 22, 23 and 25 credits).
    #[serde(default)]
    pub tax_paid: Decimal,

    #[serde(default)]
    pub small_business: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementResult {
    pub net_income: Decimal,
    pub loss_carryforward: Decimal,
    pub taxable_income: Decimal,
    pub applied_rate: Decimal,
    pub corporate_tax: Decimal,
    pub tax_paid: Decimal,
    pub remaining_tax: Decimal,
    pub overpayment: Decimal,

    /// True when the credits exceed the tax due.
    pub is_overpaid: bool,
}

/// Reconciles the annual corporate tax against taxes already paid.
///
/// At most one of `remaining_tax` and `overpayment` is non-zero.
///
/// # Errors
///
/// Returns [`CalculationError::NegativeAmount`] for any negative input and
/// [`CalculationError::AmountTooLarge`] for one above the supported range.
pub fn calculate_settlement(input: &SettlementInput) -> Result<SettlementResult, CalculationError> {
    let net_income = ensure_amount("net_income", input.net_income)?;
    let loss_carryforward = ensure_amount("loss_carryforward", input.loss_carryforward)?;
    let tax_paid = ensure_amount("tax_paid", input.tax_paid)?;

    let taxable_income = max(net_income - loss_carryforward, Decimal::ZERO);
    let applied_rate = if input.small_business {
        SMALL_BUSINESS_TAX_RATE
    } else {
        CORPORATE_TAX_RATE
    };
    let corporate_tax = round_half_up(percent_of(taxable_income, applied_rate));

    let remaining_tax = max(corporate_tax - tax_paid, Decimal::ZERO);
    let overpayment = max(tax_paid - corporate_tax, Decimal::ZERO);

    debug!(%corporate_tax, %remaining_tax, %overpayment, "calculated PPh 29 settlement");

    Ok(SettlementResult {
        net_income,
        loss_carryforward,
        taxable_income,
        applied_rate,
        corporate_tax,
        tax_paid,
        remaining_tax,
        overpayment,
        is_overpaid: overpayment > Decimal::ZERO,
    })
}
