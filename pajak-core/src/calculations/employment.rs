//! PPh 21 monthly withholding on employee income.
//!
//! | Step | Description |
//! |------|-------------|
//! | 1 | Gross income = salary + allowances |
//! | 2 | Position cost = 5% of gross income, at most Rp 500,000 a month |
//! | 3 | Net income = gross - (position cost + insurance + pension), minimum 0 |
//! | 4 | Annual net income = net income × 12 |
//! | 5 | PTKP exemption, only when it applies to this employee |
//! | 6 | Taxable income = annual net income - PTKP, minimum 0 |
//! | 7 | Annual tax from the progressive schedule |
//! | 8 | Annual tax × 1.2 when the employee has no NPWP |
//! | 9 | Monthly tax = annual tax / 12 |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use pajak_core::calculations::employment::{EmploymentTaxInput, calculate_employment_tax};
//! use pajak_core::TaxpayerProfile;
//!
//! let input = EmploymentTaxInput {
//!     salary: dec!(10000000),
//!     allowances: dec!(0),
//!     insurance_premium: dec!(0),
//!     pension_contribution: dec!(0),
//!     taxpayer: TaxpayerProfile::new(false, 0, true),
//!     apply_ptkp: false,
//!     permanent_employee: true,
//! };
//!
//! let result = calculate_employment_tax(&input).unwrap();
//!
//! assert_eq!(result.position_cost, dec!(500000));
//! assert_eq!(result.annual_tax, dec!(12100000));
//! assert_eq!(result.monthly_tax, dec!(1008333.33));
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::{apply_surcharge, max, percent_of, round_half_up};
use crate::calculations::progressive::ProgressiveSchedule;
use crate::calculations::ptkp::ptkp_for;
use crate::error::{CalculationError, ensure_amount};
use crate::models::TaxpayerProfile;

/// Position cost (biaya jabatan) as a percentage of gross income.
pub const POSITION_COST_RATE: Decimal = dec!(5);

/// Monthly ceiling on the position cost deduction.
pub const POSITION_COST_MONTHLY_CAP: Decimal = dec!(500000);

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Monthly employee income figures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentTaxInput {
    /// Monthly base salary.
    pub salary: Decimal,

    /// Monthly fixed allowances.
    #[serde(default)]
    pub allowances: Decimal,

    /// Monthly insurance premium borne by the employee.
    #[serde(default)]
    pub insurance_premium: Decimal,

    /// Monthly pension contribution borne by the employee.
    #[serde(default)]
    pub pension_contribution: Decimal,

    #[serde(flatten)]
    pub taxpayer: TaxpayerProfile,

    /// Whether the PTKP exemption is applied. When false the exemption is 0.
    #[serde(default = "default_apply_ptkp")]
    pub apply_ptkp: bool,

    /// Permanent (as opposed to casual) employment. Carried through for
    /// display; it does not change the withholding.
    #[serde(default = "default_permanent_employee")]
    pub permanent_employee: bool,
}

fn default_apply_ptkp() -> bool {
    true
}

fn default_permanent_employee() -> bool {
    true
}

/// Every intermediate figure of the PPh 21 calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentTaxResult {
    pub gross_income: Decimal,
    pub position_cost: Decimal,
    pub total_deductions: Decimal,
    pub net_income: Decimal,
    pub annual_net_income: Decimal,
    pub ptkp: Decimal,
    pub taxable_income: Decimal,
    pub annual_tax: Decimal,
    pub monthly_tax: Decimal,
    pub permanent_employee: bool,
}

/// Calculates monthly PPh 21 withholding.
///
/// # Errors
///
/// Returns [`CalculationError::NegativeAmount`] if any monthly amount is
/// negative, or [`CalculationError::AmountTooLarge`] if one exceeds
/// [`MAX_AMOUNT`](crate::error::MAX_AMOUNT).
pub fn calculate_employment_tax(
    input: &EmploymentTaxInput
) -> Result<EmploymentTaxResult, CalculationError> {
    let salary = ensure_amount("salary", input.salary)?;
    let allowances = ensure_amount("allowances", input.allowances)?;
    let insurance = ensure_amount("insurance_premium", input.insurance_premium)?;
    let pension = ensure_amount("pension_contribution", input.pension_contribution)?;

    let gross_income = salary + allowances;
    let position_cost = position_cost(gross_income);
    let total_deductions = position_cost + insurance + pension;
    let net_income = max(gross_income - total_deductions, Decimal::ZERO);
    let annual_net_income = net_income * MONTHS_PER_YEAR;

    let ptkp = if input.apply_ptkp {
        ptkp_for(&input.taxpayer)
    } else {
        Decimal::ZERO
    };
    let taxable_income = max(annual_net_income - ptkp, Decimal::ZERO);

    let bracket_tax = ProgressiveSchedule::standard().calculate_tax(taxable_income)?;
    let annual_tax = round_half_up(apply_surcharge(bracket_tax, input.taxpayer.has_tax_id));
    let monthly_tax = round_half_up(annual_tax / MONTHS_PER_YEAR);

    debug!(
        %gross_income,
        %taxable_income,
        %annual_tax,
        %monthly_tax,
        has_tax_id = input.taxpayer.has_tax_id,
        "calculated PPh 21"
    );

    Ok(EmploymentTaxResult {
        gross_income,
        position_cost,
        total_deductions,
        net_income,
        annual_net_income,
        ptkp,
        taxable_income,
        annual_tax,
        monthly_tax,
        permanent_employee: input.permanent_employee,
    })
}

/// 5% of gross income, capped per month.
fn position_cost(gross_income: Decimal) -> Decimal {
    percent_of(gross_income, POSITION_COST_RATE).min(POSITION_COST_MONTHLY_CAP)
}
