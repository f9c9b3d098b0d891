//! Tagged dispatch over every calculation.
//!
//! A [`CalculationRequest`] carries the input for one tax type, tagged on
//! the wire by the tax type's tag in a `type` field. [`calculate`] runs the
//! matching calculator and wraps its result in a [`CalculationReport`]
//! tagged the same way.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use pajak_core::{CalculationRequest, TaxType, calculate};
//!
//! let request: CalculationRequest = serde_json::from_str(
//!     r#"{ "type": "pp23", "gross_turnover": "40000000" }"#,
//! ).unwrap();
//!
//! let report = calculate(&request).unwrap();
//!
//! assert_eq!(report.tax_type(), TaxType::Turnover);
//! assert_eq!(report.total_tax(), dec!(200000));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::cross_border::{
    CrossBorderTaxInput, CrossBorderTaxResult, calculate_cross_border_tax,
};
use crate::calculations::employment::{
    EmploymentTaxInput, EmploymentTaxResult, calculate_employment_tax,
};
use crate::calculations::final_withholding::{
    CorporateFinalTaxInput, CorporateFinalTaxResult, PersonalFinalTaxInput,
    PersonalFinalTaxResult, calculate_corporate_final_tax, calculate_personal_final_tax,
};
use crate::calculations::personal::{
    PersonalIncomeTaxInput, PersonalIncomeTaxResult, calculate_personal_income_tax,
};
use crate::calculations::presumptive::{
    PresumptiveTaxInput, PresumptiveTaxResult, calculate_presumptive_tax,
};
use crate::calculations::procurement::{
    ProcurementTaxInput, ProcurementTaxResult, calculate_procurement_tax,
};
use crate::calculations::sector::{SectorTaxInput, SectorTaxResult, calculate_sector_tax};
use crate::calculations::services::{ServicesTaxInput, ServicesTaxResult, calculate_services_tax};
use crate::calculations::settlement::{SettlementInput, SettlementResult, calculate_settlement};
use crate::calculations::turnover::{TurnoverTaxInput, TurnoverTaxResult, calculate_turnover_tax};
use crate::calculations::vat::{VatInput, VatResult, calculate_vat};
use crate::error::CalculationError;
use crate::models::TaxType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationRequest {
    #[serde(rename = "pph21")]
    Employment(EmploymentTaxInput),
    #[serde(rename = "pph22")]
    Procurement(ProcurementTaxInput),
    #[serde(rename = "pph23")]
    Services(ServicesTaxInput),
    #[serde(rename = "pph26")]
    CrossBorder(CrossBorderTaxInput),
    #[serde(rename = "ppn")]
    Vat(VatInput),
    #[serde(rename = "pph15")]
    Sector(SectorTaxInput),
    #[serde(rename = "pph4-2-corporate")]
    CorporateFinal(CorporateFinalTaxInput),
    #[serde(rename = "pph29")]
    Settlement(SettlementInput),
    #[serde(rename = "pph-op")]
    PersonalGeneral(PersonalIncomeTaxInput),
    #[serde(rename = "pp23")]
    Turnover(TurnoverTaxInput),
    #[serde(rename = "nppn")]
    Presumptive(PresumptiveTaxInput),
    #[serde(rename = "pph4-2-personal")]
    PersonalFinal(PersonalFinalTaxInput),
}

impl CalculationRequest {
    pub fn tax_type(&self) -> TaxType {
        match self {
            Self::Employment(_) => TaxType::Employment,
            Self::Procurement(_) => TaxType::Procurement,
            Self::Services(_) => TaxType::Services,
            Self::CrossBorder(_) => TaxType::CrossBorder,
            Self::Vat(_) => TaxType::Vat,
            Self::Sector(_) => TaxType::Sector,
            Self::CorporateFinal(_) => TaxType::CorporateFinal,
            Self::Settlement(_) => TaxType::Settlement,
            Self::PersonalGeneral(_) => TaxType::PersonalGeneral,
            Self::Turnover(_) => TaxType::Turnover,
            Self::Presumptive(_) => TaxType::Presumptive,
            Self::PersonalFinal(_) => TaxType::PersonalFinal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationReport {
    #[serde(rename = "pph21")]
    Employment(EmploymentTaxResult),
    #[serde(rename = "pph22")]
    Procurement(ProcurementTaxResult),
    #[serde(rename = "pph23")]
    Services(ServicesTaxResult),
    #[serde(rename = "pph26")]
    CrossBorder(CrossBorderTaxResult),
    #[serde(rename = "ppn")]
    Vat(VatResult),
    #[serde(rename = "pph15")]
    Sector(SectorTaxResult),
    #[serde(rename = "pph4-2-corporate")]
    CorporateFinal(CorporateFinalTaxResult),
    #[serde(rename = "pph29")]
    Settlement(SettlementResult),
    #[serde(rename = "pph-op")]
    PersonalGeneral(PersonalIncomeTaxResult),
    #[serde(rename = "pp23")]
    Turnover(TurnoverTaxResult),
    #[serde(rename = "nppn")]
    Presumptive(PresumptiveTaxResult),
    #[serde(rename = "pph4-2-personal")]
    PersonalFinal(PersonalFinalTaxResult),
}

impl CalculationReport {
    pub fn tax_type(&self) -> TaxType {
        match self {
            Self::Employment(_) => TaxType::Employment,
            Self::Procurement(_) => TaxType::Procurement,
            Self::Services(_) => TaxType::Services,
            Self::CrossBorder(_) => TaxType::CrossBorder,
            Self::Vat(_) => TaxType::Vat,
            Self::Sector(_) => TaxType::Sector,
            Self::CorporateFinal(_) => TaxType::CorporateFinal,
            Self::Settlement(_) => TaxType::Settlement,
            Self::PersonalGeneral(_) => TaxType::PersonalGeneral,
            Self::Turnover(_) => TaxType::Turnover,
            Self::Presumptive(_) => TaxType::Presumptive,
            Self::PersonalFinal(_) => TaxType::PersonalFinal,
        }
    }

    /// The headline amount owed: monthly tax for PPh 21, tax including any
    /// penalty for the progressive personal calculations, and the remaining
    /// balance for the annual settlement.
    pub fn total_tax(&self) -> Decimal {
        match self {
            Self::Employment(r) => r.monthly_tax,
            Self::Procurement(r) => r.tax,
            Self::Services(r) => r.tax,
            Self::CrossBorder(r) => r.tax,
            Self::Vat(r) => r.total_tax,
            Self::Sector(r) => r.tax,
            Self::CorporateFinal(r) => r.tax,
            Self::Settlement(r) => r.remaining_tax,
            Self::PersonalGeneral(r) => r.total_tax_with_penalty,
            Self::Turnover(r) => r.tax,
            Self::Presumptive(r) => r.total_tax_with_penalty,
            Self::PersonalFinal(r) => r.tax,
        }
    }
}

/// Runs the calculator for the request's tax type.
///
/// # Errors
///
/// Propagates the [`CalculationError`] of the underlying calculator.
pub fn calculate(request: &CalculationRequest) -> Result<CalculationReport, CalculationError> {
    let report = match request {
        CalculationRequest::Employment(input) => {
            CalculationReport::Employment(calculate_employment_tax(input)?)
        }
        CalculationRequest::Procurement(input) => {
            CalculationReport::Procurement(calculate_procurement_tax(input)?)
        }
        CalculationRequest::Services(input) => {
            CalculationReport::Services(calculate_services_tax(input)?)
        }
        CalculationRequest::CrossBorder(input) => {
            CalculationReport::CrossBorder(calculate_cross_border_tax(input)?)
        }
        CalculationRequest::Vat(input) => CalculationReport::Vat(calculate_vat(input)?),
        CalculationRequest::Sector(input) => CalculationReport::Sector(calculate_sector_tax(input)?),
        CalculationRequest::CorporateFinal(input) => {
            CalculationReport::CorporateFinal(calculate_corporate_final_tax(input)?)
        }
        CalculationRequest::Settlement(input) => {
            CalculationReport::Settlement(calculate_settlement(input)?)
        }
        CalculationRequest::PersonalGeneral(input) => {
            CalculationReport::PersonalGeneral(calculate_personal_income_tax(input)?)
        }
        CalculationRequest::Turnover(input) => {
            CalculationReport::Turnover(calculate_turnover_tax(input)?)
        }
        CalculationRequest::Presumptive(input) => {
            CalculationReport::Presumptive(calculate_presumptive_tax(input)?)
        }
        CalculationRequest::PersonalFinal(input) => {
            CalculationReport::PersonalFinal(calculate_personal_final_tax(input)?)
        }
    };
    Ok(report)
}
