//! Indonesian tax calculators.
//!
//! Each module holds one calculation: an input struct, a result struct and
//! a `calculate_*` function. All calculators are pure; the only shared
//! state is the read-only rate tables on the category enums.

pub mod common;
pub mod cross_border;
pub mod employment;
pub mod final_withholding;
pub mod personal;
pub mod presumptive;
pub mod procurement;
pub mod progressive;
pub mod ptkp;
pub mod request;
pub mod sector;
pub mod services;
pub mod settlement;
pub mod turnover;
pub mod vat;

pub use cross_border::{CrossBorderTaxInput, CrossBorderTaxResult, calculate_cross_border_tax};
pub use employment::{EmploymentTaxInput, EmploymentTaxResult, calculate_employment_tax};
pub use final_withholding::{
    CorporateFinalTaxInput, CorporateFinalTaxResult, PersonalFinalTaxInput, PersonalFinalTaxResult,
    calculate_corporate_final_tax, calculate_personal_final_tax,
};
pub use personal::{PersonalIncomeTaxInput, PersonalIncomeTaxResult, calculate_personal_income_tax};
pub use presumptive::{PresumptiveTaxInput, PresumptiveTaxResult, calculate_presumptive_tax};
pub use procurement::{ProcurementTaxInput, ProcurementTaxResult, calculate_procurement_tax};
pub use progressive::{ProgressiveSchedule, TaxLayer};
pub use ptkp::{ptkp, ptkp_for};
pub use request::{CalculationReport, CalculationRequest, calculate};
pub use sector::{SectorTaxInput, SectorTaxResult, calculate_sector_tax};
pub use services::{ServicesTaxInput, ServicesTaxResult, calculate_services_tax};
pub use settlement::{SettlementInput, SettlementResult, calculate_settlement};
pub use turnover::{TurnoverTaxInput, TurnoverTaxResult, calculate_turnover_tax};
pub use vat::{VatInput, VatResult, calculate_vat};
