//! PPh 22 withholding on imports and certain purchases.
//!
//! The rate depends on the transaction category; imports branch further on
//! the kind of goods and on whether the importer holds an API (importer
//! identification number). A payee without NPWP pays 1.2 times the rate.
//!
//! | Category | Rate |
//! |----------|------|
//! | Import of soybeans, wheat, wheat flour | 0.5% |
//! | Import under special provisions | 7.5% |
//! | Regular import, with API | 2.5% |
//! | Regular import, without API | 7.5% |
//! | Government treasurer payment | 1.5% |
//! | State-owned enterprise purchase | 1.5% |
//! | Domestic motor vehicle sale | 0.45% |
//! | Fuel purchase | 0.3% |
//! | Luxury goods purchase | 5% |
//! | Anything else | 1.5% |

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::common::{apply_surcharge, percent_of, round_half_up};
use crate::error::{CalculationError, ensure_amount};
use crate::models::{ImportType, ProcurementCategory};

const NO_TAX_ID_NOTE: &str = "20% surcharge applied because the payee has no NPWP.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcurementTaxInput {
    pub category: ProcurementCategory,
    pub transaction_value: Decimal,
    pub has_tax_id: bool,

    /// Only consulted for imports.
    #[serde(default = "default_import_type")]
    pub import_type: ImportType,

    /// Whether the importer holds an API. Only consulted for regular imports.
    #[serde(default)]
    pub has_import_license: bool,
}

fn default_import_type() -> ImportType {
    ImportType::Regular
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcurementTaxResult {
    pub transaction_value: Decimal,

    /// Applied rate in percent, after any surcharge.
    pub rate: Decimal,
    pub tax: Decimal,

    /// Which special rule applied, if any.
    pub note: Option<String>,
}

/// Calculates PPh 22 on a single transaction.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use pajak_core::calculations::procurement::{ProcurementTaxInput, calculate_procurement_tax};
/// use pajak_core::{ImportType, ProcurementCategory};
///
/// let input = ProcurementTaxInput {
///     category: ProcurementCategory::Import,
///     transaction_value: dec!(100000000),
///     has_tax_id: false,
///     import_type: ImportType::Staples,
///     has_import_license: true,
/// };
///
/// let result = calculate_procurement_tax(&input).unwrap();
///
/// assert_eq!(result.rate, dec!(0.6));
/// assert_eq!(result.tax, dec!(600000));
/// ```
///
/// # Errors
///
/// Returns [`CalculationError::NegativeAmount`] for a negative transaction
/// value.
pub fn calculate_procurement_tax(
    input: &ProcurementTaxInput
) -> Result<ProcurementTaxResult, CalculationError> {
    let transaction_value = ensure_amount("transaction_value", input.transaction_value)?;

    let (base_rate, rule_note) = base_rate(input);
    let rate = apply_surcharge(base_rate, input.has_tax_id);
    let note = combine_notes(rule_note, input.has_tax_id);
    let tax = round_half_up(percent_of(transaction_value, rate));

    debug!(
        category = input.category.as_str(),
        %rate,
        %tax,
        "calculated PPh 22"
    );

    Ok(ProcurementTaxResult {
        transaction_value,
        rate,
        tax,
        note,
    })
}

/// Rate before the NPWP surcharge, with the note describing any special
/// rule.
fn base_rate(input: &ProcurementTaxInput) -> (Decimal, Option<&'static str>) {
    match input.category {
        ProcurementCategory::Import => match input.import_type {
            ImportType::Staples => (
                dec!(0.5),
                Some("Imports of soybeans, wheat and wheat flour use a special 0.5% rate."),
            ),
            ImportType::Special => (
                dec!(7.5),
                Some("Imports under special provisions use a 7.5% rate."),
            ),
            ImportType::Regular if input.has_import_license => (
                dec!(2.5),
                Some("Importers holding an API use a 2.5% rate."),
            ),
            ImportType::Regular => (
                dec!(7.5),
                Some("Importers without an API use a 7.5% rate."),
            ),
        },
        ProcurementCategory::GovernmentPayment | ProcurementCategory::StateOwnedPurchase => {
            (dec!(1.5), None)
        }
        ProcurementCategory::Automotive => (
            dec!(0.45),
            Some("Domestic motor vehicle sales use a 0.45% rate."),
        ),
        ProcurementCategory::Fuel => (dec!(0.3), Some("Fuel purchases use a 0.3% rate.")),
        ProcurementCategory::LuxuryGoods => (
            dec!(5),
            Some("Luxury goods purchases use a 5% rate."),
        ),
        ProcurementCategory::Other => (dec!(1.5), None),
    }
}

fn combine_notes(
    rule_note: Option<&'static str>,
    has_tax_id: bool,
) -> Option<String> {
    match (rule_note, has_tax_id) {
        (Some(note), true) => Some(note.to_string()),
        (Some(note), false) => Some(format!("{note} {NO_TAX_ID_NOTE}")),
        (None, false) => Some(NO_TAX_ID_NOTE.to_string()),
        (None, true) => None,
    }
}
