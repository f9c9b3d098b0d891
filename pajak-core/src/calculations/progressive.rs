//! Progressive (Article 17) income tax schedule.
//!
//! Taxable income is split across cumulative marginal bands, bottom-up;
//! each band taxes only the slice of income inside it.
//!
//! | Band | Rate |
//! |------|------|
//! | 0 - 50,000,000 | 5% |
//! | 50,000,000 - 250,000,000 | 15% |
//! | 250,000,000 - 500,000,000 | 25% |
//! | above 500,000,000 | 30% |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use pajak_core::calculations::ProgressiveSchedule;
//!
//! let schedule = ProgressiveSchedule::standard();
//! let layers = schedule.calculate_layers(dec!(114000000)).unwrap();
//!
//! assert_eq!(layers.len(), 2);
//! assert_eq!(layers[0].description, "5% × 50.000.000");
//! assert_eq!(layers[1].tax, dec!(9600000));
//! assert_eq!(schedule.calculate_tax(dec!(114000000)).unwrap(), dec!(12100000));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{
    NO_TAX_ID_PENALTY_SHARE, group_thousands, max, percent_of, round_half_up,
};
use crate::calculations::ptkp::ptkp_for;
use crate::error::CalculationError;
use crate::models::{STANDARD_BRACKETS, TaxBracket, TaxpayerProfile};

/// Contribution of one band to the progressive tax.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxLayer {
    /// Band rate in percent.
    pub rate: Decimal,

    /// Taxable income falling inside the band.
    pub amount: Decimal,

    /// `amount × rate`.
    pub tax: Decimal,

    /// Display line, e.g. `"15% × 64.000.000"`.
    pub description: String,
}

/// Calculator over a set of marginal brackets.
///
/// Brackets must be sorted by `min_income` in ascending order, contiguous,
/// and the last bracket should have `max_income` as `None`.
#[derive(Debug, Clone)]
pub struct ProgressiveSchedule<'a> {
    tax_brackets: &'a [TaxBracket],
}

impl<'a> ProgressiveSchedule<'a> {
    pub fn new(tax_brackets: &'a [TaxBracket]) -> Self {
        Self { tax_brackets }
    }

    /// Total progressive tax on `taxable_income`.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::NoTaxBrackets`] if the schedule is empty.
    pub fn calculate_tax(
        &self,
        taxable_income: Decimal,
    ) -> Result<Decimal, CalculationError> {
        let layers = self.calculate_layers(taxable_income)?;
        Ok(round_half_up(layers.iter().map(|layer| layer.tax).sum()))
    }

    /// Per-band breakdown, in encounter order, omitting bands the income
    /// does not reach.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::NoTaxBrackets`] if the schedule is empty.
    pub fn calculate_layers(
        &self,
        taxable_income: Decimal,
    ) -> Result<Vec<TaxLayer>, CalculationError> {
        if self.tax_brackets.is_empty() {
            return Err(CalculationError::NoTaxBrackets);
        }

        let layers = self
            .tax_brackets
            .iter()
            .filter_map(|bracket| {
                let amount = bracket.portion_of(taxable_income);
                (amount > Decimal::ZERO).then(|| TaxLayer {
                    rate: bracket.rate,
                    amount,
                    tax: round_half_up(percent_of(amount, bracket.rate)),
                    description: format!(
                        "{}% × {}",
                        group_thousands(bracket.rate),
                        group_thousands(amount)
                    ),
                })
            })
            .collect();

        Ok(layers)
    }
}

impl ProgressiveSchedule<'static> {
    /// The statutory Article 17 schedule.
    pub fn standard() -> Self {
        Self::new(&STANDARD_BRACKETS)
    }
}

/// Exemption and bracket pipeline shared by the personal calculators that
/// report the no-NPWP penalty as a separate amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PersonalAssessment {
    pub ptkp: Decimal,
    pub taxable_income: Decimal,
    pub tax_layers: Vec<TaxLayer>,
    pub total_tax: Decimal,
    pub no_tax_id_penalty: Decimal,
    pub total_tax_with_penalty: Decimal,
}

/// Applies PTKP, the standard brackets and the additive 20% penalty to an
/// annual net income.
pub(crate) fn assess_personal_income(
    net_income: Decimal,
    profile: &TaxpayerProfile,
) -> Result<PersonalAssessment, CalculationError> {
    let ptkp = ptkp_for(profile);
    let taxable_income = max(net_income - ptkp, Decimal::ZERO);

    let schedule = ProgressiveSchedule::standard();
    let tax_layers = schedule.calculate_layers(taxable_income)?;
    let total_tax = round_half_up(tax_layers.iter().map(|layer| layer.tax).sum());

    let no_tax_id_penalty = if profile.has_tax_id {
        Decimal::ZERO
    } else {
        round_half_up(total_tax * NO_TAX_ID_PENALTY_SHARE)
    };

    Ok(PersonalAssessment {
        ptkp,
        taxable_income,
        tax_layers,
        total_tax,
        no_tax_id_penalty,
        total_tax_with_penalty: total_tax + no_tax_id_penalty,
    })
}
