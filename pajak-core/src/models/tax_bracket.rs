use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// One marginal band of a progressive schedule.
///
/// `rate` is a percentage (`dec!(15)` is 15%). The top band has no upper
/// bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub min_income: Decimal,
    pub max_income: Option<Decimal>,
    pub rate: Decimal,
}

impl TaxBracket {
    pub const fn new(
        min_income: Decimal,
        max_income: Option<Decimal>,
        rate: Decimal,
    ) -> Self {
        Self {
            min_income,
            max_income,
            rate,
        }
    }

    /// Portion of `taxable_income` that falls inside this band.
    pub fn portion_of(
        &self,
        taxable_income: Decimal,
    ) -> Decimal {
        if taxable_income <= self.min_income {
            return Decimal::ZERO;
        }
        let upper = match self.max_income {
            Some(max) => taxable_income.min(max),
            None => taxable_income,
        };
        upper - self.min_income
    }
}

/// Article 17 individual income tax schedule, shared by employee
/// withholding, general personal income tax and the presumptive-margin
/// calculation.
pub static STANDARD_BRACKETS: [TaxBracket; 4] = [
    TaxBracket::new(dec!(0), Some(dec!(50000000)), dec!(5)),
    TaxBracket::new(dec!(50000000), Some(dec!(250000000)), dec!(15)),
    TaxBracket::new(dec!(250000000), Some(dec!(500000000)), dec!(25)),
    TaxBracket::new(dec!(500000000), None, dec!(30)),
];
