use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::macros::category_enum;

category_enum! {
    /// Business lines taxed on a deemed-profit basis under Article 15.
    pub enum SectorBusiness fallback Other {
        DomesticShipping => ("shipping", "Domestic shipping"),
        InternationalShipping => ("international_shipping", "International shipping or aviation"),
        DomesticAviation => ("aviation", "Domestic aviation"),
        ForeignDrilling => ("foreign_drilling", "Foreign oil drilling"),
        ForeignConstruction => ("foreign_construction", "Foreign construction"),
        Other => ("other", "Other deemed-profit business"),
    }
}

impl SectorBusiness {
    /// Final rate on gross income, in percent.
    pub fn rate(&self) -> Decimal {
        match self {
            Self::DomesticShipping | Self::Other => dec!(2.64),
            Self::InternationalShipping => dec!(4.0),
            Self::DomesticAviation => dec!(1.8),
            Self::ForeignDrilling => dec!(4.5),
            Self::ForeignConstruction => dec!(3.0),
        }
    }
}

category_enum! {
    /// Business lines for the NPPN presumptive net-income norm.
    pub enum NppnBusinessType fallback Other {
        Agriculture => ("agriculture", "Agriculture, plantation, fishery"),
        Trade => ("trade", "Trade"),
        Industry => ("industry", "Manufacturing"),
        Services => ("services", "Services"),
        Freelance => ("freelance", "Independent professional"),
        Construction => ("construction", "Construction"),
        Other => ("other", "Other business"),
    }
}

impl NppnBusinessType {
    /// Presumptive net margin on turnover, in percent.
    pub fn margin(&self) -> Decimal {
        match self {
            Self::Agriculture => dec!(14.5),
            Self::Trade => dec!(10),
            Self::Industry | Self::Other => dec!(12.5),
            Self::Services => dec!(17.5),
            Self::Freelance => dec!(30),
            Self::Construction => dec!(15),
        }
    }
}
