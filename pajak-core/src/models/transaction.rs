use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::macros::category_enum;

category_enum! {
    /// Transaction categories subject to PPh 22 withholding.
    pub enum ProcurementCategory fallback Other {
        Import => ("import", "Import of goods"),
        GovernmentPayment => ("governmentPayment", "Payment by a government treasurer"),
        StateOwnedPurchase => ("stateOwnedCompany", "Purchase by a state-owned enterprise"),
        Automotive => ("automotive", "Domestic motor vehicle sale"),
        Fuel => ("oil", "Fuel purchase"),
        LuxuryGoods => ("luxury", "Luxury goods purchase"),
        Other => ("other", "Other procurement"),
    }
}

category_enum! {
    /// Kind of import, only consulted for [`ProcurementCategory::Import`].
    pub enum ImportType fallback Regular {
        Regular => ("regular", "Regular import"),
        /// Soybeans, wheat and wheat flour.
        Staples => ("soybeans", "Soybeans, wheat, wheat flour"),
        Special => ("special", "Goods under special provisions"),
    }
}

category_enum! {
    /// How the VAT-able supply arose. Informational only: the VAT rate does
    /// not depend on it.
    pub enum VatTransactionType fallback Other {
        Sale => ("sale", "Sale of goods or services"),
        Import => ("import", "Import of goods"),
        Export => ("export", "Export of goods"),
        SelfUsage => ("selfUsage", "Self usage"),
        Other => ("other", "Other supply"),
    }
}

category_enum! {
    /// PPnBM (luxury goods sales tax) tiers. An unrecognised tier carries
    /// no PPnBM.
    pub enum LuxuryCategory fallback NotLuxury {
        Category1 => ("category1", "Luxury tier 10%"),
        Category2 => ("category2", "Luxury tier 20%"),
        Category3 => ("category3", "Luxury tier 30%"),
        Category4 => ("category4", "Luxury tier 40%"),
        Category5 => ("category5", "Luxury tier 50%"),
        NotLuxury => ("none", "Not subject to PPnBM"),
    }
}

impl LuxuryCategory {
    /// PPnBM rate in percent.
    pub fn rate(&self) -> Decimal {
        match self {
            Self::Category1 => dec!(10),
            Self::Category2 => dec!(20),
            Self::Category3 => dec!(30),
            Self::Category4 => dec!(40),
            Self::Category5 => dec!(50),
            Self::NotLuxury => Decimal::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn procurement_tags_round_trip_through_parse() {
        for category in ProcurementCategory::ALL {
            assert_eq!(ProcurementCategory::parse(category.as_str()), Some(*category));
        }
    }

    #[test]
    fn unknown_procurement_tag_falls_back_to_other() {
        assert_eq!(ProcurementCategory::parse("barter"), None);
        assert_eq!(ProcurementCategory::from_tag("barter"), ProcurementCategory::Other);
    }

    #[test]
    fn from_str_is_lenient_with_fallback() {
        assert_eq!("fuel".parse::<ProcurementCategory>(), Ok(ProcurementCategory::Other));
        assert_eq!("oil".parse::<ProcurementCategory>(), Ok(ProcurementCategory::Fuel));
        assert_eq!("category9".parse::<LuxuryCategory>(), Ok(LuxuryCategory::NotLuxury));
    }

    #[test]
    fn unknown_import_type_is_regular() {
        assert_eq!(ImportType::from_tag(""), ImportType::Regular);
    }

    #[test]
    fn luxury_rates_rise_by_tier() {
        let rates: Vec<Decimal> = LuxuryCategory::ALL.iter().map(|c| c.rate()).collect();

        assert_eq!(rates, vec![dec!(10), dec!(20), dec!(30), dec!(40), dec!(50), dec!(0)]);
    }

    #[test]
    fn categories_serialize_as_wire_tags() {
        let json = serde_json::to_string(&ProcurementCategory::Fuel).unwrap();

        assert_eq!(json, "\"oil\"");
    }

    #[test]
    fn unknown_luxury_tier_carries_no_luxury_tax() {
        let category: LuxuryCategory = serde_json::from_str("\"category9\"").unwrap();

        assert_eq!(category, LuxuryCategory::NotLuxury);
        assert_eq!(category.rate(), Decimal::ZERO);
    }

    #[test]
    fn unknown_vat_transaction_type_is_other() {
        assert_eq!(VatTransactionType::from_tag("barter"), VatTransactionType::Other);
    }

    #[test]
    fn lenient_category_accepts_unknown_tag() {
        let category: ProcurementCategory = serde_json::from_str("\"barter\"").unwrap();

        assert_eq!(category, ProcurementCategory::Other);
    }
}
