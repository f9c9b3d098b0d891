use super::macros::category_enum;

category_enum! {
    /// Who the calculation is for. Each kind is offered its own set of
    /// tax types.
    pub enum TaxpayerKind {
        Corporate => ("corporate", "Corporate taxpayer (Wajib Pajak Badan)"),
        Personal => ("personal", "Individual taxpayer (Wajib Pajak Orang Pribadi)"),
    }
}

category_enum! {
    /// Every calculation the library offers.
    pub enum TaxType {
        Employment => ("pph21", "PPh 21 - employee income withholding"),
        Procurement => ("pph22", "PPh 22 - import and procurement withholding"),
        Services => ("pph23", "PPh 23 - services, royalties and rent withholding"),
        CrossBorder => ("pph26", "PPh 26 - payments to foreign taxpayers"),
        Vat => ("ppn", "PPN and PPnBM - value added and luxury goods tax"),
        Sector => ("pph15", "PPh 15 - deemed-profit sectors"),
        CorporateFinal => ("pph4-2-corporate", "PPh 4(2) - final tax, corporate"),
        Settlement => ("pph29", "PPh 29 - annual corporate settlement"),
        PersonalGeneral => ("pph-op", "PPh OP - general personal income tax"),
        Turnover => ("pp23", "PP 23/2018 - 0.5% turnover tax"),
        Presumptive => ("nppn", "NPPN - presumptive net income"),
        PersonalFinal => ("pph4-2-personal", "PPh 4(2) - final tax, personal"),
    }
}

const CORPORATE_TAX_TYPES: &[TaxType] = &[
    TaxType::Employment,
    TaxType::Procurement,
    TaxType::Services,
    TaxType::CrossBorder,
    TaxType::Vat,
    TaxType::Sector,
    TaxType::CorporateFinal,
    TaxType::Settlement,
];

const PERSONAL_TAX_TYPES: &[TaxType] = &[
    TaxType::PersonalGeneral,
    TaxType::Turnover,
    TaxType::Presumptive,
    TaxType::PersonalFinal,
];

impl TaxType {
    /// Tax types offered to the given kind of taxpayer.
    pub fn for_kind(kind: TaxpayerKind) -> &'static [TaxType] {
        match kind {
            TaxpayerKind::Corporate => CORPORATE_TAX_TYPES,
            TaxpayerKind::Personal => PERSONAL_TAX_TYPES,
        }
    }

    pub fn kind(&self) -> TaxpayerKind {
        if PERSONAL_TAX_TYPES.contains(self) {
            TaxpayerKind::Personal
        } else {
            TaxpayerKind::Corporate
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_tax_type_belongs_to_exactly_one_kind() {
        assert_eq!(TaxType::ALL.len(), 12);
        for tax_type in TaxType::ALL {
            let corporate = CORPORATE_TAX_TYPES.contains(tax_type);
            let personal = PERSONAL_TAX_TYPES.contains(tax_type);
            assert!(corporate != personal, "{tax_type}");
        }
    }

    #[test]
    fn kind_matches_listing() {
        for kind in TaxpayerKind::ALL {
            for tax_type in TaxType::for_kind(*kind) {
                assert_eq!(tax_type.kind(), *kind);
            }
        }
    }

    #[test]
    fn tax_type_tags() {
        assert_eq!(TaxType::Employment.as_str(), "pph21");
        assert_eq!(TaxType::parse("pph4-2-personal"), Some(TaxType::PersonalFinal));
        assert_eq!(TaxType::parse("pph25"), None);
    }

    #[test]
    fn taxpayer_kind_from_str_rejects_unknown_tag() {
        assert_eq!("corporate".parse::<TaxpayerKind>(), Ok(TaxpayerKind::Corporate));

        let err = "foundation".parse::<TaxpayerKind>().unwrap_err();
        assert_eq!(err.tag, "foundation");
        assert_eq!(
            err.to_string(),
            "unknown TaxpayerKind 'foundation', expected one of: corporate, personal"
        );
    }
}
