use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::macros::category_enum;

category_enum! {
    /// Income subject to PPh 23 withholding.
    pub enum ServiceIncomeType fallback Other {
        Rent => ("rent", "Rent and other income from use of assets"),
        TechnicalService => ("technicalService", "Technical services"),
        ManagementService => ("managementService", "Management services"),
        ConsultantService => ("consultantService", "Consulting services"),
        OtherActivities => ("otherActivities", "Other activities subject to PPh 23"),
        Dividend => ("dividend", "Dividends"),
        Interest => ("interest", "Interest"),
        Royalty => ("royalty", "Royalties"),
        Prize => ("prize", "Prizes and awards"),
        Other => ("other", "Other income subject to PPh 23"),
    }
}

impl ServiceIncomeType {
    /// Base PPh 23 rate in percent.
    pub fn rate(&self) -> Decimal {
        match self {
            Self::Rent | Self::OtherActivities => dec!(2),
            _ => dec!(15),
        }
    }
}

category_enum! {
    /// Income paid abroad and subject to PPh 26. The category is recorded
    /// on the result but does not change the rate.
    pub enum CrossBorderIncomeType fallback Other {
        Dividend => ("dividend", "Dividends"),
        Interest => ("interest", "Interest"),
        Royalty => ("royalty", "Royalties"),
        Service => ("service", "Services"),
        Technical => ("technical", "Technical services"),
        Management => ("management", "Management services"),
        Prize => ("prizes", "Prizes and awards"),
        Insurance => ("insurance", "Insurance premiums"),
        BranchProfit => ("branchProfit", "Branch profit after tax"),
        Other => ("other", "Other income paid abroad"),
    }
}

category_enum! {
    /// Income taxed finally under Article 4(2).
    pub enum FinalIncomeType fallback Other {
        LandBuildingSale => ("land_building_sale", "Transfer of land and/or buildings"),
        LandBuildingRent => ("land_building_rent", "Rent of land and/or buildings"),
        ConstructionService => ("construction_service", "Construction services"),
        Lottery => ("lottery", "Lottery prizes"),
        BondInterest => ("bonds_interest", "Bond interest"),
        DepositInterest => ("deposit_interest", "Deposit and savings interest"),
        SharesSale => ("shares_sale", "Sale of listed shares"),
        InitialPublicOffering => ("initial_public_offering", "Founder shares at IPO"),
        Other => ("other", "Other final income"),
    }
}

impl FinalIncomeType {
    /// Final tax rate in percent. Shared by the corporate and personal
    /// calculators.
    pub fn rate(&self) -> Decimal {
        match self {
            Self::LandBuildingSale => dec!(2.5),
            Self::LandBuildingRent => dec!(10),
            Self::ConstructionService => dec!(3),
            Self::Lottery => dec!(25),
            Self::BondInterest => dec!(15),
            Self::DepositInterest => dec!(20),
            Self::SharesSale => dec!(0.1),
            Self::InitialPublicOffering => dec!(0.5),
            Self::Other => dec!(10),
        }
    }

    /// Property rental and construction income, the only categories on
    /// which a corporate payee without NPWP pays the 20% surcharge.
    pub fn is_property_or_construction(&self) -> bool {
        matches!(self, Self::LandBuildingRent | Self::ConstructionService)
    }
}
