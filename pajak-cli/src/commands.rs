//! One clap subcommand per tax type.
//!
//! Each argument struct converts into the matching [`CalculationRequest`].
//! Amounts go through [`parse_amount`], so `--salary "Rp 10.000.000"` and
//! `--salary 10000000` are equivalent.

use clap::{Args, Subcommand};
use pajak_core::calculations::{
    CorporateFinalTaxInput, CrossBorderTaxInput, EmploymentTaxInput, PersonalFinalTaxInput,
    PersonalIncomeTaxInput, PresumptiveTaxInput, ProcurementTaxInput, SectorTaxInput,
    ServicesTaxInput, SettlementInput, TurnoverTaxInput, VatInput,
};
use pajak_core::{
    CalculationRequest, CrossBorderIncomeType, FinalIncomeType, ImportType, LuxuryCategory,
    NppnBusinessType, ProcurementCategory, SectorBusiness, ServiceIncomeType, TaxpayerProfile,
    VatTransactionType, clamp_dependents,
};
use rust_decimal::Decimal;

use crate::utils::{parse_amount, parse_rate};

/// Personal status shared by the calculations that apply PTKP.
#[derive(Debug, Clone, Args)]
pub struct TaxpayerArgs {
    /// Taxpayer is married.
    #[arg(long)]
    pub married: bool,

    /// Number of dependents; at most 3 count toward PTKP.
    #[arg(long, default_value_t = 0)]
    pub dependents: u32,

    /// Taxpayer has no NPWP (tax identification number).
    #[arg(long)]
    pub no_npwp: bool,
}

impl From<TaxpayerArgs> for TaxpayerProfile {
    fn from(args: TaxpayerArgs) -> Self {
        TaxpayerProfile::new(
            args.married,
            clamp_dependents(i64::from(args.dependents)),
            !args.no_npwp,
        )
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum TaxCommand {
    /// PPh 21: monthly withholding on employee income.
    #[command(name = "pph21")]
    Employment(EmploymentArgs),

    /// PPh 22: withholding on imports and procurement.
    #[command(name = "pph22")]
    Procurement(ProcurementArgs),

    /// PPh 23: withholding on services, royalties and rent.
    #[command(name = "pph23")]
    Services(ServicesArgs),

    /// PPh 26: withholding on payments abroad.
    #[command(name = "pph26")]
    CrossBorder(CrossBorderArgs),

    /// PPN and PPnBM: value added and luxury goods tax.
    #[command(name = "ppn")]
    Vat(VatArgs),

    /// PPh 15: deemed-profit sectors.
    #[command(name = "pph15")]
    Sector(SectorArgs),

    /// PPh 4(2) final tax for a corporate payee.
    #[command(name = "pph4-2-corporate")]
    CorporateFinal(CorporateFinalArgs),

    /// PPh 29: annual corporate settlement.
    #[command(name = "pph29")]
    Settlement(SettlementArgs),

    /// PPh OP: annual progressive tax for individuals.
    #[command(name = "pph-op")]
    PersonalGeneral(PersonalGeneralArgs),

    /// PP 23/2018: 0.5% tax on small business turnover.
    #[command(name = "pp23")]
    Turnover(TurnoverArgs),

    /// NPPN: personal income tax from turnover and a presumptive margin.
    #[command(name = "nppn")]
    Presumptive(PresumptiveArgs),

    /// PPh 4(2) final tax for an individual.
    #[command(name = "pph4-2-personal")]
    PersonalFinal(PersonalFinalArgs),
}

impl From<TaxCommand> for CalculationRequest {
    fn from(command: TaxCommand) -> Self {
        match command {
            TaxCommand::Employment(args) => CalculationRequest::Employment(args.into()),
            TaxCommand::Procurement(args) => CalculationRequest::Procurement(args.into()),
            TaxCommand::Services(args) => CalculationRequest::Services(args.into()),
            TaxCommand::CrossBorder(args) => CalculationRequest::CrossBorder(args.into()),
            TaxCommand::Vat(args) => CalculationRequest::Vat(args.into()),
            TaxCommand::Sector(args) => CalculationRequest::Sector(args.into()),
            TaxCommand::CorporateFinal(args) => CalculationRequest::CorporateFinal(args.into()),
            TaxCommand::Settlement(args) => CalculationRequest::Settlement(args.into()),
            TaxCommand::PersonalGeneral(args) => CalculationRequest::PersonalGeneral(args.into()),
            TaxCommand::Turnover(args) => CalculationRequest::Turnover(args.into()),
            TaxCommand::Presumptive(args) => CalculationRequest::Presumptive(args.into()),
            TaxCommand::PersonalFinal(args) => CalculationRequest::PersonalFinal(args.into()),
        }
    }
}

// ─── corporate ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Args)]
pub struct EmploymentArgs {
    /// Monthly base salary.
    #[arg(long, value_parser = parse_amount)]
    pub salary: Decimal,

    /// Monthly fixed allowances.
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    pub allowances: Decimal,

    /// Monthly insurance premium paid by the employee.
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    pub insurance_premium: Decimal,

    /// Monthly pension contribution paid by the employee.
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    pub pension_contribution: Decimal,

    /// Do not deduct PTKP.
    #[arg(long)]
    pub no_ptkp: bool,

    /// Employee is not permanent.
    #[arg(long)]
    pub non_permanent: bool,

    #[command(flatten)]
    pub taxpayer: TaxpayerArgs,
}

impl From<EmploymentArgs> for EmploymentTaxInput {
    fn from(args: EmploymentArgs) -> Self {
        EmploymentTaxInput {
            salary: args.salary,
            allowances: args.allowances,
            insurance_premium: args.insurance_premium,
            pension_contribution: args.pension_contribution,
            taxpayer: args.taxpayer.into(),
            apply_ptkp: !args.no_ptkp,
            permanent_employee: !args.non_permanent,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct ProcurementArgs {
    /// Transaction category, e.g. `import`, `oil`, `luxury`.
    #[arg(long)]
    pub category: ProcurementCategory,

    #[arg(long, value_parser = parse_amount)]
    pub transaction_value: Decimal,

    /// Import kind: `regular`, `soybeans` or `special`.
    #[arg(long, default_value = "regular")]
    pub import_type: ImportType,

    /// Importer holds an API (importer identification number).
    #[arg(long)]
    pub import_license: bool,

    /// Payee has no NPWP.
    #[arg(long)]
    pub no_npwp: bool,
}

impl From<ProcurementArgs> for ProcurementTaxInput {
    fn from(args: ProcurementArgs) -> Self {
        ProcurementTaxInput {
            category: args.category,
            transaction_value: args.transaction_value,
            has_tax_id: !args.no_npwp,
            import_type: args.import_type,
            has_import_license: args.import_license,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct ServicesArgs {
    #[arg(long)]
    pub income_type: ServiceIncomeType,

    #[arg(long, value_parser = parse_amount)]
    pub amount: Decimal,

    /// Payee has no NPWP.
    #[arg(long)]
    pub no_npwp: bool,
}

impl From<ServicesArgs> for ServicesTaxInput {
    fn from(args: ServicesArgs) -> Self {
        ServicesTaxInput {
            income_type: args.income_type,
            income_amount: args.amount,
            has_tax_id: !args.no_npwp,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct CrossBorderArgs {
    #[arg(long)]
    pub income_type: CrossBorderIncomeType,

    #[arg(long, value_parser = parse_amount)]
    pub amount: Decimal,

    /// Treaty rate in percent. Implies a tax treaty applies.
    #[arg(long, value_parser = parse_rate)]
    pub treaty_rate: Option<Decimal>,
}

impl From<CrossBorderArgs> for CrossBorderTaxInput {
    fn from(args: CrossBorderArgs) -> Self {
        CrossBorderTaxInput {
            income_type: args.income_type,
            income_amount: args.amount,
            has_tax_treaty: args.treaty_rate.is_some(),
            treaty_rate: args.treaty_rate,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct VatArgs {
    #[arg(long, value_parser = parse_amount)]
    pub transaction_value: Decimal,

    #[arg(long, default_value = "sale")]
    pub transaction_type: VatTransactionType,

    /// PPnBM tier, `category1` to `category5`. Any other tier adds no PPnBM.
    #[arg(long)]
    pub luxury_category: Option<LuxuryCategory>,
}

impl From<VatArgs> for VatInput {
    fn from(args: VatArgs) -> Self {
        VatInput {
            transaction_type: args.transaction_type,
            transaction_value: args.transaction_value,
            luxury_category: args.luxury_category,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct SectorArgs {
    #[arg(long)]
    pub business: SectorBusiness,

    #[arg(long, value_parser = parse_amount)]
    pub gross_income: Decimal,

    #[arg(long)]
    pub no_npwp: bool,
}

impl From<SectorArgs> for SectorTaxInput {
    fn from(args: SectorArgs) -> Self {
        SectorTaxInput {
            business: args.business,
            gross_income: args.gross_income,
            has_tax_id: !args.no_npwp,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct CorporateFinalArgs {
    #[arg(long)]
    pub income_type: FinalIncomeType,

    #[arg(long, value_parser = parse_amount)]
    pub amount: Decimal,

    #[arg(long)]
    pub no_npwp: bool,
}

impl From<CorporateFinalArgs> for CorporateFinalTaxInput {
    fn from(args: CorporateFinalArgs) -> Self {
        CorporateFinalTaxInput {
            income_type: args.income_type,
            income_amount: args.amount,
            has_tax_id: !args.no_npwp,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct SettlementArgs {
    #[arg(long, value_parser = parse_amount)]
    pub net_income: Decimal,

    /// Prior-year losses carried forward.
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    pub loss_carryforward: Decimal,

    /// Tax already paid during the year.
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    pub tax_paid: Decimal,

    /// Apply the 11% small business rate.
    #[arg(long)]
    pub small_business: bool,
}

impl From<SettlementArgs> for SettlementInput {
    fn from(args: SettlementArgs) -> Self {
        SettlementInput {
            net_income: args.net_income,
            loss_carryforward: args.loss_carryforward,
            tax_paid: args.tax_paid,
            small_business: args.small_business,
        }
    }
}

// ─── personal ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Args)]
pub struct PersonalGeneralArgs {
    /// Annual gross income.
    #[arg(long, value_parser = parse_amount)]
    pub gross_income: Decimal,

    /// Annual deductible expenses.
    #[arg(long, value_parser = parse_amount, default_value = "0")]
    pub deductions: Decimal,

    #[command(flatten)]
    pub taxpayer: TaxpayerArgs,
}

impl From<PersonalGeneralArgs> for PersonalIncomeTaxInput {
    fn from(args: PersonalGeneralArgs) -> Self {
        PersonalIncomeTaxInput {
            gross_income: args.gross_income,
            allowable_deductions: args.deductions,
            taxpayer: args.taxpayer.into(),
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct TurnoverArgs {
    /// Gross turnover for the period.
    #[arg(long, value_parser = parse_amount)]
    pub turnover: Decimal,
}

impl From<TurnoverArgs> for TurnoverTaxInput {
    fn from(args: TurnoverArgs) -> Self {
        TurnoverTaxInput {
            gross_turnover: args.turnover,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct PresumptiveArgs {
    /// Business type, e.g. `trade`, `freelance`.
    #[arg(long)]
    pub business_type: NppnBusinessType,

    /// Annual gross turnover.
    #[arg(long, value_parser = parse_amount)]
    pub turnover: Decimal,

    #[command(flatten)]
    pub taxpayer: TaxpayerArgs,
}

impl From<PresumptiveArgs> for PresumptiveTaxInput {
    fn from(args: PresumptiveArgs) -> Self {
        PresumptiveTaxInput {
            business_type: args.business_type,
            gross_turnover: args.turnover,
            taxpayer: args.taxpayer.into(),
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct PersonalFinalArgs {
    #[arg(long)]
    pub income_type: FinalIncomeType,

    #[arg(long, value_parser = parse_amount)]
    pub amount: Decimal,
}

impl From<PersonalFinalArgs> for PersonalFinalTaxInput {
    fn from(args: PersonalFinalArgs) -> Self {
        PersonalFinalTaxInput {
            income_type: args.income_type,
            income_amount: args.amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(subcommand)]
        command: TaxCommand,
    }

    fn request(args: &[&str]) -> CalculationRequest {
        let cli = TestCli::try_parse_from(std::iter::once("pajak").chain(args.iter().copied()))
            .unwrap();
        cli.command.into()
    }

    #[test]
    fn employment_flags_map_to_input() {
        let request = request(&[
            "pph21",
            "--salary",
            "Rp 10.000.000",
            "--married",
            "--dependents",
            "2",
            "--no-ptkp",
        ]);

        let CalculationRequest::Employment(input) = request else {
            panic!("expected an employment request");
        };
        assert_eq!(input.salary, dec!(10000000));
        assert_eq!(input.allowances, dec!(0));
        assert_eq!(input.taxpayer, TaxpayerProfile::new(true, 2, true));
        assert!(!input.apply_ptkp);
        assert!(input.permanent_employee);
    }

    #[test]
    fn dependents_flag_saturates_at_three() {
        let request = request(&["pph-op", "--gross-income", "100000000", "--dependents", "300"]);

        let CalculationRequest::PersonalGeneral(input) = request else {
            panic!("expected a personal request");
        };
        assert_eq!(input.taxpayer.dependents, 3);
    }

    #[test]
    fn treaty_rate_implies_treaty() {
        let request = request(&[
            "pph26",
            "--income-type",
            "royalty",
            "--amount",
            "50000000",
            "--treaty-rate",
            "10%",
        ]);

        let CalculationRequest::CrossBorder(input) = request else {
            panic!("expected a cross-border request");
        };
        assert!(input.has_tax_treaty);
        assert_eq!(input.treaty_rate, Some(dec!(10)));
    }

    #[test]
    fn fallback_category_accepts_unknown_tag() {
        let request = request(&["pph15", "--business", "railway", "--gross-income", "1"]);

        let CalculationRequest::Sector(input) = request else {
            panic!("expected a sector request");
        };
        assert_eq!(input.business, SectorBusiness::Other);
    }

    #[test]
    fn unknown_luxury_category_means_no_luxury_tax() {
        let request = request(&[
            "ppn",
            "--transaction-value",
            "1",
            "--luxury-category",
            "category9",
        ]);

        let CalculationRequest::Vat(input) = request else {
            panic!("expected a VAT request");
        };
        assert_eq!(input.luxury_category, Some(LuxuryCategory::NotLuxury));
    }

    #[test]
    fn invalid_amount_is_rejected() {
        let result = TestCli::try_parse_from(["pajak", "pp23", "--turnover", "banyak"]);

        assert!(result.is_err());
    }
}
