//! Cross-calculator properties and the reference scenarios, exercised
//! through the public dispatch API.

use pajak_core::calculations::{
    EmploymentTaxInput, ProgressiveSchedule, SettlementInput, VatInput, ptkp,
};
use pajak_core::error::MAX_AMOUNT;
use pajak_core::{
    CalculationError, CalculationReport, CalculationRequest, FinalIncomeType, ImportType, LuxuryCategory,
    ProcurementCategory, SectorBusiness, TaxpayerProfile, VatTransactionType, calculate,
};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing_subscriber::fmt::format::FmtSpan;

/// Initializes tracing subscriber for tests that exercise logging paths.
fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_span_events(FmtSpan::NONE)
        .with_test_writer()
        .finish();
    tracing::subscriber::set_default(subscriber)
}

/// One request per tax type, all with the same headline amount.
fn sample_requests(amount: Decimal) -> Vec<CalculationRequest> {
    let json = format!(
        r#"[
            {{ "type": "pph21", "salary": "{amount}", "has_tax_id": false }},
            {{ "type": "pph22", "category": "import", "transaction_value": "{amount}", "has_tax_id": false }},
            {{ "type": "pph23", "income_type": "royalty", "income_amount": "{amount}", "has_tax_id": true }},
            {{ "type": "pph26", "income_type": "interest", "income_amount": "{amount}", "has_tax_treaty": true, "treaty_rate": "10" }},
            {{ "type": "ppn", "transaction_value": "{amount}", "luxury_category": "category2" }},
            {{ "type": "pph15", "business": "aviation", "gross_income": "{amount}", "has_tax_id": true }},
            {{ "type": "pph4-2-corporate", "income_type": "land_building_rent", "income_amount": "{amount}", "has_tax_id": false }},
            {{ "type": "pph29", "net_income": "{amount}", "tax_paid": "1000000" }},
            {{ "type": "pph-op", "gross_income": "{amount}", "allowable_deductions": "5000000", "married": true, "dependents": 5 }},
            {{ "type": "pp23", "gross_turnover": "{amount}" }},
            {{ "type": "nppn", "business_type": "services", "gross_turnover": "{amount}", "has_tax_id": false }},
            {{ "type": "pph4-2-personal", "income_type": "deposit_interest", "income_amount": "{amount}" }}
        ]"#
    );
    serde_json::from_str(&json).unwrap()
}

fn monetary_outputs(report: &CalculationReport) -> Vec<Decimal> {
    let value = serde_json::to_value(report).unwrap();
    let mut amounts = Vec::new();
    collect_decimals(&value, &mut amounts);
    amounts
}

fn collect_decimals(
    value: &serde_json::Value,
    amounts: &mut Vec<Decimal>,
) {
    match value {
        serde_json::Value::String(s) => {
            if let Ok(amount) = s.parse::<Decimal>() {
                amounts.push(amount);
            }
        }
        serde_json::Value::Array(items) => {
            items.iter().for_each(|item| collect_decimals(item, amounts));
        }
        serde_json::Value::Object(fields) => {
            fields.values().for_each(|field| collect_decimals(field, amounts));
        }
        _ => {}
    }
}

// =============================================================================
// General properties
// =============================================================================

#[test]
fn every_tax_type_has_a_sample_request() {
    let requests = sample_requests(dec!(1000));

    let mut tags: Vec<&str> = requests.iter().map(|r| r.tax_type().as_str()).collect();
    tags.sort_unstable();
    tags.dedup();

    assert_eq!(tags.len(), pajak_core::TaxType::ALL.len());
}

#[test]
fn no_monetary_output_is_negative() {
    for amount in [dec!(0), dec!(1), dec!(999999.99), dec!(75000000), dec!(12000000000)] {
        for request in sample_requests(amount) {
            let report = calculate(&request).unwrap();

            for output in monetary_outputs(&report) {
                assert!(output >= Decimal::ZERO, "{:?} produced {output}", report.tax_type());
            }
        }
    }
}

#[test]
fn calculations_are_repeatable() {
    let _guard = init_test_tracing();

    for request in sample_requests(dec!(250000000)) {
        let first = calculate(&request).unwrap();
        let second = calculate(&request).unwrap();

        assert_eq!(first, second);
    }
}

#[test]
fn total_tax_does_not_decrease_with_amount() {
    let amounts = [dec!(0), dec!(10000000), dec!(60000000), dec!(300000000), dec!(900000000)];

    for index in 0..sample_requests(dec!(0)).len() {
        let totals: Vec<Decimal> = amounts
            .iter()
            .map(|amount| calculate(&sample_requests(*amount)[index]).unwrap().total_tax())
            .collect();

        assert!(
            totals.windows(2).all(|pair| pair[0] <= pair[1]),
            "request {index}: {totals:?}"
        );
    }
}

#[test]
fn progressive_tax_is_monotonic_with_rising_marginal_rate() {
    let schedule = ProgressiveSchedule::standard();
    let step = dec!(1000);

    let mut previous_tax = Decimal::ZERO;
    let mut previous_marginal = Decimal::ZERO;
    let mut income = Decimal::ZERO;
    while income <= dec!(600000000) {
        let tax = schedule.calculate_tax(income).unwrap();
        let marginal = schedule.calculate_tax(income + step).unwrap() - tax;

        assert!(tax >= previous_tax, "tax fell at {income}");
        assert!(marginal >= previous_marginal, "marginal rate fell at {income}");

        previous_tax = tax;
        previous_marginal = marginal;
        income += dec!(5000000);
    }
}

#[test]
fn largest_accepted_amount_calculates_for_every_tax_type() {
    for request in sample_requests(MAX_AMOUNT) {
        let report = calculate(&request).unwrap();

        assert!(report.total_tax() >= Decimal::ZERO, "{:?}", report.tax_type());
    }
}

#[test]
fn amounts_beyond_the_limit_are_rejected_for_every_tax_type() {
    for request in sample_requests(dec!(10000000000000000000000000000)) {
        let result = calculate(&request);

        assert!(
            matches!(result, Err(CalculationError::AmountTooLarge { .. })),
            "{:?}: {result:?}",
            request.tax_type()
        );
    }
}

#[test]
fn ptkp_schedule() {
    assert_eq!(ptkp(false, 0), dec!(54000000));
    assert_eq!(ptkp(true, 2), dec!(67500000));
    assert_eq!(ptkp(true, 3), ptkp(true, 9));
}

#[test]
fn unknown_fallback_categories_log_and_use_default() {
    let _guard = init_test_tracing();

    let request: CalculationRequest = serde_json::from_str(
        r#"{ "type": "pph15", "business": "spaceflight", "gross_income": 100, "has_tax_id": true }"#,
    )
    .unwrap();

    let CalculationRequest::Sector(input) = &request else {
        panic!("expected a sector request");
    };
    assert_eq!(input.business, SectorBusiness::Other);
    assert_eq!(calculate(&request).unwrap().total_tax(), dec!(2.64));
}

#[test]
fn unknown_service_income_is_withheld_at_fifteen_percent() {
    let request: CalculationRequest = serde_json::from_str(
        r#"{ "type": "pph23", "income_type": "commission", "income_amount": "10000000", "has_tax_id": true }"#,
    )
    .unwrap();

    assert_eq!(calculate(&request).unwrap().total_tax(), dec!(1500000));
}

#[test]
fn unknown_luxury_tier_adds_no_luxury_tax() {
    let request: CalculationRequest = serde_json::from_str(
        r#"{ "type": "ppn", "transaction_value": 100000000, "luxury_category": "category9" }"#,
    )
    .unwrap();

    let CalculationReport::Vat(result) = calculate(&request).unwrap() else {
        panic!("expected a VAT report");
    };
    assert_eq!(result.luxury_rate, Decimal::ZERO);
    assert_eq!(result.luxury_tax, Decimal::ZERO);
    assert_eq!(result.total_tax, dec!(11000000));
}

#[test]
fn unknown_cross_border_income_keeps_standard_rate() {
    let request: CalculationRequest = serde_json::from_str(
        r#"{ "type": "pph26", "income_type": "gift", "income_amount": 1000000 }"#,
    )
    .unwrap();

    assert_eq!(calculate(&request).unwrap().total_tax(), dec!(200000));
}

#[test]
fn dependent_counts_above_three_saturate() {
    let request: CalculationRequest = serde_json::from_str(
        r#"{ "type": "pph-op", "gross_income": "100000000", "dependents": 300 }"#,
    )
    .unwrap();

    let CalculationReport::PersonalGeneral(result) = calculate(&request).unwrap() else {
        panic!("expected a personal report");
    };
    assert_eq!(result.ptkp, dec!(67500000));
}

// =============================================================================
// Reference scenarios
// =============================================================================

#[test]
fn scenario_employment_without_ptkp() {
    let request = CalculationRequest::Employment(EmploymentTaxInput {
        salary: dec!(10000000),
        allowances: dec!(0),
        insurance_premium: dec!(0),
        pension_contribution: dec!(0),
        taxpayer: TaxpayerProfile::new(false, 0, true),
        apply_ptkp: false,
        permanent_employee: true,
    });

    let CalculationReport::Employment(result) = calculate(&request).unwrap() else {
        panic!("expected an employment report");
    };

    assert_eq!(result.gross_income, dec!(10000000));
    assert_eq!(result.position_cost, dec!(500000));
    assert_eq!(result.net_income, dec!(9500000));
    assert_eq!(result.annual_net_income, dec!(114000000));
    assert_eq!(result.ptkp, dec!(0));
    assert_eq!(result.taxable_income, dec!(114000000));
    assert_eq!(result.annual_tax, dec!(12100000));
    assert_eq!(result.monthly_tax, dec!(1008333.33));
}

#[test]
fn scenario_vat_with_luxury_category_three() {
    let request = CalculationRequest::Vat(VatInput {
        transaction_type: VatTransactionType::Sale,
        transaction_value: dec!(100000000),
        luxury_category: Some(LuxuryCategory::Category3),
    });

    let CalculationReport::Vat(result) = calculate(&request).unwrap() else {
        panic!("expected a VAT report");
    };

    assert_eq!(result.vat, dec!(11000000));
    assert_eq!(result.luxury_tax, dec!(30000000));
    assert_eq!(result.total_tax, dec!(41000000));
}

#[test]
fn scenario_staples_import_ignores_license() {
    for has_import_license in [true, false] {
        for (has_tax_id, expected_rate) in [(true, dec!(0.5)), (false, dec!(0.6))] {
            let request: CalculationRequest = serde_json::from_value(serde_json::json!({
                "type": "pph22",
                "category": ProcurementCategory::Import,
                "import_type": ImportType::Staples,
                "transaction_value": "100000000",
                "has_tax_id": has_tax_id,
                "has_import_license": has_import_license,
            }))
            .unwrap();

            let CalculationReport::Procurement(result) = calculate(&request).unwrap() else {
                panic!("expected a procurement report");
            };

            assert_eq!(result.rate, expected_rate);
        }
    }
}

#[test]
fn scenario_settlement_balance_due() {
    let request = CalculationRequest::Settlement(SettlementInput {
        net_income: dec!(500000000),
        loss_carryforward: dec!(0),
        tax_paid: dec!(50000000),
        small_business: false,
    });

    let CalculationReport::Settlement(result) = calculate(&request).unwrap() else {
        panic!("expected a settlement report");
    };

    assert_eq!(result.corporate_tax, dec!(110000000));
    assert_eq!(result.remaining_tax, dec!(60000000));
    assert_eq!(result.overpayment, dec!(0));
}

#[test]
fn scenario_final_tax_variants_differ_only_on_surcharge() {
    for income_type in FinalIncomeType::ALL {
        let corporate: CalculationRequest = serde_json::from_value(serde_json::json!({
            "type": "pph4-2-corporate",
            "income_type": income_type,
            "income_amount": "100000000",
            "has_tax_id": true,
        }))
        .unwrap();
        let personal: CalculationRequest = serde_json::from_value(serde_json::json!({
            "type": "pph4-2-personal",
            "income_type": income_type,
            "income_amount": "100000000",
        }))
        .unwrap();

        assert_eq!(
            calculate(&corporate).unwrap().total_tax(),
            calculate(&personal).unwrap().total_tax(),
            "{income_type}"
        );
    }
}
