//! Batch calculations from a TOML file.
//!
//! ```toml
//! [[calculation]]
//! type = "ppn"
//! transaction_value = "Rp 100.000.000"
//! luxury_category = "category3"
//!
//! [[calculation]]
//! type = "pph29"
//! net_income = 500000000
//! tax_paid = 50000000
//! ```
//!
//! Numeric fields may be integers, floats or strings. Strings are coerced
//! the way form input is: anything unparseable becomes 0 with a warning.
//! An empty string in an optional field means the field is absent.

use std::path::Path;

use anyhow::{Context, Result, bail};
use pajak_core::{CalculationReport, CalculationRequest, calculate};
use toml::{Table, Value};
use tracing::{debug, info};

use crate::utils::{coerce_amount, coerce_count, coerce_rate};

/// Monetary fields of every request type.
const AMOUNT_FIELDS: &[&str] = &[
    "salary",
    "allowances",
    "insurance_premium",
    "pension_contribution",
    "transaction_value",
    "income_amount",
    "gross_income",
    "allowable_deductions",
    "gross_turnover",
    "net_income",
    "loss_carryforward",
    "tax_paid",
];

const RATE_FIELDS: &[&str] = &["treaty_rate"];

const COUNT_FIELDS: &[&str] = &["dependents"];

const OPTIONAL_FIELDS: &[&str] = &["luxury_category", "treaty_rate"];

/// One evaluated entry of a batch file.
#[derive(Debug)]
pub struct BatchEntry {
    /// 1-based position in the file.
    pub index: usize,
    pub request: CalculationRequest,
    pub report: CalculationReport,
}

/// Parses the `[[calculation]]` tables of a batch document.
pub fn parse_batch(content: &str) -> Result<Vec<CalculationRequest>> {
    let mut document: Table = toml::from_str(content).context("batch file is not valid TOML")?;

    let Some(entries) = document.remove("calculation") else {
        bail!("batch file has no [[calculation]] tables");
    };
    let Value::Array(entries) = entries else {
        bail!("`calculation` must be an array of tables");
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            let Value::Table(table) = entry else {
                bail!("calculation #{} is not a table", i + 1);
            };
            Value::Table(coerce_fields(table))
                .try_into::<CalculationRequest>()
                .with_context(|| format!("calculation #{} is invalid", i + 1))
        })
        .collect()
}

/// Rewrites string-typed numeric fields into values the request types
/// accept, and drops empty optional fields.
fn coerce_fields(mut table: Table) -> Table {
    for field in OPTIONAL_FIELDS {
        if matches!(table.get(*field), Some(Value::String(s)) if s.trim().is_empty()) {
            table.remove(*field);
        }
    }

    for (key, value) in table.iter_mut() {
        let Value::String(text) = value else {
            continue;
        };
        let coerced = if AMOUNT_FIELDS.contains(&key.as_str()) {
            Value::String(coerce_amount(text).to_string())
        } else if RATE_FIELDS.contains(&key.as_str()) {
            Value::String(coerce_rate(text).to_string())
        } else if COUNT_FIELDS.contains(&key.as_str()) {
            Value::Integer(i64::from(coerce_count(text)))
        } else {
            continue;
        };
        *value = coerced;
    }

    table
}

/// Calculates every request in order, stopping at the first failure.
pub fn run_batch(requests: Vec<CalculationRequest>) -> Result<Vec<BatchEntry>> {
    requests
        .into_iter()
        .enumerate()
        .map(|(i, request)| {
            let index = i + 1;
            let report = calculate(&request).with_context(|| {
                format!("calculation #{index} ({}) failed", request.tax_type().as_str())
            })?;
            debug!(index, tax_type = report.tax_type().as_str(), "batch entry calculated");
            Ok(BatchEntry {
                index,
                request,
                report,
            })
        })
        .collect()
}

/// Reads, parses and calculates a batch file.
pub fn run_batch_file(path: &Path) -> Result<Vec<BatchEntry>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read batch file {}", path.display()))?;
    let requests =
        parse_batch(&content).with_context(|| format!("failed to parse {}", path.display()))?;
    info!(count = requests.len(), path = %path.display(), "loaded batch file");
    run_batch(requests)
}

#[cfg(test)]
mod tests {
    use pajak_core::{LuxuryCategory, TaxType};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_batch_reads_each_table_in_order() {
        let requests = parse_batch(
            r#"
            [[calculation]]
            type = "pp23"
            gross_turnover = 40000000

            [[calculation]]
            type = "pph23"
            income_type = "rent"
            income_amount = 1.5e6
            has_tax_id = true
            "#,
        )
        .unwrap();

        let types: Vec<TaxType> = requests.iter().map(|r| r.tax_type()).collect();
        assert_eq!(types, vec![TaxType::Turnover, TaxType::Services]);
    }

    #[test]
    fn string_amounts_are_coerced() {
        let requests = parse_batch(
            r#"
            [[calculation]]
            type = "ppn"
            transaction_value = "Rp 100.000.000"
            luxury_category = ""
            "#,
        )
        .unwrap();

        let CalculationRequest::Vat(input) = &requests[0] else {
            panic!("expected a VAT request");
        };
        assert_eq!(input.transaction_value, dec!(100000000));
        assert_eq!(input.luxury_category, None);
    }

    #[test]
    fn unparseable_amount_becomes_zero() {
        let requests = parse_batch(
            r#"
            [[calculation]]
            type = "pph-op"
            gross_income = "lots"
            dependents = "two"
            "#,
        )
        .unwrap();

        let CalculationRequest::PersonalGeneral(input) = &requests[0] else {
            panic!("expected a personal request");
        };
        assert_eq!(input.gross_income, dec!(0));
        assert_eq!(input.taxpayer.dependents, 0);
    }

    #[test]
    fn dependent_counts_saturate_at_three() {
        let requests = parse_batch(
            r#"
            [[calculation]]
            type = "pph-op"
            gross_income = 100000000
            dependents = "300"

            [[calculation]]
            type = "pph-op"
            gross_income = 100000000
            dependents = 300
            "#,
        )
        .unwrap();

        for request in &requests {
            let CalculationRequest::PersonalGeneral(input) = request else {
                panic!("expected a personal request");
            };
            assert_eq!(input.taxpayer.dependents, 3);
        }
    }

    #[test]
    fn missing_calculation_tables_is_an_error() {
        let err = parse_batch("title = 'empty'").unwrap_err();

        assert!(err.to_string().contains("[[calculation]]"));
    }

    #[test]
    fn unknown_type_is_an_error() {
        let err = parse_batch(
            r#"
            [[calculation]]
            type = "pph99"
            "#,
        )
        .unwrap_err();

        assert_eq!(err.to_string(), "calculation #1 is invalid");
    }

    #[test]
    fn run_batch_numbers_entries_from_one() {
        let requests = parse_batch(
            r#"
            [[calculation]]
            type = "ppn"
            transaction_value = 100000000
            luxury_category = "category3"
            "#,
        )
        .unwrap();

        let entries = run_batch(requests).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].index, 1);
        assert_eq!(entries[0].report.total_tax(), dec!(41000000));
        let CalculationRequest::Vat(input) = &entries[0].request else {
            panic!("expected a VAT request");
        };
        assert_eq!(input.luxury_category, Some(LuxuryCategory::Category3));
    }

    #[test]
    fn run_batch_stops_on_invalid_input() {
        let requests = parse_batch(
            r#"
            [[calculation]]
            type = "pp23"
            gross_turnover = -5
            "#,
        )
        .unwrap();

        let err = run_batch(requests).unwrap_err();

        assert_eq!(err.to_string(), "calculation #1 (pp23) failed");
    }
}
