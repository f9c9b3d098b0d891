//! Plain-text rendering of calculation reports.

use std::fmt::Write;

use pajak_core::calculations::TaxLayer;
use pajak_core::{CalculationReport, TaxType, TaxpayerKind};
use rust_decimal::Decimal;

use crate::format::{format_percentage, format_rupiah};

/// Label/value rows rendered as two aligned columns.
#[derive(Debug, Default)]
struct Rows(Vec<(String, String)>);

impl Rows {
    fn amount(
        &mut self,
        label: &str,
        value: Decimal,
    ) -> &mut Self {
        self.0.push((label.to_string(), format_rupiah(value)));
        self
    }

    fn rate(
        &mut self,
        label: &str,
        value: Decimal,
    ) -> &mut Self {
        self.0.push((label.to_string(), format_percentage(value)));
        self
    }

    fn text(
        &mut self,
        label: &str,
        value: impl Into<String>,
    ) -> &mut Self {
        self.0.push((label.to_string(), value.into()));
        self
    }

    fn yes_no(
        &mut self,
        label: &str,
        value: bool,
    ) -> &mut Self {
        self.text(label, if value { "yes" } else { "no" })
    }

    fn layers(
        &mut self,
        layers: &[TaxLayer],
    ) -> &mut Self {
        for layer in layers {
            self.0
                .push((format!("  {}", layer.description), format_rupiah(layer.tax)));
        }
        self
    }

    fn render(&self) -> String {
        let width = self.0.iter().map(|(label, _)| label.chars().count()).max().unwrap_or(0);
        let mut out = String::new();
        for (label, value) in &self.0 {
            let _ = writeln!(out, "{label:<width$}  {value}");
        }
        out
    }
}

/// Renders a report as a titled, aligned block of text.
pub fn render_text(report: &CalculationReport) -> String {
    let mut rows = Rows::default();

    match report {
        CalculationReport::Employment(r) => {
            rows.amount("Gross income", r.gross_income)
                .amount("Position cost", r.position_cost)
                .amount("Total deductions", r.total_deductions)
                .amount("Net income", r.net_income)
                .amount("Annual net income", r.annual_net_income)
                .amount("PTKP", r.ptkp)
                .amount("Taxable income", r.taxable_income)
                .amount("Annual tax", r.annual_tax)
                .amount("Monthly tax", r.monthly_tax)
                .yes_no("Permanent employee", r.permanent_employee);
        }
        CalculationReport::Procurement(r) => {
            rows.amount("Transaction value", r.transaction_value)
                .rate("Rate", r.rate)
                .amount("Tax", r.tax);
            if let Some(note) = &r.note {
                rows.text("Note", note.as_str());
            }
        }
        CalculationReport::Services(r) => {
            rows.amount("Income", r.income_amount)
                .rate("Rate", r.rate)
                .amount("Tax", r.tax);
        }
        CalculationReport::CrossBorder(r) => {
            rows.text("Income type", r.income_type.label())
                .amount("Income", r.income_amount)
                .rate("Standard rate", r.standard_rate)
                .rate("Applied rate", r.applied_rate)
                .yes_no("Tax treaty", r.has_tax_treaty)
                .amount("Tax", r.tax);
        }
        CalculationReport::Vat(r) => {
            rows.text("Transaction type", r.transaction_type.label())
                .amount("Transaction value", r.transaction_value)
                .rate("PPN rate", r.vat_rate)
                .amount("PPN", r.vat)
                .rate("PPnBM rate", r.luxury_rate)
                .amount("PPnBM", r.luxury_tax)
                .amount("Total tax", r.total_tax);
        }
        CalculationReport::Sector(r) => {
            rows.amount("Gross income", r.gross_income)
                .rate("Rate", r.rate)
                .amount("Tax", r.tax);
        }
        CalculationReport::CorporateFinal(r) => {
            rows.text("Income type", r.description.as_str())
                .amount("Income", r.income_amount)
                .rate("Rate", r.rate)
                .amount("Tax", r.tax);
        }
        CalculationReport::Settlement(r) => {
            rows.amount("Net income", r.net_income)
                .amount("Loss carryforward", r.loss_carryforward)
                .amount("Taxable income", r.taxable_income)
                .rate("Rate", r.applied_rate)
                .amount("Corporate tax", r.corporate_tax)
                .amount("Tax paid", r.tax_paid);
            if r.is_overpaid {
                rows.amount("Overpayment", r.overpayment);
            } else {
                rows.amount("Remaining tax", r.remaining_tax);
            }
        }
        CalculationReport::PersonalGeneral(r) => {
            rows.amount("Gross income", r.gross_income)
                .amount("Allowable deductions", r.allowable_deductions)
                .amount("Net income", r.net_income)
                .amount("PTKP", r.ptkp)
                .amount("Taxable income", r.taxable_income)
                .layers(&r.tax_layers)
                .amount("Total tax", r.total_tax)
                .amount("No NPWP penalty", r.no_tax_id_penalty)
                .amount("Total with penalty", r.total_tax_with_penalty);
        }
        CalculationReport::Turnover(r) => {
            rows.amount("Gross turnover", r.gross_turnover)
                .rate("Rate", r.rate)
                .amount("Tax", r.tax);
        }
        CalculationReport::Presumptive(r) => {
            rows.amount("Gross turnover", r.gross_turnover)
                .rate("Net margin", r.margin_rate)
                .amount("Net income", r.net_income)
                .amount("PTKP", r.ptkp)
                .amount("Taxable income", r.taxable_income)
                .layers(&r.tax_layers)
                .amount("Total tax", r.total_tax)
                .amount("No NPWP penalty", r.no_tax_id_penalty)
                .amount("Total with penalty", r.total_tax_with_penalty);
        }
        CalculationReport::PersonalFinal(r) => {
            rows.text("Income type", r.income_type.label())
                .amount("Income", r.income_amount)
                .rate("Rate", r.rate)
                .amount("Tax", r.tax);
        }
    }

    format!("{}\n{}", report.tax_type().label(), rows.render())
}

/// Lists the tax types offered to each kind of taxpayer, or to one kind.
pub fn render_tax_type_list(kind: Option<TaxpayerKind>) -> String {
    let kinds = match kind {
        Some(kind) => vec![kind],
        None => TaxpayerKind::ALL.to_vec(),
    };

    let mut out = String::new();
    for kind in kinds {
        let _ = writeln!(out, "{kind}");
        for tax_type in TaxType::for_kind(kind) {
            let _ = writeln!(out, "  {:<18}{}", tax_type.as_str(), tax_type.label());
        }
    }
    out
}
