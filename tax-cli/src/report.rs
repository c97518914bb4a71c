//! Text rendering of a completed tax summary.

use std::fmt::Write;

use tax_core::format::baht;
use tax_core::models::TaxSummary;

const LABEL_WIDTH: usize = 34;
const VALUE_WIDTH: usize = 14;

/// Renders the seven summary rows as aligned text, ending with the signed
/// net line labeled by direction.
pub fn render(summary: &TaxSummary) -> String {
    let mut out = String::new();

    row(&mut out, "Annual income", &baht(summary.income_per_year));
    row(
        &mut out,
        "Standard expense (50%, capped)",
        &baht(summary.standard_expense),
    );
    row(&mut out, "Total deductions", &baht(summary.total_deductions));
    row(&mut out, "Taxable income", &baht(summary.taxable_income));
    row(&mut out, "Tax withheld at source", &baht(summary.tax_withheld));
    row(&mut out, "Tax due by bracket", &baht(summary.bracket_tax));

    let label = if summary.is_refund() {
        "Refund due"
    } else {
        "Net tax payable"
    };
    let _ = writeln!(out, "{}", "-".repeat(LABEL_WIDTH + VALUE_WIDTH + 5));
    row(&mut out, label, &baht(summary.net_tax.abs()));

    out
}

fn row(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "{label:<LABEL_WIDTH$} {value:>VALUE_WIDTH$} baht");
}
