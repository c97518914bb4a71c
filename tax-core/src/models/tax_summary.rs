use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Result of a completed tax calculation.
///
/// All monetary fields are non-negative except `net_tax`, which is signed:
/// positive means tax is still owed, negative means a refund is due.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSummary {
    /// Total assessable income for the year.
    pub income_per_year: Decimal,

    /// Flat-rate expense allowance: 50% of income, capped at 100,000.
    pub standard_expense: Decimal,

    /// Every itemized allowance after per-item and group ceilings.
    pub total_deductions: Decimal,

    /// Income remaining after the expense allowance and deductions,
    /// floored at zero.
    pub taxable_income: Decimal,

    /// Tax already collected at source plus advance payments.
    pub tax_withheld: Decimal,

    /// Tax computed from the progressive rate schedule.
    pub bracket_tax: Decimal,

    /// `bracket_tax - tax_withheld`. Negative values are a refund.
    pub net_tax: Decimal,
}

impl TaxSummary {
    /// True when withholding exceeded the computed tax.
    pub fn is_refund(&self) -> bool {
        self.net_tax < Decimal::ZERO
    }
}
