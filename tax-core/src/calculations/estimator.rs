//! Personal income tax estimation.
//!
//! This module implements the annual tax computation the wizard runs once
//! the last data-entry step is complete. The computation walks the
//! following lines:
//!
//! | Line | Description |
//! |------|-------------|
//! | 1    | Annual income: monthly salary × 12 + bonus + other income |
//! | 2    | Standard expense allowance: 50% of income, capped at 100,000 |
//! | 3    | Family allowance aggregate (supplied by the family step) |
//! | 4    | Fund contributions, each under its own statutory ceiling |
//! | 5    | Insurance premiums, each under its own statutory ceiling |
//! | 6    | Shared 500,000 ceiling over {PVD, GPF, teacher fund, annuity} |
//! | 7    | Donation base: income − expense − base deductions, floored at 0 |
//! | 8    | Donations: general ≤ 10% of base, education doubled then ≤ 10%, political ≤ 10,000 |
//! | 9    | Taxable income: income − expense − total deductions, floored at 0 |
//! | 10   | Bracket tax from the progressive schedule |
//! | 11   | Net tax: bracket tax − withholding (signed; negative = refund) |
//!
//! Every input field is a free-text string; malformed values coerce to zero
//! and capped figures are clamped to their ceilings, so the computation is
//! total: it cannot fail and it never panics.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::TaxEstimator;
//! use tax_core::models::{TaxInput, thai_schedule};
//!
//! let input = TaxInput {
//!     salary_per_month: "50,000".into(),
//!     family_total: "60000".into(),
//!     withheld_salary_per_year: "24,000".into(),
//!     ..TaxInput::default()
//! };
//!
//! let brackets = thai_schedule();
//! let summary = TaxEstimator::new(&brackets).calculate(&input);
//!
//! assert_eq!(summary.income_per_year, dec!(600000));
//! assert_eq!(summary.standard_expense, dec!(100000));
//! assert_eq!(summary.taxable_income, dec!(440000));
//! assert_eq!(summary.bracket_tax, dec!(21500));
//! assert_eq!(summary.net_tax, dec!(-2500));
//! assert!(summary.is_refund());
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::{cap_group, normalize_amount};
use crate::models::{TaxBracket, TaxInput, TaxSummary};

// Statutory ceilings, in baht.
const STANDARD_EXPENSE_CAP: u32 = 100_000;
const SOCIAL_SECURITY_CAP: u32 = 9_000;
const MORTGAGE_INTEREST_CAP: u32 = 100_000;
const NATIONAL_SAVINGS_CAP: u32 = 13_200;
const LIFE_INSURANCE_CAP: u32 = 100_000;
const HEALTH_INSURANCE_CAP: u32 = 25_000;
const PARENT_HEALTH_CAP: u32 = 15_000;
const ANNUITY_CAP: u32 = 200_000;
const RETIREMENT_FUND_CAP: u32 = 500_000;
const RETIREMENT_GROUP_CEILING: u32 = 500_000;
const POLITICAL_DONATION_CAP: u32 = 10_000;

/// 50% of income qualifies as the flat expense allowance.
fn standard_expense_rate() -> Decimal {
    Decimal::new(50, 2)
}

/// Retirement-oriented contributions are limited to 15% of income.
fn retirement_income_share() -> Decimal {
    Decimal::new(15, 2)
}

/// Donations are limited to 10% of the post-deduction base.
fn donation_rate() -> Decimal {
    Decimal::new(10, 2)
}

/// Calculator for the annual personal income tax summary.
///
/// Borrows a progressive rate schedule sorted by ascending upper bound;
/// the last row should be open-ended so all income is covered.
#[derive(Debug, Clone)]
pub struct TaxEstimator<'a> {
    brackets: &'a [TaxBracket],
}

impl<'a> TaxEstimator<'a> {
    pub fn new(brackets: &'a [TaxBracket]) -> Self {
        Self { brackets }
    }

    /// Computes the full tax summary for a wizard input.
    ///
    /// Total over its input domain: malformed amounts coerce to zero, every
    /// capped figure is clamped into `[0, ceiling]`, and all derived totals
    /// except the signed net tax are non-negative.
    pub fn calculate(&self, input: &TaxInput) -> TaxSummary {
        let income_per_year = self.annual_income(input);
        let standard_expense = self.standard_expense(income_per_year);

        let family_total = normalize_amount(&input.family_total).max(Decimal::ZERO);

        // Per-fund statutory ceilings. The income-proportional ones floor at
        // zero so a negative income figure cannot poison the clamp range.
        let retirement_ceiling = self.retirement_ceiling(income_per_year);
        let provident = capped(&input.provident_fund_per_year, retirement_ceiling);
        let social_security = capped(
            &input.social_security_per_year,
            Decimal::from(SOCIAL_SECURITY_CAP),
        );
        let mortgage = capped(
            &input.mortgage_interest_per_year,
            Decimal::from(MORTGAGE_INTEREST_CAP),
        );
        let gov_pension = capped(&input.gov_pension_fund_per_year, retirement_ceiling);
        let teacher_fund = capped(&input.teacher_fund_per_year, retirement_ceiling);
        let national_savings = capped(
            &input.national_savings_fund_per_year,
            Decimal::from(NATIONAL_SAVINGS_CAP),
        );

        let life = capped(&input.life_insurance, Decimal::from(LIFE_INSURANCE_CAP));
        let health = capped(&input.health_insurance, Decimal::from(HEALTH_INSURANCE_CAP));
        let parent_health = capped(
            &input.parent_health_insurance,
            Decimal::from(PARENT_HEALTH_CAP),
        );
        let annuity = capped(
            &input.annuity_life_insurance,
            self.annuity_ceiling(income_per_year),
        );

        // The retirement-oriented figures share one more statutory ceiling.
        let [provident, gov_pension, teacher_fund, annuity] = cap_group(
            [provident, gov_pension, teacher_fund, annuity],
            Decimal::from(RETIREMENT_GROUP_CEILING),
        );

        let base_deductions = family_total
            + social_security
            + mortgage
            + national_savings
            + life
            + health
            + parent_health
            + provident
            + gov_pension
            + teacher_fund
            + annuity;

        // Donations are capped against what is left after everything else.
        let donation_base =
            (income_per_year - standard_expense - base_deductions).max(Decimal::ZERO);
        let donation_ceiling = donation_base * donation_rate();
        let donation_general = capped(&input.donation_general, donation_ceiling);
        // Education/sport/public-hospital donations count double, and the
        // doubled figure is what the 10% ceiling applies to.
        let donation_education = (normalize_amount(&input.donation_education)
            .max(Decimal::ZERO)
            * Decimal::TWO)
            .min(donation_ceiling);
        let donation_political = capped(
            &input.donation_political,
            Decimal::from(POLITICAL_DONATION_CAP),
        );

        let total_deductions =
            base_deductions + donation_general + donation_education + donation_political;

        let taxable_income =
            (income_per_year - standard_expense - total_deductions).max(Decimal::ZERO);
        let bracket_tax = self.bracket_tax(taxable_income);

        // Withholding has no ceiling but shares the non-negativity of every
        // other monetary line; only net tax is allowed a sign.
        let tax_withheld = normalize_amount(&input.withheld_salary_per_year)
            .max(Decimal::ZERO)
            + normalize_amount(&input.advance_tax_paid).max(Decimal::ZERO);
        let net_tax = bracket_tax - tax_withheld;

        debug!(%income_per_year, %taxable_income, %bracket_tax, %net_tax, "tax summary computed");

        TaxSummary {
            income_per_year,
            standard_expense,
            total_deductions,
            taxable_income,
            tax_withheld,
            bracket_tax,
            net_tax,
        }
    }

    /// Annual income: monthly salary × 12 plus annual bonus and other income.
    fn annual_income(&self, input: &TaxInput) -> Decimal {
        normalize_amount(&input.salary_per_month) * Decimal::from(12)
            + normalize_amount(&input.bonus_per_year)
            + normalize_amount(&input.other_income_per_year)
    }

    /// Flat-rate expense allowance: 50% of income, capped at 100,000 and
    /// floored at zero.
    fn standard_expense(&self, income_per_year: Decimal) -> Decimal {
        (income_per_year * standard_expense_rate())
            .min(Decimal::from(STANDARD_EXPENSE_CAP))
            .max(Decimal::ZERO)
    }

    /// Per-fund ceiling for retirement-oriented contributions:
    /// 15% of income, at most 500,000.
    fn retirement_ceiling(&self, income_per_year: Decimal) -> Decimal {
        (income_per_year * retirement_income_share())
            .min(Decimal::from(RETIREMENT_FUND_CAP))
            .max(Decimal::ZERO)
    }

    /// Annuity life insurance ceiling: 15% of income, at most 200,000.
    fn annuity_ceiling(&self, income_per_year: Decimal) -> Decimal {
        (income_per_year * retirement_income_share())
            .min(Decimal::from(ANNUITY_CAP))
            .max(Decimal::ZERO)
    }

    /// Walks the progressive schedule, consuming taxable income into each
    /// bracket's span and accumulating the marginal tax.
    fn bracket_tax(&self, taxable_income: Decimal) -> Decimal {
        let mut remaining = taxable_income.max(Decimal::ZERO);
        let mut tax = Decimal::ZERO;
        let mut lower_bound = Decimal::ZERO;

        for bracket in self.brackets {
            if remaining <= Decimal::ZERO {
                break;
            }
            let consumed = match bracket.max_income {
                Some(upper) => remaining.min((upper - lower_bound).max(Decimal::ZERO)),
                None => remaining,
            };
            tax += consumed * bracket.tax_rate;
            remaining -= consumed;
            if let Some(upper) = bracket.max_income {
                lower_bound = upper;
            }
        }

        tax.max(Decimal::ZERO)
    }
}

/// Normalizes a free-text amount and clamps it into `[0, ceiling]`.
fn capped(raw: &str, ceiling: Decimal) -> Decimal {
    normalize_amount(raw).clamp(Decimal::ZERO, ceiling)
}
