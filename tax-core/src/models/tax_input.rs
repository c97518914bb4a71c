use serde::{Deserialize, Serialize};

/// Raw wizard input, accumulated across the data-entry steps.
///
/// Every field is a free-text string exactly as typed: amounts may carry
/// thousands separators, currency symbols, or nothing at all. Nothing here
/// is validated; normalization to numbers happens inside the estimator, and
/// anything malformed coerces to zero there. An absent field therefore means
/// the same thing as `"0"`.
///
/// The record is never persisted. It lives only inside a wizard session and
/// is discarded when the session completes or is reset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxInput {
    // Income step
    pub salary_per_month: String,
    pub bonus_per_year: String,
    pub other_income_per_year: String,

    /// Family allowance aggregate, folded from [`FamilyProfile`] when the
    /// family step is left. The estimator treats it as one opaque amount.
    ///
    /// [`FamilyProfile`]: crate::models::FamilyProfile
    pub family_total: String,

    // Funds & savings step
    pub provident_fund_per_year: String,
    pub social_security_per_year: String,
    pub mortgage_interest_per_year: String,

    // Insurance step
    pub life_insurance: String,
    pub health_insurance: String,
    pub parent_health_insurance: String,
    pub annuity_life_insurance: String,

    // Other funds step
    pub gov_pension_fund_per_year: String,
    pub national_savings_fund_per_year: String,
    pub teacher_fund_per_year: String,

    // Donations step
    pub donation_general: String,
    pub donation_education: String,
    pub donation_political: String,

    // Withheld step
    pub withheld_salary_per_year: String,
    pub advance_tax_paid: String,
}
