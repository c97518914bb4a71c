use serde::{Deserialize, Serialize};

/// Marital status as reported on the family step.
///
/// Only the filing situations the estimator distinguishes are modeled;
/// a jointly-filing spouse with income is entered as `MarriedSeparate`
/// plus the spouse's own return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    Single,
    Divorced,
    /// Married; the spouse has income and files separately.
    MarriedSeparate,
    /// Married; the spouse has no income of their own.
    MarriedNoIncome,
}

impl MaritalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Divorced => "divorced",
            Self::MarriedSeparate => "married_separate",
            Self::MarriedNoIncome => "married_no_income",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "single" => Some(Self::Single),
            "divorced" => Some(Self::Divorced),
            "married_separate" => Some(Self::MarriedSeparate),
            "married_no_income" => Some(Self::MarriedNoIncome),
            _ => None,
        }
    }
}
