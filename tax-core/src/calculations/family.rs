//! Family-allowance aggregation.
//!
//! The family step collects structured answers instead of amounts; this
//! module folds them into the single allowance figure the estimator
//! consumes. Per-item amounts are the statutory allowances for the personal
//! income tax return:
//!
//! | Item                                    | Allowance (baht) |
//! |-----------------------------------------|------------------|
//! | Personal allowance (always granted)     | 60,000           |
//! | Spouse without income                   | 60,000           |
//! | Qualifying parent (self or spouse side) | 30,000 each      |
//! | Child born before B.E. 2561             | 30,000 each      |
//! | Child born in/after B.E. 2561           | 60,000 each      |
//! | Disabled dependent without income       | 60,000 each      |

use rust_decimal::Decimal;

use crate::calculations::common::normalize_amount;
use crate::models::{FamilyProfile, MaritalStatus};

const PERSONAL_ALLOWANCE: u32 = 60_000;
const SPOUSE_ALLOWANCE: u32 = 60_000;
const PARENT_ALLOWANCE: u32 = 30_000;
const CHILD_PRE_2561_ALLOWANCE: u32 = 30_000;
const CHILD_FROM_2561_ALLOWANCE: u32 = 60_000;
const DISABLED_ALLOWANCE: u32 = 60_000;

/// Free-text head counts are digit strings in practice; anything else
/// coerces like every other amount, then floors to a whole non-negative
/// count.
fn head_count(raw: &str) -> Decimal {
    normalize_amount(raw).floor().max(Decimal::ZERO)
}

/// Folds a family profile into the total family allowance.
pub fn deduction_total(profile: &FamilyProfile) -> Decimal {
    let spouse_without_income = profile.marital_status == Some(MaritalStatus::MarriedNoIncome);

    let mut total = Decimal::from(PERSONAL_ALLOWANCE);
    if spouse_without_income {
        total += Decimal::from(SPOUSE_ALLOWANCE);
    }

    let parent = Decimal::from(PARENT_ALLOWANCE);
    if profile.parent_self_father {
        total += parent;
    }
    if profile.parent_self_mother {
        total += parent;
    }
    // Spouse-side parents count only when the spouse has no return of
    // their own to claim them on.
    if spouse_without_income {
        if profile.parent_spouse_father {
            total += parent;
        }
        if profile.parent_spouse_mother {
            total += parent;
        }
    }

    if profile.has_children {
        total += head_count(&profile.child_count_pre_2561)
            * Decimal::from(CHILD_PRE_2561_ALLOWANCE);
        total += head_count(&profile.child_count_from_2561)
            * Decimal::from(CHILD_FROM_2561_ALLOWANCE);
    }

    let disabled = Decimal::from(DISABLED_ALLOWANCE);
    if profile.disabled_father {
        total += disabled;
    }
    if profile.disabled_mother {
        total += disabled;
    }
    if profile.disabled_relative {
        total += disabled;
    }
    if profile.has_children {
        total += head_count(&profile.disabled_child_count) * disabled;
    }

    total
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn default_profile_gets_the_personal_allowance_only() {
        let total = deduction_total(&FamilyProfile::default());

        assert_eq!(total, dec!(60000));
    }

    #[test]
    fn no_income_spouse_adds_the_spouse_allowance() {
        let profile = FamilyProfile {
            marital_status: Some(MaritalStatus::MarriedNoIncome),
            ..FamilyProfile::default()
        };

        assert_eq!(deduction_total(&profile), dec!(120000));
    }

    #[test]
    fn spouse_side_parents_require_a_no_income_spouse() {
        let mut profile = FamilyProfile {
            marital_status: Some(MaritalStatus::MarriedSeparate),
            parent_spouse_father: true,
            parent_spouse_mother: true,
            ..FamilyProfile::default()
        };

        // Separately-filing spouse claims their own parents.
        assert_eq!(deduction_total(&profile), dec!(60000));

        profile.marital_status = Some(MaritalStatus::MarriedNoIncome);
        assert_eq!(deduction_total(&profile), dec!(180000));
    }

    #[test]
    fn children_split_by_birth_year_threshold() {
        let profile = FamilyProfile {
            marital_status: Some(MaritalStatus::Divorced),
            has_children: true,
            child_count_pre_2561: "2".into(),
            child_count_from_2561: "1".into(),
            ..FamilyProfile::default()
        };

        assert_eq!(deduction_total(&profile), dec!(180000));
    }

    #[test]
    fn child_counts_ignored_without_the_has_children_answer() {
        let profile = FamilyProfile {
            child_count_pre_2561: "3".into(),
            disabled_child_count: "1".into(),
            ..FamilyProfile::default()
        };

        assert_eq!(deduction_total(&profile), dec!(60000));
    }

    #[test]
    fn disabled_dependents_add_sixty_thousand_each() {
        let profile = FamilyProfile {
            marital_status: Some(MaritalStatus::Single),
            disabled_father: true,
            disabled_relative: true,
            ..FamilyProfile::default()
        };

        assert_eq!(deduction_total(&profile), dec!(180000));
    }

    #[test]
    fn disabled_children_count_through_the_head_count() {
        let profile = FamilyProfile {
            marital_status: Some(MaritalStatus::Divorced),
            has_children: true,
            child_count_from_2561: "2".into(),
            disabled_child_count: "2".into(),
            ..FamilyProfile::default()
        };

        assert_eq!(
            deduction_total(&profile),
            dec!(300000)
        );
    }

    #[test]
    fn malformed_counts_coerce_to_zero() {
        let profile = FamilyProfile {
            has_children: true,
            child_count_pre_2561: "two".into(),
            child_count_from_2561: "-1".into(),
            ..FamilyProfile::default()
        };

        assert_eq!(deduction_total(&profile), dec!(60000));
    }
}
