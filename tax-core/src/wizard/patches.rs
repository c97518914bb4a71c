//! Shallow-merge patches, one per data-entry step.
//!
//! A step edits only the fields it owns: it submits a patch where `Some`
//! replaces the stored value and `None` leaves it alone. The family step is
//! the exception — it edits a structured [`FamilyProfile`] directly through
//! [`WizardSession::family_mut`].
//!
//! [`FamilyProfile`]: crate::models::FamilyProfile
//! [`WizardSession::family_mut`]: crate::wizard::WizardSession::family_mut

use serde::{Deserialize, Serialize};

use crate::models::TaxInput;

macro_rules! step_patch {
    ($(#[$doc:meta])* $name:ident { $($field:ident),+ $(,)? }) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct $name {
            $(pub $field: Option<String>,)+
        }

        impl $name {
            pub(crate) fn apply(self, input: &mut TaxInput) {
                $(
                    if let Some(value) = self.$field {
                        input.$field = value;
                    }
                )+
            }
        }
    };
}

step_patch! {
    /// Income step: salary, bonus, and other annual income.
    IncomePatch {
        salary_per_month,
        bonus_per_year,
        other_income_per_year,
    }
}

step_patch! {
    /// Funds & savings step: provident fund, social security, mortgage
    /// interest.
    FundsPatch {
        provident_fund_per_year,
        social_security_per_year,
        mortgage_interest_per_year,
    }
}

step_patch! {
    /// Insurance step: the four premium categories.
    InsurancePatch {
        life_insurance,
        health_insurance,
        parent_health_insurance,
        annuity_life_insurance,
    }
}

step_patch! {
    /// Other funds step: government pension, national savings, and
    /// private-teacher funds.
    OtherFundsPatch {
        gov_pension_fund_per_year,
        national_savings_fund_per_year,
        teacher_fund_per_year,
    }
}

step_patch! {
    /// Donations step: general, education-class, and political donations.
    DonationsPatch {
        donation_general,
        donation_education,
        donation_political,
    }
}

step_patch! {
    /// Withheld step: tax collected at source and advance payments.
    WithheldPatch {
        withheld_salary_per_year,
        advance_tax_paid,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn apply_replaces_only_the_present_fields() {
        let mut input = TaxInput {
            salary_per_month: "10000".into(),
            bonus_per_year: "5000".into(),
            ..TaxInput::default()
        };

        IncomePatch {
            salary_per_month: Some("20000".into()),
            ..IncomePatch::default()
        }
        .apply(&mut input);

        assert_eq!(input.salary_per_month, "20000");
        assert_eq!(input.bonus_per_year, "5000");
    }

    #[test]
    fn apply_can_blank_a_field_explicitly() {
        let mut input = TaxInput {
            donation_general: "1000".into(),
            ..TaxInput::default()
        };

        DonationsPatch {
            donation_general: Some(String::new()),
            ..DonationsPatch::default()
        }
        .apply(&mut input);

        assert_eq!(input.donation_general, "");
    }
}
