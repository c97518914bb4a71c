//! Wizard input files.
//!
//! A wizard file is a TOML document with one table per data-entry step.
//! All tables and all fields are optional; amounts are written as quoted
//! strings and may carry thousands separators or currency symbols — they
//! are normalized before any arithmetic, exactly as typed input would be.
//!
//! ## Tables and fields
//!
//! | Table          | Fields |
//! |----------------|--------|
//! | `[income]`     | `salary_per_month` (required to be > 0), `bonus_per_year`, `other_income_per_year` |
//! | `[family]`     | `marital_status` (`single`, `divorced`, `married_separate`, `married_no_income`), `parent_self_father`, `parent_self_mother`, `parent_spouse_father`, `parent_spouse_mother`, `has_children`, `child_count_pre_2561`, `child_count_from_2561`, `disabled_father`, `disabled_mother`, `disabled_relative`, `disabled_child_count` |
//! | `[funds]`      | `provident_fund_per_year`, `social_security_per_year`, `mortgage_interest_per_year` |
//! | `[insurance]`  | `life_insurance`, `health_insurance`, `parent_health_insurance`, `annuity_life_insurance` |
//! | `[other_funds]`| `gov_pension_fund_per_year`, `national_savings_fund_per_year`, `teacher_fund_per_year` |
//! | `[donations]`  | `donation_general`, `donation_education`, `donation_political` |
//! | `[withheld]`   | `withheld_salary_per_year`, `advance_tax_paid` |
//!
//! ## Minimal example
//!
//! ```toml
//! [income]
//! salary_per_month = "25,000"
//! ```
//!
//! ## Fuller example
//!
//! ```toml
//! [income]
//! salary_per_month = "85,000"
//! bonus_per_year = "170,000"
//!
//! [family]
//! marital_status = "married_no_income"
//! has_children = true
//! child_count_from_2561 = "1"
//!
//! [funds]
//! provident_fund_per_year = "120,000"
//! social_security_per_year = "9,000"
//!
//! [withheld]
//! withheld_salary_per_year = "60,000"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use tax_core::models::{FamilyProfile, TaxSummary, thai_schedule};
use tax_core::wizard::{
    DonationsPatch, FundsPatch, IncomePatch, InsurancePatch, OtherFundsPatch, WithheldPatch,
    WizardError, WizardSession,
};

#[derive(Debug, Error)]
pub enum WizardFileError {
    #[error("cannot read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid wizard file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Wizard(#[from] WizardError),
}

/// A full wizard run, loaded from disk in one piece.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WizardFile {
    pub income: IncomePatch,
    pub family: FamilyProfile,
    pub funds: FundsPatch,
    pub insurance: InsurancePatch,
    pub other_funds: OtherFundsPatch,
    pub donations: DonationsPatch,
    pub withheld: WithheldPatch,
}

impl WizardFile {
    pub fn load(path: &Path) -> Result<Self, WizardFileError> {
        let text = std::fs::read_to_string(path).map_err(|source| WizardFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file = toml::from_str(&text)?;
        info!(path = %path.display(), "wizard file loaded");
        Ok(file)
    }
}

/// Drives a complete wizard session from a loaded file.
///
/// Walks the real session step by step, so all of its gating applies: a
/// file without a positive monthly salary fails the same way an empty
/// income form would.
pub fn run(file: WizardFile) -> Result<TaxSummary, WizardFileError> {
    let mut session = WizardSession::new();

    session.apply_income(file.income);
    session.advance()?;
    *session.family_mut() = file.family;
    session.advance()?;
    session.apply_funds(file.funds);
    session.advance()?;
    session.apply_insurance(file.insurance);
    session.advance()?;
    session.apply_other_funds(file.other_funds);
    session.advance()?;
    session.apply_donations(file.donations);
    session.advance()?;
    session.apply_withheld(file.withheld);

    let brackets = thai_schedule();
    let summary = session.calculate(&brackets)?.clone();
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn minimal_file_needs_only_a_salary() {
        let file: WizardFile = toml::from_str(
            r#"
            [income]
            salary_per_month = "25,000"
            "#,
        )
        .unwrap();

        let summary = run(file).unwrap();

        assert_eq!(summary.income_per_year, dec!(300000));
    }

    #[test]
    fn missing_salary_fails_the_income_gate() {
        let file = WizardFile::default();

        match run(file) {
            Err(WizardFileError::Wizard(WizardError::SalaryRequired)) => {}
            other => panic!("expected the salary gate, got {other:?}"),
        }
    }

    #[test]
    fn unknown_tables_are_rejected() {
        let result: Result<WizardFile, _> = toml::from_str("[salary]\nper_month = \"1\"");

        assert!(result.is_err());
    }

    #[test]
    fn family_table_deserializes_into_the_profile() {
        let file: WizardFile = toml::from_str(
            r#"
            [income]
            salary_per_month = "10000"

            [family]
            marital_status = "married_no_income"
            has_children = true
            child_count_from_2561 = "1"
            "#,
        )
        .unwrap();

        let summary = run(file).unwrap();

        // 60k personal + 60k spouse + 60k child: nothing taxable remains.
        assert_eq!(summary.total_deductions, dec!(180000));
        assert_eq!(summary.taxable_income, dec!(0));
    }
}
