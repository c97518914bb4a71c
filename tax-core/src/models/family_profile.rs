use serde::{Deserialize, Serialize};

use crate::models::MaritalStatus;

/// Working state of the family wizard step.
///
/// Unlike the other steps, the family step collects structured answers
/// (status, checkboxes, head counts) rather than monetary amounts; the
/// session folds it into a single allowance figure when the step is left.
/// Count fields are free-text digit strings, consistent with every other
/// wizard field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FamilyProfile {
    pub marital_status: Option<MaritalStatus>,

    /// Allowance checkboxes for the taxpayer's own parents.
    pub parent_self_father: bool,
    pub parent_self_mother: bool,

    /// Allowance checkboxes for the spouse's parents.
    /// Counted only when the spouse has no income of their own.
    pub parent_spouse_father: bool,
    pub parent_spouse_mother: bool,

    pub has_children: bool,
    /// Children born before B.E. 2561.
    pub child_count_pre_2561: String,
    /// Children born in or after B.E. 2561.
    pub child_count_from_2561: String,

    /// Disabled or incapacitated dependents without income.
    /// At most one relative outside the immediate family qualifies.
    pub disabled_father: bool,
    pub disabled_mother: bool,
    pub disabled_relative: bool,
    pub disabled_child_count: String,
}
