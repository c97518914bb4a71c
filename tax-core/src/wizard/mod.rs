//! The eight-step wizard session.
//!
//! The wizard walks linearly through seven data-entry steps and a read-only
//! summary. Each data-entry step owns a disjoint slice of the input record
//! and edits it through a shallow-merge patch; the session owns the full
//! record, tracks which steps have been visited, and runs the estimator
//! exactly once when the last data-entry step is confirmed. Nothing in a
//! session is ever persisted: completing or resetting it discards the
//! accumulated input.

mod patches;
mod session;
mod step;

pub use patches::{
    DonationsPatch, FundsPatch, IncomePatch, InsurancePatch, OtherFundsPatch, WithheldPatch,
};
pub use session::{WizardError, WizardSession};
pub use step::WizardStep;
