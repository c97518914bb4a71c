//! Tax computation modules for the Thai personal income tax wizard.
//!
//! Everything in here is pure arithmetic over normalized amounts; the wizard
//! session in [`crate::wizard`] owns the state and invokes these once per
//! completed flow.

pub mod common;
pub mod estimator;
pub mod family;

pub use estimator::TaxEstimator;
