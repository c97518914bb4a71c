pub mod calculations;
pub mod format;
pub mod models;
pub mod wizard;

pub use calculations::TaxEstimator;
pub use models::*;
pub use wizard::{WizardError, WizardSession, WizardStep};
