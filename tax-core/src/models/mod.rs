mod family_profile;
mod marital_status;
mod tax_bracket;
mod tax_input;
mod tax_summary;

pub use family_profile::FamilyProfile;
pub use marital_status::MaritalStatus;
pub use tax_bracket::{TaxBracket, thai_schedule};
pub use tax_input::TaxInput;
pub use tax_summary::TaxSummary;
