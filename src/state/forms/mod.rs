//! Wizard form domain layer

mod field;
pub mod lookup;
mod wizard_form;

pub use field::{FieldValue, FormField};
pub use wizard_form::{names, WizardForm};
