//! Form domain layer
//!
//! Field values, the contact form, and the rules that validate it.

mod contact_form;
mod field;
mod validation;

pub use contact_form::{ContactForm, FormValues};
pub use field::{FieldKey, FormField};
pub use validation::{validate, ValidationError, ValidationErrors};
