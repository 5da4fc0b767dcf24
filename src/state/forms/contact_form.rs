//! Contact form state

use super::field::{FieldKey, FormField};
use super::validation::{ValidationError, ValidationErrors};
use serde::Serialize;

/// Snapshot of the field values, as validated and recorded
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormValues {
    #[cfg(test)]
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

/// The contact form: three text fields plus the errors of the last validation
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: FormField,
    pub email: FormField,
    pub message: FormField,
    errors: ValidationErrors,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text(FieldKey::Name, false),
            email: FormField::text(FieldKey::Email, false),
            message: FormField::text(FieldKey::Message, true),
            errors: ValidationErrors::default(),
        }
    }

    pub fn field(&self, key: FieldKey) -> &FormField {
        match key {
            FieldKey::Name => &self.name,
            FieldKey::Email => &self.email,
            FieldKey::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, key: FieldKey) -> &mut FormField {
        match key {
            FieldKey::Name => &mut self.name,
            FieldKey::Email => &mut self.email,
            FieldKey::Message => &mut self.message,
        }
    }

    pub fn values(&self) -> FormValues {
        FormValues {
            name: self.name.value.clone(),
            email: self.email.value.clone(),
            message: self.message.value.clone(),
        }
    }

    /// Load all three values at once
    #[cfg(test)]
    pub fn fill(&mut self, values: &FormValues) {
        self.name.set_text(values.name.as_str());
        self.email.set_text(values.email.as_str());
        self.message.set_text(values.message.as_str());
    }

    #[cfg(test)]
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn error_for(&self, key: FieldKey) -> Option<&ValidationError> {
        self.errors.get(key)
    }

    /// Replace the errors wholesale with a fresh validation result
    pub fn set_errors(&mut self, errors: ValidationErrors) {
        self.errors = errors;
    }

    /// Clear every field and every error
    pub fn reset(&mut self) {
        for key in FieldKey::ALL {
            self.field_mut(key).clear();
        }
        self.errors = ValidationErrors::default();
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}
