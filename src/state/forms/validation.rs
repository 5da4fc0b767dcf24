//! Contact form validation
//!
//! Every rule runs on every call; the result replaces any previous errors.

use super::contact_form::FormValues;
use super::field::FieldKey;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use thiserror::Error;

/// `local-part@domain.tld` sanity check, not RFC 5322.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Reason a single field is currently invalid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(FieldKey),
    #[error("email is invalid")]
    InvalidEmail,
}

/// Per-field validation messages; only failing fields are present
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<FieldKey, ValidationError>,
}

impl ValidationErrors {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, key: FieldKey) -> Option<&ValidationError> {
        self.errors.get(&key)
    }

    /// Failing fields in display order
    pub fn fields(&self) -> impl Iterator<Item = FieldKey> + '_ {
        self.errors.keys().copied()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &ValidationError)> {
        self.errors.iter().map(|(key, err)| (*key, err))
    }

    fn insert(&mut self, key: FieldKey, error: ValidationError) {
        self.errors.insert(key, error);
    }
}

/// Validate a snapshot of the form
pub fn validate(values: &FormValues) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if values.name.trim().is_empty() {
        errors.insert(FieldKey::Name, ValidationError::Required(FieldKey::Name));
    }

    if values.email.trim().is_empty() {
        errors.insert(FieldKey::Email, ValidationError::Required(FieldKey::Email));
    } else if !is_plausible_email(&values.email) {
        errors.insert(FieldKey::Email, ValidationError::InvalidEmail);
    }

    if values.message.trim().is_empty() {
        errors.insert(
            FieldKey::Message,
            ValidationError::Required(FieldKey::Message),
        );
    }

    errors
}

pub fn is_plausible_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(name: &str, email: &str, message: &str) -> FormValues {
        FormValues {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        }
    }

    mod messages {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_required_messages() {
            assert_eq!(
                ValidationError::Required(FieldKey::Name).to_string(),
                "name is required"
            );
            assert_eq!(
                ValidationError::Required(FieldKey::Email).to_string(),
                "email is required"
            );
            assert_eq!(
                ValidationError::Required(FieldKey::Message).to_string(),
                "message is required"
            );
        }

        #[test]
        fn test_invalid_email_message() {
            assert_eq!(ValidationError::InvalidEmail.to_string(), "email is invalid");
        }
    }

    mod rules {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_form_has_no_errors() {
            let errors = validate(&values("A", "a@b.co", "hi"));
            assert!(errors.is_valid());
            assert_eq!(errors.len(), 0);
        }

        #[test]
        fn test_all_empty_reports_every_field() {
            let errors = validate(&values("", "", ""));
            assert_eq!(
                errors.fields().collect::<Vec<_>>(),
                vec![FieldKey::Name, FieldKey::Email, FieldKey::Message]
            );
            assert_eq!(
                errors.get(FieldKey::Email),
                Some(&ValidationError::Required(FieldKey::Email))
            );
        }

        #[test]
        fn test_blank_fields_are_required() {
            let errors = validate(&values("   ", " \t", "\n\n"));
            assert_eq!(
                errors.get(FieldKey::Name),
                Some(&ValidationError::Required(FieldKey::Name))
            );
            assert_eq!(
                errors.get(FieldKey::Email),
                Some(&ValidationError::Required(FieldKey::Email))
            );
            assert_eq!(
                errors.get(FieldKey::Message),
                Some(&ValidationError::Required(FieldKey::Message))
            );
        }

        #[test]
        fn test_only_name_missing() {
            let errors = validate(&values("", "x@y.com", "hi"));
            assert_eq!(errors.len(), 1);
            assert_eq!(
                errors.get(FieldKey::Name),
                Some(&ValidationError::Required(FieldKey::Name))
            );
        }

        #[test]
        fn test_invalid_email_reported_alongside_other_errors() {
            let errors = validate(&values("", "not-an-email", ""));
            assert_eq!(errors.len(), 3);
            assert_eq!(
                errors.get(FieldKey::Email),
                Some(&ValidationError::InvalidEmail)
            );
        }

        #[test]
        fn test_invalid_email_with_otherwise_valid_form() {
            let errors = validate(&values("Ana", "ana@municipio", "hola"));
            assert_eq!(
                errors.iter().collect::<Vec<_>>(),
                vec![(FieldKey::Email, &ValidationError::InvalidEmail)]
            );
        }

        #[test]
        fn test_validation_is_pure() {
            let form = values("", "bad", "ok");
            assert_eq!(validate(&form), validate(&form));
        }
    }

    mod email_shape {
        use super::*;

        #[test]
        fn test_accepts_simple_addresses() {
            for email in ["a@b.co", "vecino@cholchol.cl", "first.last@mail.example.org"] {
                assert!(is_plausible_email(email), "{email} should pass");
            }
        }

        #[test]
        fn test_rejects_malformed_addresses() {
            for email in [
                "plain",
                "@b.co",
                "a@",
                "a@b",
                "a@.",
                "a b@c.d",
                "a@b c.d",
                "a@@b.co",
                " a@b.co",
                "a@b.co ",
            ] {
                assert!(!is_plausible_email(email), "{email:?} should fail");
            }
        }

        #[test]
        fn test_keeps_heuristic_leniency() {
            // Not RFC 5322: these shapes are accepted on purpose.
            assert!(is_plausible_email("a@b.c.d"));
            assert!(is_plausible_email("!#$@x.y"));
        }
    }
}
