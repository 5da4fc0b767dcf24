//! Form field value objects

use serde::Serialize;
use std::fmt;

/// Keys of the contact form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKey {
    Name,
    Email,
    Message,
}

impl FieldKey {
    /// All fields in display order
    pub const ALL: [FieldKey; 3] = [FieldKey::Name, FieldKey::Email, FieldKey::Message];

    /// Key used in validation messages and submission records
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a single text field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: String,
    pub value: String,
    pub is_multiline: bool,
}

impl FormField {
    /// Create a new, empty text field
    pub fn text(key: FieldKey, is_multiline: bool) -> Self {
        Self {
            label: key.label().to_string(),
            value: String::new(),
            is_multiline,
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    #[cfg(test)]
    pub fn set_text(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        if c == '\n' && !self.is_multiline {
            return;
        }
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }
}
