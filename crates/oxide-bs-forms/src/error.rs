//! Error types for form building.

use std::collections::HashMap;
use thiserror::Error;

/// Form-builder errors.
///
/// Every variant points at a programming error in the calling view code,
/// so none of them are recovered from inside this crate.
#[derive(Debug, Error)]
pub enum FormError {
    /// Form-level settings that cannot be applied.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Select/radio options that cannot be turned into a key/label map.
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// A render call made with incomplete or contradictory field state.
    #[error("misuse: {0}")]
    Misuse(String),

    /// The URL resolver does not know the requested route.
    #[error("route not found: {0}")]
    UnknownRoute(String),
}

/// Collection of validation errors by field.
///
/// Holding one of these means a validation pass has run; an empty
/// collection marks every field as valid.
#[derive(Debug, Clone, Default)]
pub struct ValidationErrors {
    /// Errors keyed by field name.
    pub errors: HashMap<String, Vec<String>>,
}

impl ValidationErrors {
    /// Creates a new empty ValidationErrors.
    pub fn new() -> Self {
        Self {
            errors: HashMap::new(),
        }
    }

    /// Adds an error for a field.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Builder form of [`add`](Self::add).
    #[must_use]
    pub fn with(mut self, field: &str, message: impl Into<String>) -> Self {
        self.add(field, message);
        self
    }

    /// Returns the first error recorded for a field.
    pub fn first(&self, field: &str) -> Option<&str> {
        self.errors
            .get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_error_per_field() {
        let errors = ValidationErrors::new()
            .with("email", "Enter a valid email address.")
            .with("email", "This field is required.");

        assert_eq!(errors.first("email"), Some("Enter a valid email address."));
        assert_eq!(errors.first("name"), None);
    }

    #[test]
    fn test_error_messages() {
        let err = FormError::Misuse("no field kind set".into());
        assert_eq!(err.to_string(), "misuse: no field kind set");
    }
}
