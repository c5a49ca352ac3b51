//! # Validation Errors
//!
//! Structured validation errors built with `thiserror`. Each variant names
//! the field and the rule that failed so handlers can produce a precise
//! flash message without inspecting error strings.

use thiserror::Error;

/// Domain primitive validation failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The submitted string is not a plausible email address.
    #[error("invalid email address: {0:?}")]
    InvalidEmail(String),

    /// The submitted gallery tag is not one of the four permitted values.
    #[error("unknown gallery tag: {0:?} (expected nature, portraits, candids, or experimental)")]
    UnknownTag(String),

    /// A required field was empty after trimming.
    #[error("{field} must not be empty")]
    EmptyField {
        /// Name of the offending form field.
        field: &'static str,
    },

    /// A field exceeded its maximum length.
    #[error("{field} must not exceed {max} characters")]
    TooLong {
        /// Name of the offending form field.
        field: &'static str,
        /// Maximum permitted length in characters.
        max: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_field() {
        let err = ValidationError::EmptyField { field: "title" };
        assert_eq!(err.to_string(), "title must not be empty");

        let err = ValidationError::TooLong {
            field: "kind",
            max: 64,
        };
        assert!(err.to_string().contains("kind"));
        assert!(err.to_string().contains("64"));
    }

    #[test]
    fn unknown_tag_lists_expected_values() {
        let err = ValidationError::UnknownTag("landscape".to_string());
        let msg = err.to_string();
        assert!(msg.contains("landscape"));
        assert!(msg.contains("nature"));
    }
}
