//! # Post Kinds
//!
//! The free-form category label on a blog post ("Journal", "Essay", ...).
//! Unlike [`crate::GalleryTag`] this is an open set — the schema only
//! declares a default, not a constraint — so the type validates shape
//! (non-empty, bounded) rather than membership.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Maximum accepted kind length.
const MAX_LEN: usize = 64;

/// Validated post category label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostKind(String);

impl PostKind {
    /// Create a validated post kind from raw form input.
    pub fn new(raw: impl Into<String>) -> Result<Self, ValidationError> {
        let trimmed = raw.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyField { field: "kind" });
        }
        if trimmed.chars().count() > MAX_LEN {
            return Err(ValidationError::TooLong {
                field: "kind",
                max: MAX_LEN,
            });
        }
        Ok(Self(trimmed))
    }

    /// Parse form input, falling back to the schema default ("Journal")
    /// when the field is absent or blank.
    pub fn from_form(raw: Option<&str>) -> Result<Self, ValidationError> {
        match raw {
            Some(s) if !s.trim().is_empty() => Self::new(s),
            _ => Ok(Self::default()),
        }
    }

    /// Return the kind as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PostKind {
    fn default() -> Self {
        Self("Journal".to_string())
    }
}

impl std::fmt::Display for PostKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_and_trims() {
        let kind = PostKind::new("  Essay ").unwrap();
        assert_eq!(kind.as_str(), "Essay");
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(
            PostKind::new("   ").unwrap_err(),
            ValidationError::EmptyField { field: "kind" }
        );
    }

    #[test]
    fn rejects_over_length() {
        let err = PostKind::new("k".repeat(65)).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { field: "kind", .. }));
    }

    #[test]
    fn default_is_journal() {
        assert_eq!(PostKind::default().as_str(), "Journal");
    }

    #[test]
    fn from_form_blank_falls_back_to_default() {
        assert_eq!(PostKind::from_form(None).unwrap().as_str(), "Journal");
        assert_eq!(PostKind::from_form(Some("  ")).unwrap().as_str(), "Journal");
    }

    #[test]
    fn from_form_preserves_explicit_kind() {
        assert_eq!(
            PostKind::from_form(Some("Fieldnotes")).unwrap().as_str(),
            "Fieldnotes"
        );
    }
}
