//! # Email Addresses
//!
//! Validated, normalized subscriber email addresses. Normalization (trim +
//! lowercase) happens on construction so the `subscribers.email` UNIQUE
//! constraint compares canonical forms — `"Ana@Example.com"` and
//! `"ana@example.com "` are the same subscriber.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Maximum accepted email length. RFC 5321 path limit.
const MAX_LEN: usize = 254;

/// A normalized, shape-checked email address.
///
/// The check is deliberately naive — one `@` with a non-empty local part
/// and a domain containing a dot, no whitespace. This is a subscriber
/// list, not an identity system; the point is to reject obviously broken
/// input before it reaches the UNIQUE column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Parse and normalize an email address from raw form input.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let normalized = raw.as_ref().trim().to_lowercase();

        let invalid = || ValidationError::InvalidEmail(raw.as_ref().to_string());

        if normalized.is_empty() || normalized.len() > MAX_LEN {
            return Err(invalid());
        }
        if normalized.chars().any(char::is_whitespace) {
            return Err(invalid());
        }
        let (local, domain) = normalized.split_once('@').ok_or_else(invalid)?;
        if local.is_empty() || domain.is_empty() || domain.contains('@') {
            return Err(invalid());
        }
        if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
            return Err(invalid());
        }

        Ok(Self(normalized))
    }

    /// Return the normalized address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}
