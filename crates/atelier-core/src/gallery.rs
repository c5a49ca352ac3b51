//! # Gallery Tags
//!
//! The closed set of photo categories. Mirrors the `gallery.tag` CHECK
//! constraint — only these four strings are representable, so an invalid
//! tag is rejected before any SQL runs rather than bouncing off the
//! constraint.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Category assigned to each gallery photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryTag {
    /// Landscapes, wildlife, the outdoors.
    Nature,
    /// Posed or studio portraits.
    Portraits,
    /// Unposed street and event shots.
    Candids,
    /// Everything that doesn't fit the other three.
    Experimental,
}

impl GalleryTag {
    /// All tags, in display order. Used to render the tag `<select>`.
    pub const ALL: [GalleryTag; 4] = [
        GalleryTag::Nature,
        GalleryTag::Portraits,
        GalleryTag::Candids,
        GalleryTag::Experimental,
    ];

    /// Return the string stored in the `tag` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Nature => "nature",
            Self::Portraits => "portraits",
            Self::Candids => "candids",
            Self::Experimental => "experimental",
        }
    }
}

impl std::fmt::Display for GalleryTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for GalleryTag {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "nature" => Ok(Self::Nature),
            "portraits" => Ok(Self::Portraits),
            "candids" => Ok(Self::Candids),
            "experimental" => Ok(Self::Experimental),
            other => Err(ValidationError::UnknownTag(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_str() {
        for tag in GalleryTag::ALL {
            let parsed: GalleryTag = tag.as_str().parse().unwrap();
            assert_eq!(parsed, tag);
        }
    }

    #[test]
    fn parse_trims_whitespace() {
        let tag: GalleryTag = " nature ".parse().unwrap();
        assert_eq!(tag, GalleryTag::Nature);
    }

    #[test]
    fn rejects_unknown_tag() {
        let err = "landscape".parse::<GalleryTag>().unwrap_err();
        assert_eq!(err, ValidationError::UnknownTag("landscape".to_string()));
    }

    #[test]
    fn rejects_case_variants() {
        // The CHECK constraint is case-sensitive; so are we.
        assert!("Nature".parse::<GalleryTag>().is_err());
    }

    #[test]
    fn serde_uses_lowercase() {
        let json = serde_json::to_string(&GalleryTag::Candids).unwrap();
        assert_eq!(json, "\"candids\"");
        let tag: GalleryTag = serde_json::from_str("\"experimental\"").unwrap();
        assert_eq!(tag, GalleryTag::Experimental);
    }
}
