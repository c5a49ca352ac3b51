//! # Keyword Search
//!
//! A naive linear substring scan over rows already fetched from the
//! database — the most complex algorithm this site has. Posts match on
//! title or body, photos on tag or filename, all lowercased. Input
//! ordering (newest first) is preserved.

use crate::state::{PhotoRecord, PostRecord};

/// Normalize raw query input: trim and lowercase.
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Posts whose title or body contains the (already normalized) query.
pub fn matching_posts(posts: Vec<PostRecord>, query: &str) -> Vec<PostRecord> {
    posts
        .into_iter()
        .filter(|post| {
            post.title.to_lowercase().contains(query) || post.body.to_lowercase().contains(query)
        })
        .collect()
}

/// Photos whose tag or filename contains the (already normalized) query.
pub fn matching_photos(photos: Vec<PhotoRecord>, query: &str) -> Vec<PhotoRecord> {
    photos
        .into_iter()
        .filter(|photo| {
            photo.tag.as_str().contains(query) || photo.filename.to_lowercase().contains(query)
        })
        .collect()
}
