#![deny(missing_docs)]

//! # atelier-core — Foundational Types for the Atelier Portfolio Site
//!
//! This crate defines the domain primitives the site crate depends on. It
//! has no internal crate dependencies — only `serde` and `thiserror` from
//! the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** A subscriber email is an
//!    [`EmailAddress`], not a `String`. You cannot insert an unvalidated
//!    form field into the subscriber list.
//!
//! 2. **Closed enums where the schema is closed.** [`GalleryTag`] has
//!    exactly the four values the `gallery.tag` CHECK constraint permits.
//!    An unknown tag is rejected at parse time, before any SQL runs.
//!
//! 3. **[`ValidationError`] carries the field and the rule.** Handlers turn
//!    these into user-facing flash messages without string matching.

pub mod email;
pub mod error;
pub mod gallery;
pub mod post;

// Re-export primary types at crate root for ergonomic imports.
pub use email::EmailAddress;
pub use error::ValidationError;
pub use gallery::GalleryTag;
pub use post::PostKind;
