//! Route handlers, grouped by surface. Each submodule exposes a
//! `router()` merged into the application in [`crate::app`].

pub mod admin;
pub mod blog;
pub mod gallery;
pub mod pages;
pub mod search;
pub mod subscribe;
