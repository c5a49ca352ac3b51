//! # Application State & Record Types
//!
//! Shared state for the Axum application, passed to all route handlers via
//! the `State` extractor, plus the record types read from SQLite.
//!
//! There are no in-memory data stores here: every feature is a direct SQL
//! read or write against the pool. The only mutable state is the admin
//! session map.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use atelier_core::{GalleryTag, PostKind};

use crate::config::AppConfig;
use crate::session::SessionStore;

// ── Record Types ────────────────────────────────────────────────────────────

/// A blog post as read from the `posts` table.
#[derive(Debug, Clone)]
pub struct PostRecord {
    pub id: i64,
    pub title: String,
    pub kind: PostKind,
    pub body: String,
    /// Public path of the attached image (`/static/uploads/<name>`), if any.
    pub image_url: Option<String>,
    pub created: DateTime<Utc>,
}

/// How many characters of the body the blog index shows.
const EXCERPT_CHARS: usize = 240;

impl PostRecord {
    /// Body excerpt for the blog index, truncated on a character boundary.
    pub fn excerpt(&self) -> String {
        if self.body.chars().count() <= EXCERPT_CHARS {
            return self.body.clone();
        }
        let cut: String = self.body.chars().take(EXCERPT_CHARS).collect();
        format!("{}…", cut.trim_end())
    }
}

/// A gallery photo as read from the `gallery` table.
#[derive(Debug, Clone)]
pub struct PhotoRecord {
    pub id: i64,
    /// Public path of the image file (`/static/gallery_uploads/<name>`).
    pub filename: String,
    pub tag: GalleryTag,
    pub created: DateTime<Utc>,
}

/// A subscriber as read from the `subscribers` table.
///
/// The email was validated and normalized on the way in; reads carry it
/// as a plain string for display and export.
#[derive(Debug, Clone)]
pub struct SubscriberRecord {
    pub id: i64,
    pub email: String,
    pub created: DateTime<Utc>,
}

/// A contact-form message as read from the `messages` table.
#[derive(Debug, Clone)]
pub struct MessageRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created: DateTime<Utc>,
}

// ── Application State ───────────────────────────────────────────────────────

/// Shared application state accessible to all route handlers.
///
/// Clone-friendly: the pool and session store are handles over `Arc`
/// internals, and the config is small.
#[derive(Debug, Clone)]
pub struct AppState {
    /// SQLite connection pool. All persistence goes through here.
    pub pool: SqlitePool,
    /// Active admin sessions.
    pub sessions: SessionStore,
    /// Application configuration.
    pub config: AppConfig,
}

impl AppState {
    /// Assemble state from an initialized pool and configuration.
    pub fn new(pool: SqlitePool, config: AppConfig) -> Self {
        let sessions = SessionStore::new(config.session_ttl);
        Self {
            pool,
            sessions,
            config,
        }
    }
}
