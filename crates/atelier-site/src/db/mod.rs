//! # SQLite Persistence
//!
//! Pool construction, idempotent schema creation, and one module per
//! table. Every operation is a free async function taking `&SqlitePool` —
//! there is no repository object and no caching layer; handlers issue
//! single statements per request.
//!
//! Timestamps are written by the application (`Utc::now()`), not SQL
//! defaults, so they round-trip through sqlx losslessly.

pub mod gallery;
pub mod messages;
pub mod posts;
pub mod subscribers;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// Idempotent schema, executed on every startup.
///
/// `gallery.tag` carries the same CHECK constraint the application
/// enforces through `GalleryTag` — defense at both layers.
const SCHEMA: &str = "\
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS posts (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  title TEXT NOT NULL,
  kind TEXT NOT NULL DEFAULT 'Journal',
  body TEXT NOT NULL,
  image_url TEXT,
  created TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS subscribers (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  email TEXT NOT NULL UNIQUE,
  created TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS messages (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  name TEXT NOT NULL,
  email TEXT NOT NULL,
  message TEXT NOT NULL,
  created TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS gallery (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  filename TEXT NOT NULL,
  tag TEXT NOT NULL CHECK (tag IN ('nature','portraits','candids','experimental')),
  created TEXT NOT NULL
);
";

/// Open (and create if missing) the SQLite database behind the given URL.
///
/// In-memory databases are pinned to a single long-lived connection:
/// every pooled connection to `:memory:` would otherwise open its own
/// empty database.
pub async fn init_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool_options = if database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(5)
    };
    pool_options.connect_with(options).await
}

/// Create the tables if they do not exist yet.
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    Ok(())
}

/// Whether an error is a UNIQUE constraint violation — the one failure
/// the site handles specially (duplicate subscriber email).
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db_err)
            if db_err.kind() == sqlx::error::ErrorKind::UniqueViolation
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn migrate_is_idempotent() {
        let pool = init_pool("sqlite::memory:").await.unwrap();
        migrate(&pool).await.unwrap();
        migrate(&pool).await.unwrap();
    }

    #[tokio::test]
    async fn schema_enforces_gallery_tag_check() {
        let pool = init_pool("sqlite::memory:").await.unwrap();
        migrate(&pool).await.unwrap();

        let result = sqlx::query(
            "INSERT INTO gallery (filename, tag, created) VALUES ('x.jpg', 'landscape', 'now')",
        )
        .execute(&pool)
        .await;
        assert!(result.is_err(), "CHECK constraint should reject bad tags");
    }
}
