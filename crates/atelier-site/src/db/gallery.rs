//! Gallery photo persistence. Operates on the `gallery` table.
//!
//! Tags are validated twice: [`GalleryTag`] makes invalid tags
//! unrepresentable in application code, and the CHECK constraint guards
//! the table against writes from outside the application.

use atelier_core::GalleryTag;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::state::PhotoRecord;

/// Insert a photo row, returning its id. `filename` is the public path
/// (`/static/gallery_uploads/<name>`), matching what templates render.
pub async fn insert(
    pool: &SqlitePool,
    filename: &str,
    tag: GalleryTag,
    created: DateTime<Utc>,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query("INSERT INTO gallery (filename, tag, created) VALUES ($1, $2, $3)")
        .bind(filename)
        .bind(tag.as_str())
        .bind(created)
        .execute(pool)
        .await?;

    Ok(result.last_insert_rowid())
}

/// All photos, newest first.
pub async fn list_recent(pool: &SqlitePool) -> Result<Vec<PhotoRecord>, sqlx::Error> {
    let rows = sqlx::query_as::<_, PhotoRow>(
        "SELECT id, filename, tag, created FROM gallery ORDER BY created DESC, id DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(PhotoRow::into_record).collect())
}

/// Fetch a single photo by id.
pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Option<PhotoRecord>, sqlx::Error> {
    let row = sqlx::query_as::<_, PhotoRow>(
        "SELECT id, filename, tag, created FROM gallery WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(PhotoRow::into_record))
}

/// Re-tag a photo. Returns whether a row was updated.
pub async fn update_tag(
    pool: &SqlitePool,
    id: i64,
    tag: GalleryTag,
) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE gallery SET tag = $1 WHERE id = $2")
        .bind(tag.as_str())
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Delete a photo row. Returns whether a row was removed.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM gallery WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Internal row type for sqlx mapping.
#[derive(sqlx::FromRow)]
struct PhotoRow {
    id: i64,
    filename: String,
    tag: String,
    created: DateTime<Utc>,
}

impl PhotoRow {
    fn into_record(self) -> PhotoRecord {
        // READ path: the CHECK constraint makes this unreachable through
        // the application; a hand-edited row falls back and is logged.
        let tag = self.tag.parse::<GalleryTag>().unwrap_or_else(|e| {
            tracing::error!(id = self.id, tag = %self.tag, error = %e,
                "invalid gallery tag in database — defaulting to experimental");
            GalleryTag::Experimental
        });

        PhotoRecord {
            id: self.id,
            filename: self.filename,
            tag,
            created: self.created,
        }
    }
}
