//! Blog post persistence. Operates on the `posts` table.

use atelier_core::PostKind;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::state::PostRecord;

/// Insert a new post, returning its row id.
pub async fn insert(
    pool: &SqlitePool,
    title: &str,
    kind: &PostKind,
    body: &str,
    image_url: Option<&str>,
    created: DateTime<Utc>,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO posts (title, kind, body, image_url, created) VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(title)
    .bind(kind.as_str())
    .bind(body)
    .bind(image_url)
    .bind(created)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// All posts, newest first. The id tiebreak keeps same-instant inserts stable.
pub async fn list_recent(pool: &SqlitePool) -> Result<Vec<PostRecord>, sqlx::Error> {
    let rows = sqlx::query_as::<_, PostRow>(
        "SELECT id, title, kind, body, image_url, created FROM posts
         ORDER BY created DESC, id DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(PostRow::into_record).collect())
}

/// Fetch a single post by id.
pub async fn get_by_id(pool: &SqlitePool, id: i64) -> Result<Option<PostRecord>, sqlx::Error> {
    let row = sqlx::query_as::<_, PostRow>(
        "SELECT id, title, kind, body, image_url, created FROM posts WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(PostRow::into_record))
}

/// Delete a post. Returns whether a row was removed.
pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("DELETE FROM posts WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Internal row type for sqlx mapping.
#[derive(sqlx::FromRow)]
struct PostRow {
    id: i64,
    title: String,
    kind: String,
    body: String,
    image_url: Option<String>,
    created: DateTime<Utc>,
}

impl PostRow {
    fn into_record(self) -> PostRecord {
        // READ path: a kind that fails validation (hand-edited database)
        // falls back to the schema default, logged for investigation.
        let kind = PostKind::new(&self.kind).unwrap_or_else(|e| {
            tracing::error!(id = self.id, kind = %self.kind, error = %e,
                "invalid post kind in database — defaulting to Journal");
            PostKind::default()
        });

        PostRecord {
            id: self.id,
            title: self.title,
            kind,
            body: self.body,
            image_url: self.image_url,
            created: self.created,
        }
    }
}
