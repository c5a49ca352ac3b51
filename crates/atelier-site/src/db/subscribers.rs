//! Subscriber list persistence. Operates on the `subscribers` table.
//!
//! The UNIQUE constraint on `email` is the deduplication mechanism;
//! callers detect the violation via [`crate::db::is_unique_violation`]
//! and report it to the visitor instead of treating it as a failure.

use atelier_core::EmailAddress;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::state::SubscriberRecord;

/// Insert a subscriber. A duplicate email surfaces as a database error
/// with [`sqlx::error::ErrorKind::UniqueViolation`].
pub async fn insert(
    pool: &SqlitePool,
    email: &EmailAddress,
    created: DateTime<Utc>,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO subscribers (email, created) VALUES ($1, $2)")
        .bind(email.as_str())
        .bind(created)
        .execute(pool)
        .await?;
    Ok(())
}

/// All subscribers, newest first.
pub async fn list_recent(pool: &SqlitePool) -> Result<Vec<SubscriberRecord>, sqlx::Error> {
    let rows = sqlx::query_as::<_, SubscriberRow>(
        "SELECT id, email, created FROM subscribers ORDER BY created DESC, id DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(SubscriberRow::into_record).collect())
}

/// Internal row type for sqlx mapping.
#[derive(sqlx::FromRow)]
struct SubscriberRow {
    id: i64,
    email: String,
    created: DateTime<Utc>,
}

impl SubscriberRow {
    fn into_record(self) -> SubscriberRecord {
        SubscriberRecord {
            id: self.id,
            email: self.email,
            created: self.created,
        }
    }
}
