//! Contact message persistence. Operates on the `messages` table.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::state::MessageRecord;

/// Insert a contact-form message.
pub async fn insert(
    pool: &SqlitePool,
    name: &str,
    email: &str,
    message: &str,
    created: DateTime<Utc>,
) -> Result<i64, sqlx::Error> {
    let result = sqlx::query(
        "INSERT INTO messages (name, email, message, created) VALUES ($1, $2, $3, $4)",
    )
    .bind(name)
    .bind(email)
    .bind(message)
    .bind(created)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// All messages, newest first.
pub async fn list_recent(pool: &SqlitePool) -> Result<Vec<MessageRecord>, sqlx::Error> {
    let rows = sqlx::query_as::<_, MessageRow>(
        "SELECT id, name, email, message, created FROM messages ORDER BY created DESC, id DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(MessageRow::into_record).collect())
}

/// Internal row type for sqlx mapping.
#[derive(sqlx::FromRow)]
struct MessageRow {
    id: i64,
    name: String,
    email: String,
    message: String,
    created: DateTime<Utc>,
}

impl MessageRow {
    fn into_record(self) -> MessageRecord {
        MessageRecord {
            id: self.id,
            name: self.name,
            email: self.email,
            message: self.message,
            created: self.created,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{init_pool, migrate};

    #[tokio::test]
    async fn insert_and_list_roundtrip() {
        let pool = init_pool("sqlite::memory:").await.unwrap();
        migrate(&pool).await.unwrap();

        insert(&pool, "Ana", "ana@example.com", "Hello there", Utc::now())
            .await
            .unwrap();

        let messages = list_recent(&pool).await.unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].name, "Ana");
        assert_eq!(messages[0].message, "Hello there");
    }
}
