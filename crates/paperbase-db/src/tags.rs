//! Tag store implementation.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Pool, Postgres, Row};
use uuid::Uuid;

use paperbase_core::defaults::TAG_NAME_MAX_LEN;
use paperbase_core::{Error, Result, Tag, TagStore};

/// Validate a tag name.
///
/// Rules:
/// - Length between 1-100 characters
/// - Must contain at least one non-whitespace character
///
/// Returns Ok(()) if valid, Err with message if invalid.
pub fn validate_tag_name(tag: &str) -> std::result::Result<(), String> {
    if tag.trim().is_empty() {
        return Err("Tag name cannot be empty".to_string());
    }
    if tag.len() > TAG_NAME_MAX_LEN {
        return Err(format!(
            "Tag name must be {} characters or less",
            TAG_NAME_MAX_LEN
        ));
    }
    Ok(())
}

/// PostgreSQL implementation of TagStore.
///
/// The `tag` table carries a unique index on `name`; names are written
/// lowercase so the index enforces case-insensitive uniqueness.
pub struct PgTagStore {
    pool: Pool<Postgres>,
}

impl PgTagStore {
    /// Create a new PgTagStore with the given connection pool.
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagStore for PgTagStore {
    async fn find_by_name(&self, name: &str) -> Result<Option<Tag>> {
        let row = sqlx::query(
            "SELECT id, name, created_at_utc FROM tag WHERE LOWER(name) = LOWER($1)",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(row.map(|row| Tag {
            id: row.get("id"),
            name: row.get("name"),
            created_at_utc: row.get("created_at_utc"),
        }))
    }

    async fn create(&self, name: &str) -> Result<Tag> {
        validate_tag_name(name).map_err(Error::InvalidInput)?;
        let normalized = name.trim().to_lowercase();
        let now = Utc::now();

        // ON CONFLICT DO NOTHING then re-read: two operations creating
        // the same name concurrently both converge on the single row.
        sqlx::query(
            "INSERT INTO tag (id, name, created_at_utc) VALUES ($1, $2, $3)
             ON CONFLICT (name) DO NOTHING",
        )
        .bind(Uuid::new_v4())
        .bind(&normalized)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(Error::Database)?;

        self.find_by_name(&normalized)
            .await?
            .ok_or_else(|| Error::Internal(format!("tag '{}' missing after upsert", normalized)))
    }

    async fn replace_links(&self, document_id: Uuid, tag_ids: &[Uuid]) -> Result<()> {
        let mut tx = self.pool.begin().await.map_err(Error::Database)?;

        // Full replacement: stale tags from a previous text version
        // must not survive a re-tag.
        sqlx::query("DELETE FROM document_tag WHERE document_id = $1")
            .bind(document_id)
            .execute(&mut *tx)
            .await
            .map_err(Error::Database)?;

        for tag_id in tag_ids {
            sqlx::query(
                "INSERT INTO document_tag (document_id, tag_id) VALUES ($1, $2)
                 ON CONFLICT (document_id, tag_id) DO NOTHING",
            )
            .bind(document_id)
            .bind(tag_id)
            .execute(&mut *tx)
            .await
            .map_err(Error::Database)?;
        }

        tx.commit().await.map_err(Error::Database)?;
        Ok(())
    }

    async fn links_for_document(&self, document_id: Uuid) -> Result<Vec<Uuid>> {
        let rows = sqlx::query(
            "SELECT tag_id FROM document_tag WHERE document_id = $1 ORDER BY tag_id",
        )
        .bind(document_id)
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(rows.into_iter().map(|row| row.get("tag_id")).collect())
    }
}
