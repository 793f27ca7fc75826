//! Search candidate source backed by a PostgreSQL ILIKE scan.

use async_trait::async_trait;
use sqlx::{Pool, Postgres, Row};

use paperbase_core::{Candidate, CandidateSource, Error, Result};

use crate::escape_like;

/// Candidate source scanning documents and their indexed text.
///
/// Over-approximation is fine here; the relevance scorer re-checks
/// inclusion before ranking.
pub struct PgCandidateSource {
    pool: Pool<Postgres>,
}

impl PgCandidateSource {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CandidateSource for PgCandidateSource {
    async fn candidates(&self, query: &str) -> Result<Vec<Candidate>> {
        let pattern = format!("%{}%", escape_like(query));

        let rows = sqlx::query(
            r#"
            SELECT
                d.id,
                d.filename,
                d.uploaded_at_utc,
                c.text
            FROM document d
            LEFT JOIN content c ON c.document_id = d.id
            WHERE d.filename ILIKE $1 OR c.text ILIKE $1
            ORDER BY d.uploaded_at_utc DESC
            "#,
        )
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(rows
            .into_iter()
            .map(|row| Candidate {
                id: row.get("id"),
                filename: row.get("filename"),
                text: row.get("text"),
                uploaded_at_utc: row.get("uploaded_at_utc"),
            })
            .collect())
    }
}
