//! Document and content repository implementations.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Pool, Postgres, Row};
use uuid::Uuid;

use paperbase_core::{
    ContentRecord, ContentRepository, CreateDocumentRequest, Document, DocumentRepository, Error,
    FileKind, Result,
};

fn kind_to_str(kind: FileKind) -> &'static str {
    match kind {
        FileKind::Pdf => "pdf",
        FileKind::Image => "image",
        FileKind::Other => "other",
    }
}

fn kind_from_str(s: &str) -> FileKind {
    match s {
        "pdf" => FileKind::Pdf,
        "image" => FileKind::Image,
        _ => FileKind::Other,
    }
}

/// PostgreSQL implementation of DocumentRepository.
pub struct PgDocumentRepository {
    pool: Pool<Postgres>,
}

impl PgDocumentRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentRepository for PgDocumentRepository {
    async fn insert(&self, req: CreateDocumentRequest) -> Result<Uuid> {
        let id = Uuid::new_v4();
        sqlx::query(
            "INSERT INTO document
                 (id, filename, size_bytes, uploaded_at_utc, storage_key, owner_id, kind)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(id)
        .bind(&req.filename)
        .bind(req.size_bytes)
        .bind(Utc::now())
        .bind(&req.storage_key)
        .bind(req.owner_id)
        .bind(kind_to_str(req.kind))
        .execute(&self.pool)
        .await
        .map_err(Error::Database)?;
        Ok(id)
    }

    async fn fetch(&self, id: Uuid) -> Result<Document> {
        let row = sqlx::query(
            "SELECT id, filename, size_bytes, uploaded_at_utc, storage_key, owner_id, kind
             FROM document WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?
        .ok_or(Error::DocumentNotFound(id))?;

        let kind: String = row.get("kind");
        Ok(Document {
            id: row.get("id"),
            filename: row.get("filename"),
            size_bytes: row.get("size_bytes"),
            uploaded_at_utc: row.get("uploaded_at_utc"),
            storage_key: row.get("storage_key"),
            owner_id: row.get("owner_id"),
            kind: kind_from_str(&kind),
        })
    }

    async fn exists(&self, id: Uuid) -> Result<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM document WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await
                .map_err(Error::Database)?;
        Ok(exists)
    }
}

/// PostgreSQL implementation of ContentRepository.
///
/// `content` is keyed by `document_id`; the upsert guarantees at most
/// one row per document across re-processing.
pub struct PgContentRepository {
    pool: Pool<Postgres>,
}

impl PgContentRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentRepository for PgContentRepository {
    async fn upsert(&self, document_id: Uuid, text: &str) -> Result<()> {
        sqlx::query(
            "INSERT INTO content (document_id, text, indexed_at_utc) VALUES ($1, $2, $3)
             ON CONFLICT (document_id)
             DO UPDATE SET text = EXCLUDED.text, indexed_at_utc = EXCLUDED.indexed_at_utc",
        )
        .bind(document_id)
        .bind(text)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(Error::Database)?;
        Ok(())
    }

    async fn fetch(&self, document_id: Uuid) -> Result<Option<ContentRecord>> {
        let row = sqlx::query(
            "SELECT document_id, text, indexed_at_utc FROM content WHERE document_id = $1",
        )
        .bind(document_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?;

        Ok(row.map(|row| ContentRecord {
            document_id: row.get("document_id"),
            text: row.get("text"),
            indexed_at_utc: row.get("indexed_at_utc"),
        }))
    }
}
