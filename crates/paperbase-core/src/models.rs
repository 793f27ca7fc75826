//! Data models for paperbase entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Coarse file kind detected at upload time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Pdf,
    Image,
    Other,
}

impl FileKind {
    /// Map a filename extension to a coarse kind.
    pub fn from_filename(filename: &str) -> Self {
        let ext = filename
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "pdf" => FileKind::Pdf,
            "png" | "jpg" | "jpeg" | "gif" | "tiff" | "bmp" | "webp" => FileKind::Image,
            _ => FileKind::Other,
        }
    }
}

/// An uploaded document. Created once at upload; immutable here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: Uuid,
    pub filename: String,
    pub size_bytes: i64,
    pub uploaded_at_utc: DateTime<Utc>,
    /// Locator in the external storage bucket.
    pub storage_key: String,
    pub owner_id: Uuid,
    pub kind: FileKind,
}

/// Extracted/indexed text for a document.
///
/// 1:1 with [`Document`], keyed by `document_id`. Re-processing overwrites
/// the row; there is never more than one per document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentRecord {
    pub document_id: Uuid,
    pub text: String,
    pub indexed_at_utc: DateTime<Utc>,
}

/// A canonical tag. Names are stored lowercase and are
/// case-insensitively unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: Uuid,
    pub name: String,
    pub created_at_utc: DateTime<Utc>,
}

/// Request for creating a new document record.
#[derive(Debug, Clone)]
pub struct CreateDocumentRequest {
    pub filename: String,
    pub size_bytes: i64,
    pub storage_key: String,
    pub owner_id: Uuid,
    pub kind: FileKind,
}

/// Response of the classification entry point.
///
/// Zero tags is a successful outcome, not an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResponse {
    pub document_id: Uuid,
    pub tags: Vec<String>,
    pub tag_count: usize,
}

/// Outcome of reconciling a document's tag set against the store.
#[derive(Debug, Clone, Default)]
pub struct ReconcileOutcome {
    /// Tag ids now linked to the document.
    pub tag_ids: Vec<Uuid>,
    /// Number of linked tags (== `tag_ids.len()`).
    pub count: usize,
    /// Tag names that failed to resolve and were dropped.
    pub skipped: Vec<String>,
}

/// A document under consideration for a search query.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub id: Uuid,
    pub filename: String,
    /// Indexed text, when a ContentRecord exists.
    pub text: Option<String>,
    pub uploaded_at_utc: DateTime<Utc>,
}

/// One ranked search result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: Uuid,
    pub filename: String,
    /// Relevance tier: 3 filename+text, 2 filename only, 1 text only.
    pub score: u8,
    /// Truncated indexed text, empty when no content exists.
    pub preview: String,
    pub has_content: bool,
}

/// Response of the search entry point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<SearchResult>,
    pub total_count: usize,
}
