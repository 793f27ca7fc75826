//! Core traits for paperbase storage collaborators.
//!
//! These traits define the interfaces that concrete implementations
//! must satisfy, enabling pluggable backends and testability. The core
//! never talks to a database client directly; it composes these
//! capability-set abstractions.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Candidate, ContentRecord, CreateDocumentRequest, Document, Tag};

/// Repository for document metadata.
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Insert a new document record, returning its id.
    async fn insert(&self, req: CreateDocumentRequest) -> Result<Uuid>;

    /// Fetch a document by id.
    async fn fetch(&self, id: Uuid) -> Result<Document>;

    /// Check whether a document exists.
    async fn exists(&self, id: Uuid) -> Result<bool>;
}

/// Repository for extracted document text.
///
/// A document has at most one content record; `upsert` overwrites any
/// existing row so re-processing never duplicates.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// Create or overwrite the content record for a document.
    async fn upsert(&self, document_id: Uuid, text: &str) -> Result<()>;

    /// Fetch the content record for a document, if any.
    async fn fetch(&self, document_id: Uuid) -> Result<Option<ContentRecord>>;
}

/// Storage collaborator for the shared tag vocabulary and the
/// document↔tag join table.
///
/// Tag names handed to this trait are already lowercased; lookups are
/// still case-insensitive so mixed-case rows from older data resolve.
#[async_trait]
pub trait TagStore: Send + Sync {
    /// Look up a tag by name, case-insensitively.
    async fn find_by_name(&self, name: &str) -> Result<Option<Tag>>;

    /// Create a tag, converging with concurrent creators.
    ///
    /// Implementations must treat a uniqueness violation as success and
    /// re-read the now-existing row (upsert-on-conflict semantics), so
    /// two operations introducing the same name both get the same id.
    async fn create(&self, name: &str) -> Result<Tag>;

    /// Atomically replace a document's full tag link set.
    ///
    /// Deletes all existing links for the document and inserts one link
    /// per given tag id in a single transaction. An empty id set is
    /// valid and leaves the document with zero tags.
    async fn replace_links(&self, document_id: Uuid, tag_ids: &[Uuid]) -> Result<()>;

    /// Tag ids currently linked to a document.
    async fn links_for_document(&self, document_id: Uuid) -> Result<Vec<Uuid>>;
}

/// Collaborator supplying search candidates for a query, e.g. backed by
/// a database ILIKE scan or a full-text index.
#[async_trait]
pub trait CandidateSource: Send + Sync {
    /// Documents whose filename or indexed text may match the query.
    ///
    /// Sources may over-approximate; the relevance scorer re-checks
    /// inclusion before ranking.
    async fn candidates(&self, query: &str) -> Result<Vec<Candidate>>;
}
