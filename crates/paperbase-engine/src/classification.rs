//! The classification entry point.
//!
//! Consumes a document id plus its extracted text, persists the
//! content record, computes the tag set, and reconciles it into the
//! store. Classification always succeeds unless a hard dependency
//! failure occurs; zero tags is a valid result.

use std::sync::Arc;

use tracing::{info, instrument};
use uuid::Uuid;

use paperbase_classify::{classify_text, ClassifierMode, ExternalClassifier};
use paperbase_core::{ClassificationResponse, ContentRepository, Error, Result, TagStore};
use paperbase_db::TagReconciler;

/// Service wiring the classification pipeline to storage.
pub struct ClassificationService<S, C> {
    reconciler: TagReconciler<S>,
    content: C,
    external: Option<Arc<dyn ExternalClassifier>>,
    mode: ClassifierMode,
}

impl<S: TagStore, C: ContentRepository> ClassificationService<S, C> {
    /// Create a local-only service with the canonical weighted mode.
    pub fn new(tag_store: S, content: C) -> Self {
        Self {
            reconciler: TagReconciler::new(tag_store),
            content,
            external: None,
            mode: ClassifierMode::default(),
        }
    }

    /// Attach an external classifier collaborator.
    pub fn with_external(mut self, external: Arc<dyn ExternalClassifier>) -> Self {
        self.external = Some(external);
        self
    }

    /// Override the domain classification mode.
    pub fn with_mode(mut self, mode: ClassifierMode) -> Self {
        self.mode = mode;
        self
    }

    /// Access the underlying reconciler (and through it, the store).
    pub fn reconciler(&self) -> &TagReconciler<S> {
        &self.reconciler
    }

    /// Access the content repository.
    pub fn content(&self) -> &C {
        &self.content
    }

    /// Classify a document's text and persist the resulting tag set.
    ///
    /// The content record is written even for empty text, so the
    /// document always ends up with exactly one ContentRecord. An
    /// empty tag set is success, not an error.
    #[instrument(skip(self, text), fields(document_id = %document_id, text_len = text.len()))]
    pub async fn classify_document(
        &self,
        document_id: Uuid,
        text: &str,
    ) -> Result<ClassificationResponse> {
        if document_id.is_nil() {
            return Err(Error::InvalidInput(
                "document id must not be nil".to_string(),
            ));
        }

        self.content.upsert(document_id, text).await?;

        let tags = classify_text(text, self.mode, self.external.as_deref()).await;
        let outcome = self.reconciler.reconcile(document_id, &tags).await?;

        // Report the tags that actually got linked, not the candidates.
        let linked: Vec<String> = tags
            .into_iter()
            .filter(|tag| !outcome.skipped.contains(tag))
            .collect();

        info!(
            tag_count = outcome.count,
            skipped = outcome.skipped.len(),
            "classification complete"
        );

        Ok(ClassificationResponse {
            document_id,
            tag_count: linked.len(),
            tags: linked,
        })
    }
}
