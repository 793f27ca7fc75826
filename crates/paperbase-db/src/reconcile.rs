//! Tag reconciliation: resolve tag names to canonical records and
//! replace a document's full tag association set.
//!
//! Reconciling is idempotent at the document level: re-running with the
//! same names yields the same final link state however many times it is
//! invoked.

use tracing::{debug, warn};
use uuid::Uuid;

use paperbase_core::{ReconcileOutcome, Result, TagStore};

/// Reconciles a computed tag set against a [`TagStore`].
pub struct TagReconciler<S> {
    store: S,
}

impl<S: TagStore> TagReconciler<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Make `tag_names` the document's sole stored tag association set.
    ///
    /// Names are lowercased, trimmed, and deduplicated. Each name is
    /// resolved sequentially with find-or-create; a creation failure is
    /// recorded as a per-item outcome in `skipped` and processing
    /// continues with the remaining names. The resolved ids then
    /// replace the document's link set atomically; an empty resolved
    /// set is a valid, successful outcome leaving zero tags.
    pub async fn reconcile(
        &self,
        document_id: Uuid,
        tag_names: &[String],
    ) -> Result<ReconcileOutcome> {
        let names = normalize_names(tag_names);

        let mut tag_ids = Vec::with_capacity(names.len());
        let mut skipped = Vec::new();

        for name in &names {
            // Lookup failures are dependency failures and propagate;
            // a failed create only drops that one tag.
            let resolved = match self.store.find_by_name(name).await? {
                Some(tag) => Some(tag),
                None => match self.store.create(name).await {
                    Ok(tag) => Some(tag),
                    Err(e) => {
                        warn!(tag_name = %name, error = %e, "tag creation failed, skipping");
                        skipped.push(name.clone());
                        None
                    }
                },
            };
            if let Some(tag) = resolved {
                tag_ids.push(tag.id);
            }
        }

        self.store.replace_links(document_id, &tag_ids).await?;

        debug!(
            document_id = %document_id,
            tag_count = tag_ids.len(),
            skipped = skipped.len(),
            "reconcile complete"
        );

        let count = tag_ids.len();
        Ok(ReconcileOutcome {
            tag_ids,
            count,
            skipped,
        })
    }
}

/// Lowercase, trim, drop empties, deduplicate preserving first
/// occurrence order.
fn normalize_names(names: &[String]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    names
        .iter()
        .map(|name| name.trim().to_lowercase())
        .filter(|name| !name.is_empty())
        .filter(|name| seen.insert(name.clone()))
        .collect()
}
