//! # paperbase-db
//!
//! PostgreSQL storage layer for paperbase.
//!
//! This crate provides:
//! - Connection pool management
//! - Repository implementations for documents, content, and tags
//! - The tag reconciler (find-or-create + atomic link replacement)
//! - An ILIKE-backed search candidate source
//!
//! ## Example
//!
//! ```rust,ignore
//! use paperbase_db::{create_pool, PgTagStore, TagReconciler};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool("postgres://localhost/paperbase").await?;
//!     let reconciler = TagReconciler::new(PgTagStore::new(pool));
//!
//!     let outcome = reconciler
//!         .reconcile(document_id, &["invoice".to_string()])
//!         .await?;
//!     println!("linked {} tags", outcome.count);
//!     Ok(())
//! }
//! ```

pub mod candidates;
pub mod documents;
pub mod pool;
pub mod reconcile;
pub mod tags;

// In-memory fixtures, always compiled so integration tests and
// downstream crates can use them.
pub mod test_fixtures;

// Re-export core types
pub use paperbase_core::*;

/// Escape LIKE/ILIKE wildcard characters (`%`, `_`, `\`) in user input.
pub fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

// Re-export repository implementations
pub use candidates::PgCandidateSource;
pub use documents::{PgContentRepository, PgDocumentRepository};
pub use pool::{create_pool, create_pool_with_config, PoolConfig};
pub use reconcile::TagReconciler;
pub use tags::{validate_tag_name, PgTagStore};

/// Apply embedded schema migrations.
pub async fn run_migrations(pool: &sqlx::PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| Error::Internal(format!("migration failed: {}", e)))
}
