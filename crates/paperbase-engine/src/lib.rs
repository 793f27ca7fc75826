//! # paperbase-engine
//!
//! Entry-point services for paperbase: document classification
//! (content upsert → tag pipeline → reconcile) and query search
//! (candidate source → relevance ranking).
//!
//! File transport, text extraction, authentication, and REST framing
//! live outside this workspace; these services consume a document id
//! plus raw text, or a query string plus a candidate source.

pub mod classification;
pub mod search;

pub use classification::ClassificationService;
pub use search::SearchService;

// Re-export the types callers need alongside the services
pub use paperbase_classify::{ClassifierMode, ExternalClassifier, HttpClassifier};
pub use paperbase_core::{
    ClassificationResponse, Error, Result, SearchResponse, SearchResult,
};
pub use paperbase_search::RankConfig;
