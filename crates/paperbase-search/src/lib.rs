//! # paperbase-search
//!
//! Query relevance scoring and result ranking for paperbase.
//!
//! Candidates come from a [`paperbase_core::CandidateSource`]
//! collaborator (e.g. a database ILIKE scan); this crate re-checks
//! inclusion, assigns the 1–3 relevance tier, and produces the total
//! ordering the search entry point returns.
//!
//! ## Example
//!
//! ```
//! use paperbase_search::{rank, RankConfig};
//! use paperbase_core::Candidate;
//! use chrono::Utc;
//! use uuid::Uuid;
//!
//! let candidates = vec![Candidate {
//!     id: Uuid::new_v4(),
//!     filename: "annual_report.pdf".to_string(),
//!     text: Some("full report text".to_string()),
//!     uploaded_at_utc: Utc::now(),
//! }];
//! let results = rank("report", candidates, RankConfig::default());
//! assert_eq!(results[0].score, 3);
//! ```

pub mod relevance;

// Re-export core types
pub use paperbase_core::{Candidate, Error, Result, SearchResponse, SearchResult};

pub use relevance::{
    rank, relevance_score, RankConfig, SCORE_NAME_AND_TEXT, SCORE_NAME_ONLY, SCORE_TEXT_ONLY,
};
