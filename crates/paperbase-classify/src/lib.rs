//! # paperbase-classify
//!
//! Document text classification for paperbase.
//!
//! This crate provides:
//! - The fixed domain-keyword configuration table
//! - Frequency-weighted and keyword-threshold domain classifiers
//! - Supplemental high-frequency keyword extraction
//! - The optional external classifier collaborator (HTTP + mock)
//! - The end-to-end classification pipeline
//!
//! ## Example
//!
//! ```
//! use paperbase_classify::{classify_local, ClassifierMode};
//!
//! let tags = classify_local(
//!     "invoice invoice total payment billing",
//!     ClassifierMode::Weighted,
//! );
//! assert!(tags.contains(&"invoice".to_string()));
//! ```

pub mod classifier;
pub mod domains;
pub mod external;
pub mod keywords;
pub mod mock;
pub mod pipeline;

// Re-export core types
pub use paperbase_core::{Error, Result};

// Re-export the classification surface
pub use classifier::{classify_domains, classify_threshold, classify_weighted, ClassifierMode};
pub use domains::{keyword_weight, vocabulary, Domain, DOMAIN_TABLE};
pub use external::{prompt_prefix, ExternalClassifier, HttpClassifier};
pub use keywords::extract_supplemental;
pub use mock::MockClassifier;
pub use pipeline::{classify_local, classify_text, merge_external};
