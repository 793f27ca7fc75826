//! Centralized default constants for the paperbase system.
//!
//! **This module is the single source of truth** for all shared default
//! values. All crates should reference these constants instead of
//! defining their own magic numbers.
//!
//! Organized by domain area. When adding new constants, place them in
//! the appropriate section and document the rationale for the chosen
//! value.

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Maximum number of domain tags selected by the weighted classifier.
pub const TOP_DOMAIN_TAGS: usize = 5;

/// Maximum number of supplemental frequency-derived tags.
pub const TOP_SUPPLEMENTAL_TAGS: usize = 3;

/// Cap on the combined local tag set (domain + supplemental).
///
/// The external merge step is allowed to exceed this; external signal
/// is considered independently valuable.
pub const MAX_LOCAL_TAGS: usize = 6;

/// Minimum occurrence count for a supplemental keyword.
pub const KEYWORD_MIN_COUNT: usize = 2;

/// Supplemental keyword length bounds (inclusive).
pub const KEYWORD_MIN_LEN: usize = 4;
pub const KEYWORD_MAX_LEN: usize = 15;

/// Threshold-mode match requirement for domains with large keyword
/// lists (more than [`THRESHOLD_LARGE_DOMAIN`] keywords).
pub const THRESHOLD_LARGE_MATCHES: usize = 2;

/// A domain keyword list is "large" above this many entries.
pub const THRESHOLD_LARGE_DOMAIN: usize = 5;

// =============================================================================
// EXTERNAL CLASSIFIER
// =============================================================================

/// Maximum characters of text sent to the external classifier.
pub const EXTERNAL_PROMPT_MAX_CHARS: usize = 2000;

/// Minimum input text length before the external classifier is worth
/// consulting; shorter texts classify locally only.
pub const EXTERNAL_MIN_TEXT_CHARS: usize = 100;

/// Timeout for the external classifier call (seconds). Expiry falls
/// back to local-only tags, never to a user-visible failure.
pub const EXTERNAL_TIMEOUT_SECS: u64 = 10;

/// Accepted length range for an external tag string after trimming.
pub const EXTERNAL_TAG_MAX_LEN: usize = 50;

// =============================================================================
// SEARCH
// =============================================================================

/// Default content preview length in characters for search results.
///
/// One configurable value; callers that want a different preview pass
/// their own `RankConfig`.
pub const PREVIEW_CHARS: usize = 200;

// =============================================================================
// TAGS
// =============================================================================

/// Maximum stored tag name length.
pub const TAG_NAME_MAX_LEN: usize = 100;
