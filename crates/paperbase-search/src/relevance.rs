//! Tiered relevance scoring and ranking for document search.
//!
//! A candidate qualifies when the lowercased query appears as a
//! substring of its filename or indexed text (not token-based). The
//! match location determines an integer tier which is the primary sort
//! key; upload recency breaks ties.

use tracing::debug;

use paperbase_core::defaults::PREVIEW_CHARS;
use paperbase_core::{Candidate, SearchResult};

/// Score for a query matching both filename and indexed text.
pub const SCORE_NAME_AND_TEXT: u8 = 3;
/// Score for a filename-only match.
pub const SCORE_NAME_ONLY: u8 = 2;
/// Score for a text-only match.
pub const SCORE_TEXT_ONLY: u8 = 1;

/// Ranking configuration.
#[derive(Debug, Clone, Copy)]
pub struct RankConfig {
    /// Content preview length in characters.
    pub preview_chars: usize,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            preview_chars: PREVIEW_CHARS,
        }
    }
}

/// Compute the relevance tier for a candidate, or `None` when the
/// query matches neither filename nor text.
///
/// `query` must already be lowercased; the candidate's fields are
/// lowercased here.
pub fn relevance_score(query: &str, candidate: &Candidate) -> Option<u8> {
    let in_name = candidate.filename.to_lowercase().contains(query);
    let in_text = candidate
        .text
        .as_deref()
        .map(|text| text.to_lowercase().contains(query))
        .unwrap_or(false);

    match (in_name, in_text) {
        (true, true) => Some(SCORE_NAME_AND_TEXT),
        (true, false) => Some(SCORE_NAME_ONLY),
        (false, true) => Some(SCORE_TEXT_ONLY),
        (false, false) => None,
    }
}

/// Rank candidates against a query.
///
/// Ordering: score descending, then upload timestamp descending (most
/// recent first). The sort is stable, so equal score-and-timestamp
/// candidates keep their input order.
pub fn rank(query: &str, candidates: Vec<Candidate>, config: RankConfig) -> Vec<SearchResult> {
    let query = query.to_lowercase();

    let mut scored: Vec<(u8, chrono::DateTime<chrono::Utc>, SearchResult)> = candidates
        .into_iter()
        .filter_map(|candidate| {
            let score = relevance_score(&query, &candidate)?;
            let has_content = candidate.text.is_some();
            let preview = candidate
                .text
                .as_deref()
                .map(|text| truncate_chars(text, config.preview_chars))
                .unwrap_or_default();
            Some((
                score,
                candidate.uploaded_at_utc,
                SearchResult {
                    id: candidate.id,
                    filename: candidate.filename,
                    score,
                    preview,
                    has_content,
                },
            ))
        })
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| b.1.cmp(&a.1)));

    debug!(
        query = %query,
        result_count = scored.len(),
        "ranking complete"
    );

    scored.into_iter().map(|(_, _, result)| result).collect()
}

/// Char-boundary-safe truncation to at most `max_chars` characters.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}
