//! Supplemental keyword extraction from the frequency table.
//!
//! Picks high-frequency "meaningful" tokens the domain classifier did
//! not already choose, as extra tags.

use std::collections::HashMap;

use paperbase_core::defaults::{
    KEYWORD_MAX_LEN, KEYWORD_MIN_COUNT, KEYWORD_MIN_LEN, TOP_SUPPLEMENTAL_TAGS,
};

/// Select supplemental tags: tokens occurring at least twice, between 4
/// and 15 characters long, excluding already-chosen domain tags, ranked
/// by descending frequency (ties lexicographic for determinism), top 3.
pub fn extract_supplemental(freq: &HashMap<String, usize>, exclude: &[String]) -> Vec<String> {
    let mut candidates: Vec<(&str, usize)> = freq
        .iter()
        .filter(|(token, count)| {
            **count >= KEYWORD_MIN_COUNT
                && (KEYWORD_MIN_LEN..=KEYWORD_MAX_LEN).contains(&token.chars().count())
                && !exclude.iter().any(|tag| tag == *token)
        })
        .map(|(token, count)| (token.as_str(), *count))
        .collect();

    candidates.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    candidates.truncate(TOP_SUPPLEMENTAL_TAGS);

    candidates.into_iter().map(|(token, _)| token.to_string()).collect()
}
