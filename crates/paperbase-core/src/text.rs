//! Text normalization and token frequency counting.
//!
//! This is the first stage of the classification pipeline: raw extracted
//! text goes in, a cleaned token stream and a frequency table come out.
//! Splitting is ASCII/Latin word splitting only; multi-language
//! tokenization is out of scope.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Minimum kept token length in characters (tokens of length <= 2 drop).
pub const MIN_TOKEN_LEN: usize = 3;

/// Common English articles, conjunctions, pronouns, prepositions, and
/// auxiliary verbs dropped during normalization.
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "and", "for", "are", "but", "not", "you", "all", "any", "can", "had", "her", "was",
        "one", "our", "out", "has", "his", "how", "its", "may", "new", "now", "old", "see", "two",
        "way", "who", "did", "get", "him", "she", "too", "use", "that", "with", "have", "this",
        "will", "your", "from", "they", "been", "were", "said", "each", "which", "their", "there",
        "would", "could", "should", "about", "into", "over", "under", "then", "than", "them",
        "these", "those", "what", "when", "where", "while", "because", "being", "does", "doing",
        "such", "only", "other", "some", "very", "also", "just", "here", "both", "between",
        "after", "before", "during", "through", "against", "itself", "himself", "herself",
        "themselves", "ourselves",
    ]
    .into_iter()
    .collect()
});

/// Returns true if the token is in the fixed stop-word set.
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(token)
}

/// Normalize raw text into an ordered sequence of classification tokens.
///
/// Lowercases, splits on every non-alphanumeric character (which both
/// strips punctuation and collapses whitespace runs), then keeps tokens
/// that are longer than two characters, not purely numeric, and not
/// stop words.
///
/// Empty or whitespace-only input yields an empty sequence; downstream
/// stages treat that as "no tags", never as an error.
pub fn normalize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| token.chars().count() >= MIN_TOKEN_LEN)
        .filter(|token| !token.chars().all(|c| c.is_ascii_digit()))
        .filter(|token| !is_stop_word(token))
        .map(str::to_string)
        .collect()
}

/// Build a token -> occurrence count table over normalized tokens.
///
/// Counts are always >= 1. Iteration order is unspecified; callers that
/// need determinism apply their own tie-breaks.
pub fn frequency_table(tokens: &[String]) -> HashMap<String, usize> {
    let mut counts: HashMap<String, usize> = HashMap::with_capacity(tokens.len());
    for token in tokens {
        *counts.entry(token.clone()).or_insert(0) += 1;
    }
    counts
}
