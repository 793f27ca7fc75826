//! Domain classification over the token frequency table.
//!
//! Two algorithms exist for the same responsibility and are kept
//! strictly separate; a deployment picks one via [`ClassifierMode`].
//! Weighted scoring is the canonical default: it produces a ranked
//! top-N that the boolean threshold mode cannot.

use std::collections::HashMap;

use tracing::debug;

use paperbase_core::defaults::{
    THRESHOLD_LARGE_DOMAIN, THRESHOLD_LARGE_MATCHES, TOP_DOMAIN_TAGS,
};

use crate::domains::{keyword_weight, DOMAIN_TABLE};

/// Which domain classification algorithm a deployment runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClassifierMode {
    /// Frequency-weighted scoring, ranked top-5. Canonical.
    #[default]
    Weighted,
    /// Boolean keyword-threshold membership, unordered set.
    Threshold,
}

/// Classify domains using the mode-appropriate algorithm.
///
/// `raw_text` feeds the threshold mode (substring membership over the
/// lowercased raw text); `freq` feeds the weighted mode. The two inputs
/// are never blended.
pub fn classify_domains(
    raw_text: &str,
    freq: &HashMap<String, usize>,
    mode: ClassifierMode,
) -> Vec<String> {
    match mode {
        ClassifierMode::Weighted => classify_weighted(freq),
        ClassifierMode::Threshold => classify_threshold(raw_text),
    }
}

/// Weighted scoring: per domain, sum `count × weight` over keywords
/// present in the frequency table. Domains with score > 0 rank
/// descending by score; ties keep table declaration order (stable
/// sort); top 5 win.
pub fn classify_weighted(freq: &HashMap<String, usize>) -> Vec<String> {
    let mut scored: Vec<(&'static str, usize)> = DOMAIN_TABLE
        .iter()
        .filter_map(|domain| {
            let score: usize = domain
                .keywords
                .iter()
                .filter_map(|kw| freq.get(*kw).map(|count| count * keyword_weight(kw)))
                .sum();
            (score > 0).then_some((domain.name, score))
        })
        .collect();

    // Stable sort: equal scores retain declaration order.
    scored.sort_by(|a, b| b.1.cmp(&a.1));
    scored.truncate(TOP_DOMAIN_TAGS);

    debug!(
        candidates = scored.len(),
        top = scored.first().map(|(name, _)| *name),
        "weighted domain classification complete"
    );

    scored.into_iter().map(|(name, _)| name.to_string()).collect()
}

/// Threshold membership: per domain, count keywords appearing as
/// case-insensitive substrings of the raw text. Domains with keyword
/// lists longer than five entries need two matches, smaller lists need
/// one. Result is the unordered qualifying set, in declaration order.
pub fn classify_threshold(raw_text: &str) -> Vec<String> {
    let lowered = raw_text.to_lowercase();
    if lowered.trim().is_empty() {
        return Vec::new();
    }

    DOMAIN_TABLE
        .iter()
        .filter(|domain| {
            let matched = domain
                .keywords
                .iter()
                .filter(|kw| lowered.contains(**kw))
                .count();
            let needed = if domain.keywords.len() > THRESHOLD_LARGE_DOMAIN {
                THRESHOLD_LARGE_MATCHES
            } else {
                1
            };
            matched >= needed
        })
        .map(|domain| domain.name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use paperbase_core::{frequency_table, normalize};

    fn freq_of(text: &str) -> HashMap<String, usize> {
        frequency_table(&normalize(text))
    }

    #[test]
    fn test_weighted_selects_invoice_domain() {
        let freq = freq_of("invoice invoice total payment billing");
        let domains = classify_weighted(&freq);
        assert_eq!(domains.first().map(String::as_str), Some("invoice"));
    }

    #[test]
    fn test_weighted_score_arithmetic() {
        // invoice x2 (weight 2) + total (weight 2) + payment (weight 2)
        // + billing (weight 2) = 10; no other domain scores.
        let freq = freq_of("invoice invoice total payment billing");
        let domains = classify_weighted(&freq);
        assert_eq!(domains, vec!["invoice".to_string()]);
    }

    #[test]
    fn test_weighted_ranks_by_score_descending() {
        // technology: software x3 (weight 2) = 6
        // finance: budget x1 (weight 2) = 2
        let freq = freq_of("software software software budget");
        let domains = classify_weighted(&freq);
        assert_eq!(domains, vec!["technology".to_string(), "finance".to_string()]);
    }

    #[test]
    fn test_weighted_tie_break_declaration_order() {
        // One weight-2 keyword each: technology declares before legal.
        let freq = freq_of("software contract");
        let domains = classify_weighted(&freq);
        assert_eq!(domains, vec!["technology".to_string(), "legal".to_string()]);
    }

    #[test]
    fn test_weighted_caps_at_five() {
        let freq = freq_of(
            "software budget invoice contract patient employee student campaign research flight",
        );
        let domains = classify_weighted(&freq);
        assert_eq!(domains.len(), 5);
    }

    #[test]
    fn test_weighted_empty_frequency_table() {
        let domains = classify_weighted(&HashMap::new());
        assert!(domains.is_empty());
    }

    #[test]
    fn test_threshold_invoice_two_matches_qualify() {
        // Invoice domain has 9 keywords (> 5), so two substring matches
        // are required; this text hits invoice, total, payment, billing.
        let domains = classify_threshold("invoice invoice total payment billing");
        assert!(domains.contains(&"invoice".to_string()));
    }

    #[test]
    fn test_threshold_single_match_insufficient_for_large_domain() {
        let domains = classify_threshold("please see the attached invoice");
        assert!(!domains.contains(&"invoice".to_string()));
    }

    #[test]
    fn test_threshold_substring_not_token_based() {
        // "billing" contains "bill", so both count as matches.
        let domains = classify_threshold("billing payment");
        assert!(domains.contains(&"invoice".to_string()));
    }

    #[test]
    fn test_threshold_case_insensitive() {
        let domains = classify_threshold("INVOICE with PAYMENT due");
        assert!(domains.contains(&"invoice".to_string()));
    }

    #[test]
    fn test_threshold_empty_text() {
        assert!(classify_threshold("").is_empty());
        assert!(classify_threshold("   ").is_empty());
    }

    #[test]
    fn test_mode_dispatch() {
        let text = "invoice invoice total payment billing";
        let freq = freq_of(text);

        let weighted = classify_domains(text, &freq, ClassifierMode::Weighted);
        let threshold = classify_domains(text, &freq, ClassifierMode::Threshold);
        assert!(weighted.contains(&"invoice".to_string()));
        assert!(threshold.contains(&"invoice".to_string()));
    }

    #[test]
    fn test_default_mode_is_weighted() {
        assert_eq!(ClassifierMode::default(), ClassifierMode::Weighted);
    }
}
