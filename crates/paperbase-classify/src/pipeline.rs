//! The local classification pipeline and the external merge step.
//!
//! Raw text → normalizer → frequency table → domain classifier →
//! supplemental keywords → capped local set → (optional) external
//! union. The pipeline never fails: degenerate input produces an empty
//! tag list.

use tracing::{debug, warn};

use paperbase_core::defaults::{EXTERNAL_MIN_TEXT_CHARS, MAX_LOCAL_TAGS};
use paperbase_core::{frequency_table, normalize};

use crate::classifier::{classify_domains, ClassifierMode};
use crate::domains::vocabulary;
use crate::external::{prompt_prefix, ExternalClassifier};
use crate::keywords::extract_supplemental;

/// Compute the local tag set for a document's text.
///
/// Domain tags take precedence; supplemental keywords fill the
/// remaining slots up to the 6-tag cap. Empty or meaningless input
/// yields an empty set.
pub fn classify_local(text: &str, mode: ClassifierMode) -> Vec<String> {
    let tokens = normalize(text);
    if tokens.is_empty() {
        debug!("no meaningful tokens, skipping classification");
        return Vec::new();
    }

    let freq = frequency_table(&tokens);
    let domain_tags = classify_domains(text, &freq, mode);
    let supplemental = extract_supplemental(&freq, &domain_tags);

    let mut tags = domain_tags;
    for keyword in supplemental {
        if tags.len() >= MAX_LOCAL_TAGS {
            break;
        }
        if !tags.contains(&keyword) {
            tags.push(keyword);
        }
    }
    tags.truncate(MAX_LOCAL_TAGS);

    debug!(
        token_count = tokens.len(),
        tag_count = tags.len(),
        "local classification complete"
    );
    tags
}

/// Merge externally suggested tags into the local set.
///
/// Case-insensitive union; the local cap is deliberately not re-applied
/// here, external signal is considered independently valuable.
pub fn merge_external(mut local: Vec<String>, external: Vec<String>) -> Vec<String> {
    for tag in external {
        let tag = tag.trim().to_lowercase();
        if tag.is_empty() {
            continue;
        }
        if !local.iter().any(|existing| existing == &tag) {
            local.push(tag);
        }
    }
    local
}

/// Full classification: local pipeline plus the optional external
/// collaborator.
///
/// The external call is skipped for short texts and degrades to
/// local-only tags on any failure; it never fails the operation.
pub async fn classify_text(
    text: &str,
    mode: ClassifierMode,
    external: Option<&dyn ExternalClassifier>,
) -> Vec<String> {
    let local = classify_local(text, mode);

    let Some(classifier) = external else {
        return local;
    };
    let char_count = text.chars().count();
    if char_count < EXTERNAL_MIN_TEXT_CHARS {
        debug!(char_count, "text too short for external classifier");
        return local;
    }

    match classifier.suggest_tags(prompt_prefix(text), &vocabulary()).await {
        Ok(suggested) => merge_external(local, suggested),
        Err(e) => {
            warn!(error = %e, "external classifier failed, using local tags only");
            local
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockClassifier;

    #[test]
    fn test_classify_local_empty_text() {
        assert!(classify_local("", ClassifierMode::Weighted).is_empty());
        assert!(classify_local("   \n", ClassifierMode::Weighted).is_empty());
    }

    #[test]
    fn test_classify_local_stop_words_only() {
        let tags = classify_local("the and was were 123 456", ClassifierMode::Weighted);
        assert!(tags.is_empty());
    }

    #[test]
    fn test_classify_local_domain_plus_supplemental() {
        let tags = classify_local(
            "invoice invoice total payment billing shipping shipping warehouse warehouse",
            ClassifierMode::Weighted,
        );
        assert_eq!(tags[0], "invoice");
        assert!(tags.contains(&"shipping".to_string()));
        assert!(tags.contains(&"warehouse".to_string()));
    }

    #[test]
    fn test_classify_local_respects_cap() {
        // Ten domains hit once each plus repeated filler keywords; the
        // combined set must not exceed six.
        let text = "software software budget budget invoice invoice contract contract \
                    patient patient employee employee student student campaign campaign \
                    research research flight flight";
        let tags = classify_local(text, ClassifierMode::Weighted);
        assert!(tags.len() <= 6, "got {} tags: {:?}", tags.len(), tags);
    }

    #[test]
    fn test_classify_local_five_domains_leave_one_supplemental_slot() {
        let text = "software budget invoice contract patient \
                    shipping shipping warehouse warehouse customs customs";
        let tags = classify_local(text, ClassifierMode::Weighted);
        assert_eq!(tags.len(), 6);
        // Five domain tags then exactly one supplemental.
        let supplemental: Vec<_> = tags
            .iter()
            .filter(|t| ["shipping", "warehouse", "customs"].contains(&t.as_str()))
            .collect();
        assert_eq!(supplemental.len(), 1);
    }

    #[test]
    fn test_merge_external_case_insensitive_union() {
        let merged = merge_external(
            vec!["invoice".to_string(), "finance".to_string()],
            vec!["Invoice".to_string(), "legal".to_string(), "  ".to_string()],
        );
        assert_eq!(merged, vec!["invoice", "finance", "legal"]);
    }

    #[test]
    fn test_merge_external_may_exceed_cap() {
        let local: Vec<String> = (0..6).map(|i| format!("local{}", i)).collect();
        let merged = merge_external(local, vec!["extra".to_string()]);
        assert_eq!(merged.len(), 7);
    }

    #[tokio::test]
    async fn test_classify_text_without_external() {
        let tags = classify_text(
            "invoice invoice total payment billing",
            ClassifierMode::Weighted,
            None,
        )
        .await;
        assert!(tags.contains(&"invoice".to_string()));
    }

    #[tokio::test]
    async fn test_classify_text_skips_external_for_short_text() {
        let mock = MockClassifier::new().with_tags(vec!["external"]);
        let tags = classify_text("invoice payment", ClassifierMode::Weighted, Some(&mock)).await;
        assert!(!tags.contains(&"external".to_string()));
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_classify_text_short_text_counts_chars_not_bytes() {
        // 60 chars but 120 bytes: still below the 100-char minimum.
        let mock = MockClassifier::new().with_tags(vec!["external"]);
        let text = "é".repeat(60);
        classify_text(&text, ClassifierMode::Weighted, Some(&mock)).await;
        assert_eq!(mock.call_count(), 0);
    }

    #[tokio::test]
    async fn test_classify_text_merges_external_tags() {
        let mock = MockClassifier::new().with_tags(vec!["Receipts", "invoice"]);
        let text = "invoice invoice total payment billing ".repeat(5);
        let tags = classify_text(&text, ClassifierMode::Weighted, Some(&mock)).await;
        assert!(tags.contains(&"invoice".to_string()));
        assert!(tags.contains(&"receipts".to_string()));
        // "invoice" suggested externally must not duplicate.
        assert_eq!(tags.iter().filter(|t| t.as_str() == "invoice").count(), 1);
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_classify_text_external_failure_degrades() {
        let mock = MockClassifier::new().with_failure();
        let text = "invoice invoice total payment billing ".repeat(5);
        let tags = classify_text(&text, ClassifierMode::Weighted, Some(&mock)).await;
        assert!(tags.contains(&"invoice".to_string()));
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_classify_text_bounds_external_prompt() {
        let mock = MockClassifier::new().with_tags(vec![]);
        let text = "invoice payment billing total subtotal ".repeat(200);
        classify_text(&text, ClassifierMode::Weighted, Some(&mock)).await;
        let calls = mock.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].prompt.chars().count() <= 2000);
        assert!(!calls[0].vocabulary.is_empty());
    }
}
