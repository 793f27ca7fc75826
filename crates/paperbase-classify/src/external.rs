//! External text-classification collaborator.
//!
//! An optional HTTP service can suggest additional tags for a bounded
//! prefix of the document text. Every failure path here degrades to
//! "no external tags"; nothing in this module may fail the overall
//! classification.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, warn};

use paperbase_core::defaults::{
    EXTERNAL_PROMPT_MAX_CHARS, EXTERNAL_TAG_MAX_LEN, EXTERNAL_TIMEOUT_SECS,
};
use paperbase_core::{Error, Result};

/// Environment variable naming the classifier endpoint. Unset means no
/// external classifier is configured.
pub const CLASSIFIER_URL_VAR: &str = "PAPERBASE_CLASSIFIER_URL";

/// Environment variable overriding the request timeout in seconds.
pub const CLASSIFIER_TIMEOUT_VAR: &str = "PAPERBASE_CLASSIFIER_TIMEOUT_SECS";

/// A collaborator that suggests tags for a text prefix.
#[async_trait]
pub trait ExternalClassifier: Send + Sync {
    /// Suggest tags for `prompt`, guided by the fixed classification
    /// vocabulary. A well-behaved implementation returns an empty list
    /// rather than an error for "nothing to suggest".
    async fn suggest_tags(&self, prompt: &str, vocabulary: &[&str]) -> Result<Vec<String>>;
}

/// HTTP-backed external classifier.
///
/// POSTs `{ "prompt": ..., "labels": [...] }` to `{base}/classify` and
/// expects a JSON array of short strings back. Any other body shape is
/// treated as "no tags".
pub struct HttpClassifier {
    client: Client,
    base_url: String,
}

impl HttpClassifier {
    /// Create a classifier against the given base URL with the default
    /// timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, EXTERNAL_TIMEOUT_SECS)
    }

    /// Create a classifier with an explicit request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Create from environment variables.
    ///
    /// Returns `None` when `PAPERBASE_CLASSIFIER_URL` is unset or
    /// empty, meaning classification runs local-only.
    pub fn from_env() -> Option<Self> {
        let base_url = match std::env::var(CLASSIFIER_URL_VAR) {
            Ok(val) if !val.is_empty() => val,
            _ => return None,
        };

        let timeout_secs = std::env::var(CLASSIFIER_TIMEOUT_VAR)
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(EXTERNAL_TIMEOUT_SECS);

        Some(Self::with_timeout(base_url, timeout_secs))
    }
}

#[async_trait]
impl ExternalClassifier for HttpClassifier {
    async fn suggest_tags(&self, prompt: &str, vocabulary: &[&str]) -> Result<Vec<String>> {
        let url = format!("{}/classify", self.base_url.trim_end_matches('/'));
        let body = json!({
            "prompt": prompt,
            "labels": vocabulary,
        });

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Request(format!("classifier request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Request(format!(
                "classifier returned status {}",
                status
            )));
        }

        let value: Value = match response.json().await {
            Ok(v) => v,
            Err(e) => {
                // Malformed body is a degraded success, not a failure.
                warn!(error = %e, "classifier response was not valid JSON");
                return Ok(Vec::new());
            }
        };

        let tags = parse_tag_list(&value);
        debug!(
            prompt_len = prompt.len(),
            tag_count = tags.len(),
            "external classifier responded"
        );
        Ok(tags)
    }
}

/// Parse a classifier response into tag strings.
///
/// Only a top-level JSON array of strings counts; anything else
/// (object, number, null, mixed array entries) yields no tags.
fn parse_tag_list(value: &Value) -> Vec<String> {
    let Some(items) = value.as_array() else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(Value::as_str)
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty() && s.len() <= EXTERNAL_TAG_MAX_LEN)
        .collect()
}

/// Char-boundary-safe prefix of at most [`EXTERNAL_PROMPT_MAX_CHARS`]
/// characters, sent to the classifier instead of the full text.
pub fn prompt_prefix(text: &str) -> &str {
    match text.char_indices().nth(EXTERNAL_PROMPT_MAX_CHARS) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_parse_tag_list_array_of_strings() {
        let value = json!(["Invoice", " finance ", "legal"]);
        assert_eq!(parse_tag_list(&value), vec!["invoice", "finance", "legal"]);
    }

    #[test]
    fn test_parse_tag_list_rejects_non_array() {
        assert!(parse_tag_list(&json!({"tags": ["a"]})).is_empty());
        assert!(parse_tag_list(&json!("just a string")).is_empty());
        assert!(parse_tag_list(&json!(null)).is_empty());
    }

    #[test]
    fn test_parse_tag_list_skips_non_string_entries() {
        let value = json!(["invoice", 42, null, "legal"]);
        assert_eq!(parse_tag_list(&value), vec!["invoice", "legal"]);
    }

    #[test]
    fn test_parse_tag_list_drops_empty_and_oversized() {
        let long = "x".repeat(EXTERNAL_TAG_MAX_LEN + 1);
        let value = json!(["", "  ", long, "ok"]);
        assert_eq!(parse_tag_list(&value), vec!["ok"]);
    }

    #[test]
    fn test_prompt_prefix_short_text_unchanged() {
        assert_eq!(prompt_prefix("short text"), "short text");
    }

    #[test]
    fn test_prompt_prefix_bounds_long_text() {
        let text = "a".repeat(EXTERNAL_PROMPT_MAX_CHARS * 2);
        assert_eq!(prompt_prefix(&text).len(), EXTERNAL_PROMPT_MAX_CHARS);
    }

    #[test]
    fn test_prompt_prefix_respects_char_boundaries() {
        let text = "é".repeat(EXTERNAL_PROMPT_MAX_CHARS + 10);
        let prefix = prompt_prefix(&text);
        assert_eq!(prefix.chars().count(), EXTERNAL_PROMPT_MAX_CHARS);
    }

    #[tokio::test]
    async fn test_http_classifier_happy_path() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/classify"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!(["invoice", "finance"])))
            .mount(&server)
            .await;

        let classifier = HttpClassifier::new(server.uri());
        let tags = classifier
            .suggest_tags("invoice text", &["invoice", "finance"])
            .await
            .unwrap();
        assert_eq!(tags, vec!["invoice", "finance"]);
    }

    #[tokio::test]
    async fn test_http_classifier_malformed_body_yields_no_tags() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/classify"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
            .mount(&server)
            .await;

        let classifier = HttpClassifier::new(server.uri());
        let tags = classifier.suggest_tags("text", &[]).await.unwrap();
        assert!(tags.is_empty());
    }

    #[tokio::test]
    async fn test_http_classifier_non_2xx_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/classify"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let classifier = HttpClassifier::new(server.uri());
        let result = classifier.suggest_tags("text", &[]).await;
        assert!(matches!(result, Err(Error::Request(_))));
    }
}
