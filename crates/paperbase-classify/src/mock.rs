//! Mock external classifier for deterministic testing.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use paperbase_core::{Error, Result};

use crate::external::ExternalClassifier;

/// One recorded call to the mock classifier.
#[derive(Debug, Clone)]
pub struct MockCall {
    pub prompt: String,
    pub vocabulary: Vec<String>,
}

/// Mock classifier returning a fixed tag list (or a fixed failure) and
/// logging every call for assertions.
#[derive(Clone, Default)]
pub struct MockClassifier {
    tags: Vec<String>,
    fail: bool,
    call_log: Arc<Mutex<Vec<MockCall>>>,
}

impl MockClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tags returned by every call.
    pub fn with_tags(mut self, tags: Vec<&str>) -> Self {
        self.tags = tags.into_iter().map(String::from).collect();
        self
    }

    /// Make every call fail with a request error.
    pub fn with_failure(mut self) -> Self {
        self.fail = true;
        self
    }

    /// All logged calls.
    pub fn calls(&self) -> Vec<MockCall> {
        self.call_log.lock().unwrap().clone()
    }

    /// Number of calls received.
    pub fn call_count(&self) -> usize {
        self.call_log.lock().unwrap().len()
    }
}

#[async_trait]
impl ExternalClassifier for MockClassifier {
    async fn suggest_tags(&self, prompt: &str, vocabulary: &[&str]) -> Result<Vec<String>> {
        self.call_log.lock().unwrap().push(MockCall {
            prompt: prompt.to_string(),
            vocabulary: vocabulary.iter().map(|s| s.to_string()).collect(),
        });

        if self.fail {
            return Err(Error::Request("mock classifier failure".to_string()));
        }
        Ok(self.tags.clone())
    }
}
