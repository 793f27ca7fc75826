//! The search entry point.
//!
//! Pulls candidates from the configured source, ranks them, and
//! returns the ordered result list. An empty result list is success;
//! only a blank query or an unreachable candidate source fail.

use tracing::{info, instrument};

use paperbase_core::{CandidateSource, Error, Result, SearchResponse};
use paperbase_search::{rank, RankConfig};

/// Service wiring the relevance scorer to a candidate source.
pub struct SearchService<C> {
    source: C,
    config: RankConfig,
}

impl<C: CandidateSource> SearchService<C> {
    pub fn new(source: C) -> Self {
        Self {
            source,
            config: RankConfig::default(),
        }
    }

    /// Override the ranking configuration (preview length).
    pub fn with_config(mut self, config: RankConfig) -> Self {
        self.config = config;
        self
    }

    /// Rank all matching documents for a query.
    #[instrument(skip(self), fields(query = %query))]
    pub async fn search(&self, query: &str) -> Result<SearchResponse> {
        let query = query.trim();
        if query.is_empty() {
            return Err(Error::InvalidInput("query must not be empty".to_string()));
        }

        let candidates = self.source.candidates(query).await?;
        let results = rank(query, candidates, self.config);

        info!(result_count = results.len(), "search complete");

        Ok(SearchResponse {
            query: query.to_string(),
            total_count: results.len(),
            results,
        })
    }
}
