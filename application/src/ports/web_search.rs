//! Web search port
//!
//! A search backend turns a [`SearchQuery`] into an ordered list of result
//! URLs. Ranking is the backend's business; callers keep the order.

use async_trait::async_trait;
use scout_domain::SearchQuery;
use thiserror::Error;

/// Errors from a search backend
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Search backend is not configured: {0}")]
    NotConfigured(String),

    #[error("Search request failed: {0}")]
    RequestFailed(String),

    #[error("Search returned HTTP {0}")]
    Status(u16),

    #[error("Search backend error: {0}")]
    Backend(String),

    #[error("Malformed search response: {0}")]
    MalformedResponse(String),

    #[error("Search timed out")]
    Timeout,
}

/// Web search backend
#[async_trait]
pub trait WebSearch: Send + Sync {
    /// Result URLs for `query`, best match first.
    async fn search(&self, query: &SearchQuery) -> Result<Vec<String>, SearchError>;
}
