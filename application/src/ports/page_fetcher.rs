//! Page fetcher port

use async_trait::async_trait;

/// Downloads raw page markup.
///
/// Fetching is best-effort: timeouts, non-success statuses and transport
/// errors all come back as `None` and the page is simply skipped.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Option<String>;
}
