//! Retrieval stage
//!
//! Search, then fetch and clean every result page concurrently. Retrieval
//! never fails: a broken search backend or a dead page only shrinks the
//! result, down to an empty list.

use crate::ports::page_fetcher::PageFetcher;
use crate::ports::text_extractor::TextExtractor;
use crate::ports::web_search::WebSearch;
use scout_domain::core::string::truncate_chars;
use scout_domain::{PageResult, SearchQuery};
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Turns a search query into cleaned page texts
pub struct RetrievalStage {
    search: Arc<dyn WebSearch>,
    fetcher: Arc<dyn PageFetcher>,
    extractor: Arc<dyn TextExtractor>,
    max_page_chars: usize,
}

impl RetrievalStage {
    pub fn new(
        search: Arc<dyn WebSearch>,
        fetcher: Arc<dyn PageFetcher>,
        extractor: Arc<dyn TextExtractor>,
    ) -> Self {
        Self {
            search,
            fetcher,
            extractor,
            max_page_chars: 1000,
        }
    }

    pub fn with_max_page_chars(mut self, max: usize) -> Self {
        self.max_page_chars = max;
        self
    }

    /// Pages for `query`, in search-rank order, at most `max_results`.
    ///
    /// Pages that fail to download or clean to nothing are dropped.
    pub async fn retrieve(&self, query: &SearchQuery, max_results: usize) -> Vec<PageResult> {
        let urls = match self.search.search(query).await {
            Ok(urls) => urls,
            Err(e) => {
                warn!("Search failed for '{}': {}", query, e);
                return Vec::new();
            }
        };

        let urls: Vec<String> = urls.into_iter().take(max_results).collect();
        if urls.is_empty() {
            info!("Search returned no results for '{}'", query);
            return Vec::new();
        }
        debug!("Fetching {} pages", urls.len());

        let mut join_set = JoinSet::new();

        for (rank, url) in urls.into_iter().enumerate() {
            let fetcher = Arc::clone(&self.fetcher);
            let extractor = Arc::clone(&self.extractor);
            let max_chars = self.max_page_chars;

            join_set.spawn(async move {
                let page =
                    Self::fetch_page(fetcher.as_ref(), extractor.as_ref(), &url, max_chars).await;
                (rank, url, page)
            });
        }

        let mut pages = Vec::new();

        while let Some(result) = join_set.join_next().await {
            match result {
                Ok((rank, _, Some(page))) => pages.push((rank, page)),
                Ok((_, url, None)) => debug!("Skipping {}", url),
                Err(e) => warn!("Task join error: {}", e),
            }
        }

        // Completion order is arbitrary; restore search rank.
        pages.sort_by_key(|(rank, _)| *rank);
        info!("Retrieved {} pages for '{}'", pages.len(), query);
        pages.into_iter().map(|(_, page)| page).collect()
    }

    async fn fetch_page(
        fetcher: &dyn PageFetcher,
        extractor: &dyn TextExtractor,
        url: &str,
        max_chars: usize,
    ) -> Option<PageResult> {
        let markup = fetcher.fetch(url).await?;
        let text = extractor.extract(&markup);
        if text.trim().is_empty() {
            return None;
        }
        Some(PageResult::new(url, truncate_chars(&text, max_chars)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{MapFetcher, StaticSearch, TrimExtractor};
    use std::time::Duration;

    fn query() -> SearchQuery {
        SearchQuery::new("event X 2025 dates").unwrap()
    }

    fn stage(search: StaticSearch, fetcher: MapFetcher) -> RetrievalStage {
        RetrievalStage::new(Arc::new(search), Arc::new(fetcher), Arc::new(TrimExtractor))
    }

    #[tokio::test]
    async fn test_keeps_search_order() {
        let fetcher = MapFetcher::new()
            .slow_page("https://a.example", "page a", Duration::from_millis(50))
            .page("https://b.example", "page b")
            .page("https://c.example", "page c");
        let stage = stage(
            StaticSearch::new(&["https://a.example", "https://b.example", "https://c.example"]),
            fetcher,
        );

        let pages = stage.retrieve(&query(), 5).await;

        let urls: Vec<_> = pages.iter().map(|p| p.url.as_str()).collect();
        assert_eq!(
            urls,
            vec!["https://a.example", "https://b.example", "https://c.example"]
        );
    }

    #[tokio::test]
    async fn test_failed_pages_dropped() {
        let fetcher = MapFetcher::new()
            .page("https://a.example", "page a")
            .page("https://c.example", "   ");
        let stage = stage(
            StaticSearch::new(&["https://a.example", "https://b.example", "https://c.example"]),
            fetcher,
        );

        let pages = stage.retrieve(&query(), 5).await;

        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].url, "https://a.example");
        assert_eq!(pages[0].text, "page a");
    }

    #[tokio::test]
    async fn test_max_results_limits_fetches() {
        let fetcher = MapFetcher::new()
            .page("https://a.example", "a")
            .page("https://b.example", "b")
            .page("https://c.example", "c");
        let stage = stage(
            StaticSearch::new(&["https://a.example", "https://b.example", "https://c.example"]),
            fetcher,
        );

        let pages = stage.retrieve(&query(), 2).await;
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1].url, "https://b.example");
    }

    #[tokio::test]
    async fn test_search_failure_yields_empty() {
        let stage = stage(StaticSearch::failing(), MapFetcher::new());
        assert!(stage.retrieve(&query(), 5).await.is_empty());
    }

    #[tokio::test]
    async fn test_no_results_yields_empty() {
        let stage = stage(StaticSearch::new(&[]), MapFetcher::new());
        assert!(stage.retrieve(&query(), 5).await.is_empty());
    }

    #[tokio::test]
    async fn test_page_text_truncated() {
        let long = "x".repeat(50);
        let fetcher = MapFetcher::new().page("https://a.example", &long);
        let stage = stage(StaticSearch::new(&["https://a.example"]), fetcher)
            .with_max_page_chars(10);

        let pages = stage.retrieve(&query(), 5).await;
        assert_eq!(pages[0].text, format!("{}...", "x".repeat(10)));
    }
}
