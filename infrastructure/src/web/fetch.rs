//! Page fetcher over HTTP
//!
//! Best-effort downloads: anything other than a 2xx response with a
//! readable body is logged and reported as "no content".

use async_trait::async_trait;
use scout_application::PageFetcher;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, OwnedSemaphorePermit, Semaphore};
use tracing::debug;
use url::Url;

/// Settings for [`HttpPageFetcher`]
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub timeout: Duration,
    pub user_agent: String,
    pub max_redirects: usize,
    pub max_connections_per_host: usize,
}

impl FetchConfig {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            timeout: Duration::from_secs(10),
            user_agent: user_agent.into(),
            max_redirects: 10,
            max_connections_per_host: 50,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_redirects(mut self, max: usize) -> Self {
        self.max_redirects = max;
        self
    }

    pub fn with_max_connections_per_host(mut self, max: usize) -> Self {
        self.max_connections_per_host = max.max(1);
        self
    }
}

/// [`PageFetcher`] backed by `reqwest`, with a per-host concurrency cap
pub struct HttpPageFetcher {
    client: reqwest::Client,
    per_host: usize,
    hosts: Mutex<HashMap<String, Arc<Semaphore>>>,
}

impl HttpPageFetcher {
    pub fn new(config: FetchConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .build()?;
        Ok(Self {
            client,
            per_host: config.max_connections_per_host.max(1),
            hosts: Mutex::new(HashMap::new()),
        })
    }

    async fn host_permit(&self, host: &str) -> Option<OwnedSemaphorePermit> {
        let semaphore = {
            let mut hosts = self.hosts.lock().await;
            Arc::clone(
                hosts
                    .entry(host.to_string())
                    .or_insert_with(|| Arc::new(Semaphore::new(self.per_host))),
            )
        };
        semaphore.acquire_owned().await.ok()
    }

    /// Drop the host's semaphore once no fetch holds or waits on it.
    async fn release_host(&self, host: &str) {
        let mut hosts = self.hosts.lock().await;
        if hosts.get(host).is_some_and(|s| Arc::strong_count(s) == 1) {
            hosts.remove(host);
        }
    }

    async fn download(&self, url: Url) -> Option<String> {
        let shown = url.to_string();
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                debug!("Fetch failed for {}: {}", shown, e);
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            debug!("Fetch of {} returned HTTP {}", shown, status.as_u16());
            return None;
        }

        match response.text().await {
            Ok(body) => Some(body),
            Err(e) => {
                debug!("Failed to read body of {}: {}", shown, e);
                None
            }
        }
    }

    #[cfg(test)]
    async fn tracked_hosts(&self) -> usize {
        self.hosts.lock().await.len()
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Option<String> {
        let parsed = match Url::parse(url) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => parsed,
            Ok(parsed) => {
                debug!("Skipping {}: unsupported scheme '{}'", url, parsed.scheme());
                return None;
            }
            Err(e) => {
                debug!("Skipping {}: {}", url, e);
                return None;
            }
        };

        let Some(host) = parsed.host_str().map(str::to_ascii_lowercase) else {
            return self.download(parsed).await;
        };

        let permit = self.host_permit(&host).await;
        let body = self.download(parsed).await;
        drop(permit);
        self.release_host(&host).await;
        body
    }
}
