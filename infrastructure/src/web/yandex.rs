//! Yandex XML search client
//!
//! Implements [`WebSearch`] against the Yandex XML API:
//!
//! ```text
//! GET <endpoint>?folderid=..&apikey=..&query=..&sortby=rlv
//!     &groupby=attr=d.mode=deep.groups-on-page=10.docs-in-group=1
//! ```
//!
//! The response is XML; result URLs are the text of every
//! `group/doc/url` element, in document order. An `<error>` element means
//! the request was refused, except code 15, which is "nothing found".

use async_trait::async_trait;
use quick_xml::events::Event;
use scout_application::{SearchError, WebSearch};
use scout_domain::SearchQuery;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Yandex error code for an empty result set
const NO_RESULTS_CODE: &str = "15";

/// Grouping parameter: one document per site group, ten groups
const GROUP_BY: &str = "attr=d.mode=deep.groups-on-page=10.docs-in-group=1";

/// Errors from the Yandex XML API
#[derive(Error, Debug)]
pub enum YandexError {
    #[error("HTTP client error: {0}")]
    ClientBuild(String),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Request timeout")]
    Timeout,

    #[error("HTTP {0}")]
    Status(u16),

    #[error("Yandex error {code}: {message}")]
    Api { code: String, message: String },

    #[error("Malformed XML: {0}")]
    Xml(String),
}

impl From<reqwest::Error> for YandexError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            YandexError::Timeout
        } else {
            YandexError::Request(e.to_string())
        }
    }
}

impl From<YandexError> for SearchError {
    fn from(e: YandexError) -> Self {
        match e {
            YandexError::Timeout => SearchError::Timeout,
            YandexError::Status(status) => SearchError::Status(status),
            YandexError::Xml(msg) => SearchError::MalformedResponse(msg),
            other @ YandexError::Api { .. } => SearchError::Backend(other.to_string()),
            other => SearchError::RequestFailed(other.to_string()),
        }
    }
}

/// Connection settings for [`YandexSearchClient`]
#[derive(Debug, Clone)]
pub struct YandexSearchConfig {
    pub endpoint: String,
    pub folder_id: String,
    pub api_key: String,
    /// Ceiling on one search call
    pub timeout: Duration,
}

impl YandexSearchConfig {
    pub fn new(
        endpoint: impl Into<String>,
        folder_id: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            folder_id: folder_id.into(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(15),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn has_credentials(&self) -> bool {
        !self.folder_id.is_empty() && !self.api_key.is_empty()
    }
}

/// Web search through the Yandex XML API
pub struct YandexSearchClient {
    config: YandexSearchConfig,
    client: reqwest::Client,
}

impl YandexSearchClient {
    pub fn new(config: YandexSearchConfig) -> Result<Self, YandexError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| YandexError::ClientBuild(e.to_string()))?;
        Ok(Self { config, client })
    }

    async fn request(&self, query: &str) -> Result<Vec<String>, YandexError> {
        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&[
                ("folderid", self.config.folder_id.as_str()),
                ("apikey", self.config.api_key.as_str()),
                ("query", query),
                ("sortby", "rlv"),
                ("groupby", GROUP_BY),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(YandexError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        parse_results(&body)
    }
}

#[async_trait]
impl WebSearch for YandexSearchClient {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<String>, SearchError> {
        if !self.config.has_credentials() {
            return Err(SearchError::NotConfigured(
                "Yandex folder id and API key are required".to_string(),
            ));
        }

        let urls = self.request(query.as_str()).await?;
        info!("Search '{}' returned {} results", query, urls.len());
        Ok(urls)
    }
}

/// Result URLs from a Yandex XML response body.
pub fn parse_results(xml: &str) -> Result<Vec<String>, YandexError> {
    let mut reader = quick_xml::Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    let mut buf = Vec::new();

    let mut path: Vec<String> = Vec::new();
    let mut urls = Vec::new();
    let mut error_code: Option<String> = None;
    let mut error_text = String::new();
    let mut url_text = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Eof) => break,
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                if name == "error" {
                    error_code = Some(
                        e.attributes()
                            .flatten()
                            .find(|a| a.key.as_ref() == b"code")
                            .and_then(|a| a.unescape_value().ok().map(|v| v.to_string()))
                            .unwrap_or_default(),
                    );
                }
                path.push(name);
            }
            Ok(Event::Text(t)) => {
                let text = t
                    .unescape()
                    .map_err(|e| YandexError::Xml(e.to_string()))?;
                collect_text(&path, &text, &mut url_text, &mut error_text);
            }
            Ok(Event::CData(c)) => {
                let text = String::from_utf8_lossy(&c).to_string();
                collect_text(&path, &text, &mut url_text, &mut error_text);
            }
            Ok(Event::End(_)) => {
                if is_result_url(&path) {
                    let url = url_text.trim();
                    if !url.is_empty() {
                        urls.push(url.to_string());
                    }
                    url_text.clear();
                }
                path.pop();
            }
            Ok(_) => {}
            Err(e) => {
                return Err(YandexError::Xml(format!(
                    "at position {}: {}",
                    reader.buffer_position(),
                    e
                )));
            }
        }
        buf.clear();
    }

    if let Some(code) = error_code {
        let message = error_text.trim().to_string();
        if code == NO_RESULTS_CODE {
            debug!("Yandex reported no results: {}", message);
            return Ok(Vec::new());
        }
        return Err(YandexError::Api { code, message });
    }

    Ok(urls)
}

fn is_result_url(path: &[String]) -> bool {
    matches!(path, [.., group, doc, url] if group == "group" && doc == "doc" && url == "url")
}

fn collect_text(path: &[String], text: &str, url_text: &mut String, error_text: &mut String) {
    if is_result_url(path) {
        url_text.push_str(text);
    } else if path.last().is_some_and(|n| n == "error") {
        error_text.push_str(text);
    }
}
