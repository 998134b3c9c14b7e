//! Retrieval value objects: what flows from the search API to the synthesizer.
//!
//! - [`SearchQuery`] - single-line query sent to the search API
//! - [`PageResult`] - one fetched and cleaned page
//! - [`ContentSummary`] - question-relevant facts extracted from one page

use crate::core::error::DomainError;
use crate::core::string::collapse_whitespace;
use serde::{Deserialize, Serialize};

/// Quote pairs a model likes to wrap its query in.
const WRAPPING_QUOTES: &[(char, char)] = &[('"', '"'), ('\'', '\''), ('«', '»'), ('“', '”')];

/// A single-line web search query (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Normalize and validate a query produced by the model.
    ///
    /// Newlines and whitespace runs collapse to single spaces and one layer of
    /// wrapping quotes is removed. An empty result is rejected.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let mut query = collapse_whitespace(raw.as_ref());
        for (open, close) in WRAPPING_QUOTES {
            if query.chars().count() >= 2 && query.starts_with(*open) && query.ends_with(*close) {
                let inner = &query[open.len_utf8()..query.len() - close.len_utf8()];
                query = inner.trim().to_string();
                break;
            }
        }
        if query.is_empty() {
            return Err(DomainError::InvalidSearchQuery(
                "search query is empty".to_string(),
            ));
        }
        Ok(Self(query))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A fetched page reduced to cleaned, truncated text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    /// URL the page was fetched from (search result URL, before redirects)
    pub url: String,
    /// Single-paragraph cleaned text
    pub text: String,
}

impl PageResult {
    pub fn new(url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            text: text.into(),
        }
    }
}

/// Question-relevant facts extracted from one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSummary {
    /// Source URL, attached by the caller rather than the model
    pub source: String,
    /// Extracted relevant text
    pub summary: String,
    /// Reasoning trace reported by the model, if any
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reasoning_steps: Vec<String>,
    /// True when summarization failed and `summary` carries the error
    #[serde(default)]
    pub is_placeholder: bool,
}

impl ContentSummary {
    pub fn new(
        source: impl Into<String>,
        summary: impl Into<String>,
        reasoning_steps: Vec<String>,
    ) -> Self {
        Self {
            source: source.into(),
            summary: summary.into(),
            reasoning_steps,
            is_placeholder: false,
        }
    }

    /// Stand-in for a page whose summarization failed.
    ///
    /// Keeps the page's URL so the page-to-summary mapping stays 1:1.
    pub fn placeholder(source: impl Into<String>, error: impl std::fmt::Display) -> Self {
        Self {
            source: source.into(),
            summary: format!("Summarization failed: {}", error),
            reasoning_steps: vec!["error".to_string()],
            is_placeholder: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_query_flattens_newlines() {
        let q = SearchQuery::new("winter school\n main stage   dates\n2025").unwrap();
        assert_eq!(q.as_str(), "winter school main stage dates 2025");
    }

    #[test]
    fn test_search_query_strips_quotes() {
        assert_eq!(SearchQuery::new("\"event x date\"").unwrap().as_str(), "event x date");
        assert_eq!(SearchQuery::new("«даты этапа»").unwrap().as_str(), "даты этапа");
        // Unbalanced quotes are left alone
        assert_eq!(SearchQuery::new("\"event x").unwrap().as_str(), "\"event x");
    }

    #[test]
    fn test_search_query_rejects_empty() {
        assert!(SearchQuery::new("").is_err());
        assert!(SearchQuery::new("  \n ").is_err());
        assert!(SearchQuery::new("\"\"").is_err());
    }

    #[test]
    fn test_placeholder_keeps_source() {
        let s = ContentSummary::placeholder("https://example.com", "timeout");
        assert_eq!(s.source, "https://example.com");
        assert!(s.is_placeholder);
        assert!(s.summary.contains("timeout"));
    }

    #[test]
    fn test_summary_serializes_without_empty_trace() {
        let s = ContentSummary::new("https://a", "fact", vec![]);
        let json = serde_json::to_value(&s).unwrap();
        assert!(json.get("reasoning_steps").is_none());
        assert_eq!(json["is_placeholder"], false);
    }
}
