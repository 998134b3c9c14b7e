//! Request and response bodies of the HTTP API

use scout_domain::AnswerResult;
use serde::{Deserialize, Serialize};
use url::Url;

/// Body of `POST /api/request`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnswerRequest {
    pub id: i64,
    pub query: String,
}

/// Response of `POST /api/request`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnswerResponse {
    pub id: i64,
    pub answer: Option<u32>,
    pub reasoning: String,
    pub sources: Vec<String>,
}

impl AnswerResponse {
    /// Builds the response for a result produced by `model`.
    ///
    /// Sources that are not absolute http(s) URLs are dropped.
    pub fn from_result(result: AnswerResult, model: &str) -> Self {
        let sources = result
            .sources
            .into_iter()
            .filter(|source| is_web_url(source))
            .collect();

        Self {
            id: result.id,
            answer: result.answer,
            reasoning: format!("Answer generated by {}; {}", model, result.reasoning),
            sources,
        }
    }
}

fn is_web_url(source: &str) -> bool {
    Url::parse(source)
        .map(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
        .unwrap_or(false)
}

/// Response of `GET /health`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result_prefixes_model() {
        let result = AnswerResult::new(5, Some(1), "matched", true, vec![]);
        let response = AnswerResponse::from_result(result, "gpt-4o-mini");
        assert_eq!(response.id, 5);
        assert_eq!(response.answer, Some(1));
        assert_eq!(response.reasoning, "Answer generated by gpt-4o-mini; matched");
    }

    #[test]
    fn test_from_result_drops_non_web_sources() {
        let result = AnswerResult::new(
            1,
            Some(2),
            "matched",
            true,
            vec![
                "https://example.com/a".to_string(),
                "not a url".to_string(),
                "ftp://example.com/file".to_string(),
            ],
        );
        let response = AnswerResponse::from_result(result, "m");
        assert_eq!(response.sources, vec!["https://example.com/a".to_string()]);
    }

    #[test]
    fn test_response_serializes_null_answer() {
        let response = AnswerResponse {
            id: 3,
            answer: None,
            reasoning: "r".to_string(),
            sources: vec![],
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json["answer"].is_null());
        assert_eq!(json["sources"], serde_json::json!([]));
    }
}
