//! HTTP client for an OpenAI-compatible chat completions endpoint

use super::error::{OpenAiError, Result};
use super::protocol::{ChatMessage, ChatRequest, ChatResponse, ResponseFormat, extract_error_message};
use std::time::Duration;
use tracing::debug;

/// Connection settings for [`OpenAiClient`]
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// Base URL without the `/chat/completions` suffix
    pub base_url: String,
    pub api_key: String,
    pub temperature: Option<f32>,
    /// Transport-level request timeout
    pub timeout: Option<Duration>,
}

impl OpenAiConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            temperature: None,
            timeout: None,
        }
    }

    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Sends single-turn chat completions that must answer in JSON.
pub struct OpenAiClient {
    config: OpenAiConfig,
    client: reqwest::Client,
}

impl std::fmt::Debug for OpenAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiClient")
            .field("base_url", &self.config.base_url)
            .field("temperature", &self.config.temperature)
            .finish()
    }
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| OpenAiError::ClientBuild(e.to_string()))?;
        Ok(Self { config, client })
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    /// One system + user exchange; returns the assistant's text.
    pub async fn complete(
        &self,
        model: &str,
        system_prompt: Option<&str>,
        user_prompt: &str,
    ) -> Result<String> {
        let mut messages = Vec::with_capacity(2);
        if let Some(system) = system_prompt {
            messages.push(ChatMessage::system(system));
        }
        messages.push(ChatMessage::user(user_prompt));

        let request = ChatRequest {
            model,
            messages,
            response_format: ResponseFormat::json_object(),
            temperature: self.config.temperature,
        };

        debug!("POST {} (model {})", self.completions_url(), model);
        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::map_http_error(status.as_u16(), model, &body));
        }

        let body = response.text().await?;
        let parsed: ChatResponse =
            serde_json::from_str(&body).map_err(|e| OpenAiError::ParseError(e.to_string()))?;
        parsed.into_content().ok_or(OpenAiError::EmptyResponse)
    }

    fn map_http_error(status: u16, model: &str, body: &str) -> OpenAiError {
        let message = extract_error_message(body);
        match status {
            401 | 403 => OpenAiError::Auth(message),
            404 => OpenAiError::ModelNotFound(format!("{}: {}", model, message)),
            429 => OpenAiError::RateLimited(message),
            _ => OpenAiError::Status { status, message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn completion(content: &str) -> serde_json::Value {
        json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "model": "gpt-4o-mini",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": content},
                "finish_reason": "stop"
            }]
        })
    }

    fn client(server: &MockServer) -> OpenAiClient {
        OpenAiClient::new(OpenAiConfig::new(format!("{}/v1", server.uri()), "test-key")).unwrap()
    }

    #[tokio::test]
    async fn test_request_format() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_partial_json(json!({
                "model": "gpt-4o-mini",
                "messages": [
                    {"role": "system", "content": "be precise"},
                    {"role": "user", "content": "question"}
                ],
                "response_format": {"type": "json_object"}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("{\"ok\": true}")))
            .expect(1)
            .mount(&server)
            .await;

        let text = client(&server)
            .complete("gpt-4o-mini", Some("be precise"), "question")
            .await
            .unwrap();
        assert_eq!(text, "{\"ok\": true}");
    }

    #[tokio::test]
    async fn test_unauthorized_maps_to_auth() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_json(json!({"error": {"message": "Incorrect API key"}})),
            )
            .mount(&server)
            .await;

        let err = client(&server)
            .complete("gpt-4o-mini", None, "q")
            .await
            .unwrap_err();
        assert!(matches!(err, OpenAiError::Auth(ref m) if m == "Incorrect API key"));
    }

    #[tokio::test]
    async fn test_server_error_keeps_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .mount(&server)
            .await;

        let err = client(&server)
            .complete("gpt-4o-mini", None, "q")
            .await
            .unwrap_err();
        assert!(matches!(err, OpenAiError::Status { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_empty_choices() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&server)
            .await;

        let err = client(&server)
            .complete("gpt-4o-mini", None, "q")
            .await
            .unwrap_err();
        assert!(matches!(err, OpenAiError::EmptyResponse));
    }

    #[tokio::test]
    async fn test_transport_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(completion("{}"))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let client = OpenAiClient::new(
            OpenAiConfig::new(server.uri(), "k").with_timeout(Duration::from_millis(50)),
        )
        .unwrap();
        let err = client.complete("gpt-4o-mini", None, "q").await.unwrap_err();
        assert!(matches!(err, OpenAiError::Timeout));
    }
}
