//! OpenAI-compatible gateway implementation
//!
//! Implements LlmGateway over a shared [`OpenAiClient`].

use super::client::OpenAiClient;
use super::session::OpenAiSession;
use async_trait::async_trait;
use scout_application::{GatewayError, LlmGateway, LlmSession};
use scout_domain::Model;
use std::sync::Arc;
use tracing::debug;

/// Gateway to an OpenAI-compatible chat completions API
pub struct OpenAiGateway {
    client: Arc<OpenAiClient>,
}

impl OpenAiGateway {
    pub fn new(client: OpenAiClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl LlmGateway for OpenAiGateway {
    async fn create_session(&self, model: &Model) -> Result<Box<dyn LlmSession>, GatewayError> {
        debug!("Creating session for model {}", model);
        Ok(Box::new(OpenAiSession::new(
            Arc::clone(&self.client),
            model.clone(),
            None,
        )))
    }

    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        debug!("Creating session for model {} with system prompt", model);
        Ok(Box::new(OpenAiSession::new(
            Arc::clone(&self.client),
            model.clone(),
            Some(system_prompt.to_string()),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openai::client::OpenAiConfig;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_session_sends_system_prompt() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_partial_json(json!({
                "model": "gpt-4o",
                "messages": [{"role": "system", "content": "strategist"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"role": "assistant", "content": "{\"search_query\": \"q\"}"}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let gateway =
            OpenAiGateway::new(OpenAiClient::new(OpenAiConfig::new(server.uri(), "k")).unwrap());
        let session = gateway
            .create_session_with_system_prompt(&Model::new("gpt-4o"), "strategist")
            .await
            .unwrap();

        assert_eq!(session.model().as_str(), "gpt-4o");
        let reply = session.send("question").await.unwrap();
        assert!(reply.contains("search_query"));
    }

    #[tokio::test]
    async fn test_errors_map_to_gateway_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "error": {"message": "The model does not exist"}
            })))
            .mount(&server)
            .await;

        let gateway =
            OpenAiGateway::new(OpenAiClient::new(OpenAiConfig::new(server.uri(), "k")).unwrap());
        let session = gateway.create_session(&Model::new("gpt-9")).await.unwrap();

        let err = session.send("q").await.unwrap_err();
        assert!(matches!(err, GatewayError::ModelNotAvailable(_)));
    }
}
