//! LLM session backed by the chat completions endpoint

use super::client::OpenAiClient;
use async_trait::async_trait;
use scout_application::{GatewayError, LlmSession};
use scout_domain::Model;
use std::sync::Arc;

/// A stateless session: every `send` is an independent completion that
/// carries the session's system prompt.
pub struct OpenAiSession {
    client: Arc<OpenAiClient>,
    model: Model,
    system_prompt: Option<String>,
}

impl OpenAiSession {
    pub fn new(client: Arc<OpenAiClient>, model: Model, system_prompt: Option<String>) -> Self {
        Self {
            client,
            model,
            system_prompt,
        }
    }
}

#[async_trait]
impl LlmSession for OpenAiSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        self.client
            .complete(self.model.as_str(), self.system_prompt.as_deref(), content)
            .await
            .map_err(GatewayError::from)
    }
}
