//! Shared utilities for use cases.
//!
//! Every stage talks to the model the same way: open a session with the
//! stage's system prompt, send one user prompt, wait for the reply under
//! the configured timeout.

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use scout_domain::Model;
use std::time::Duration;

/// Send one prompt in a fresh session, honoring `timeout`.
pub(crate) async fn ask_model<G: LlmGateway + ?Sized>(
    gateway: &G,
    model: &Model,
    system_prompt: &str,
    prompt: &str,
    timeout: Option<Duration>,
) -> Result<String, GatewayError> {
    let exchange = async {
        let session = gateway
            .create_session_with_system_prompt(model, system_prompt)
            .await?;
        session.send(prompt).await
    };

    match timeout {
        Some(limit) => tokio::time::timeout(limit, exchange)
            .await
            .map_err(|_| GatewayError::Timeout)?,
        None => exchange.await,
    }
}
