//! OpenAI-compatible adapter
//!
//! Implements LlmGateway for any endpoint speaking the chat completions
//! protocol (OpenAI itself, Azure deployments, proxies).

pub mod client;
pub mod error;
pub mod gateway;
pub mod protocol;
pub mod session;

pub use client::{OpenAiClient, OpenAiConfig};
pub use error::OpenAiError;
pub use gateway::OpenAiGateway;
