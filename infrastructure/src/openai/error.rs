//! Error types for the OpenAI-compatible adapter

use scout_application::GatewayError;
use thiserror::Error;

/// Result type alias for OpenAI operations
pub type Result<T> = std::result::Result<T, OpenAiError>;

/// Errors that can occur when calling a chat completions endpoint
#[derive(Error, Debug)]
pub enum OpenAiError {
    #[error("HTTP client error: {0}")]
    ClientBuild(String),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Model not found: {0}")]
    ModelNotFound(String),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Response contained no message content")]
    EmptyResponse,
}

impl From<reqwest::Error> for OpenAiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            OpenAiError::Timeout
        } else {
            OpenAiError::Request(e.to_string())
        }
    }
}

impl From<OpenAiError> for GatewayError {
    fn from(e: OpenAiError) -> Self {
        match e {
            OpenAiError::Timeout => GatewayError::Timeout,
            OpenAiError::Auth(msg) => GatewayError::AuthenticationError(msg),
            OpenAiError::ModelNotFound(msg) => GatewayError::ModelNotAvailable(msg),
            OpenAiError::Request(msg) => GatewayError::ConnectionError(msg),
            OpenAiError::ParseError(msg) => GatewayError::InvalidResponse(msg),
            OpenAiError::EmptyResponse => {
                GatewayError::InvalidResponse("no message content".to_string())
            }
            other => GatewayError::RequestFailed(other.to_string()),
        }
    }
}
