//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Invalid search query: {0}")]
    InvalidSearchQuery(String),

    #[error("Malformed structured output: {0}")]
    StructuredOutput(String),
}

impl DomainError {
    /// Check if this error came from rejecting the question itself
    pub fn is_invalid_question(&self) -> bool {
        matches!(self, DomainError::InvalidQuestion(_))
    }
}
