//! Answer value objects - the unit returned to the caller.

use serde::{Deserialize, Serialize};

/// Maximum number of sources reported with an answer
pub const MAX_SOURCES: usize = 3;

/// Why an [`AnswerResult`] carries no answer
///
/// The human-readable explanation lives in [`AnswerResult::reasoning`];
/// this is the machine-readable signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerErrorKind {
    /// The question or its options were malformed
    ValidationError,
    /// No usable evidence could be retrieved
    RetrievalError,
    /// The synthesis output was structurally invalid
    SynthesisError,
    /// A round failed unexpectedly
    ProcessingError,
}

impl AnswerErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnswerErrorKind::ValidationError => "validation_error",
            AnswerErrorKind::RetrievalError => "retrieval_error",
            AnswerErrorKind::SynthesisError => "synthesis_error",
            AnswerErrorKind::ProcessingError => "processing_error",
        }
    }
}

impl std::fmt::Display for AnswerErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of one round, and of the whole answering loop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerResult {
    /// Request id echoed back to the caller
    pub id: i64,
    /// Selected option label, `None` when no option is supported
    pub answer: Option<u32>,
    /// Reasoning trace, or the error description
    pub reasoning: String,
    /// Whether the selection is unambiguous (the confidence gate)
    pub is_answer_clear: bool,
    /// Supporting source URLs, at most [`MAX_SOURCES`]
    pub sources: Vec<String>,
    /// Set when the result is a recovered failure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<AnswerErrorKind>,
    /// Rounds run before this result was produced
    #[serde(default)]
    pub rounds: usize,
}

impl AnswerResult {
    /// Creates a result from a synthesis decision.
    ///
    /// Sources beyond [`MAX_SOURCES`] are dropped, keeping the first ones.
    pub fn new(
        id: i64,
        answer: Option<u32>,
        reasoning: impl Into<String>,
        is_answer_clear: bool,
        mut sources: Vec<String>,
    ) -> Self {
        sources.truncate(MAX_SOURCES);
        Self {
            id,
            answer,
            reasoning: reasoning.into(),
            is_answer_clear,
            sources,
            error: None,
            rounds: 0,
        }
    }

    /// Creates a "no answer" result for a recovered failure.
    pub fn failure(id: i64, kind: AnswerErrorKind, reasoning: impl Into<String>) -> Self {
        Self {
            id,
            answer: None,
            reasoning: reasoning.into(),
            is_answer_clear: false,
            sources: Vec::new(),
            error: Some(kind),
            rounds: 0,
        }
    }

    /// Records how many rounds were run.
    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    /// Returns `true` if an option was selected.
    pub fn is_answered(&self) -> bool {
        self.answer.is_some()
    }
}
