//! Answer parameters: answering loop control.
//!
//! [`AnswerParams`] groups the static parameters that control
//! [`AnswerQuestionUseCase`](crate::use_cases::answer_question::AnswerQuestionUseCase)
//! and its stages. These are application-layer concerns, not domain policy.

use scout_domain::Model;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Answering loop control parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerParams {
    /// Model used for every stage.
    pub model: Model,
    /// Maximum number of rounds (query → retrieve → summarize → synthesize).
    pub max_rounds: usize,
    /// Maximum search results fetched per round.
    pub max_results: usize,
    /// Cleaned page text is truncated to this many characters.
    pub max_page_chars: usize,
    /// Page text sent to the summarizer is capped at this many characters.
    pub summary_input_chars: usize,
    /// Timeout for a single model call.
    pub model_timeout: Option<Duration>,
}

impl Default for AnswerParams {
    fn default() -> Self {
        Self {
            model: Model::default(),
            max_rounds: 4,
            max_results: 5,
            max_page_chars: 1000,
            summary_input_chars: 5000,
            model_timeout: Some(Duration::from_secs(60)),
        }
    }
}

impl AnswerParams {
    // ==================== Builder Methods ====================

    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    /// At least one round always runs.
    pub fn with_max_rounds(mut self, max: usize) -> Self {
        self.max_rounds = max.max(1);
        self
    }

    pub fn with_max_results(mut self, max: usize) -> Self {
        self.max_results = max;
        self
    }

    pub fn with_max_page_chars(mut self, max: usize) -> Self {
        self.max_page_chars = max;
        self
    }

    pub fn with_summary_input_chars(mut self, max: usize) -> Self {
        self.summary_input_chars = max;
        self
    }

    pub fn with_model_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.model_timeout = timeout;
        self
    }
}
