//! Route handlers

use super::dto::{AnswerRequest, AnswerResponse, HealthResponse};
use axum::Json;
use axum::extract::State;
use scout_application::{AnswerQuestionInput, AnswerQuestionUseCase, LlmGateway};
use std::sync::Arc;
use tracing::info;

/// Shared state for the handlers
pub struct AppState<G: LlmGateway + 'static> {
    pub use_case: Arc<AnswerQuestionUseCase<G>>,
    /// Model name quoted in every answer's reasoning
    pub model: Arc<str>,
}

impl<G: LlmGateway + 'static> AppState<G> {
    pub fn new(use_case: AnswerQuestionUseCase<G>) -> Self {
        let model = Arc::from(use_case.params().model.as_str());
        Self {
            use_case: Arc::new(use_case),
            model,
        }
    }
}

// Derived Clone would require `G: Clone`.
impl<G: LlmGateway + 'static> Clone for AppState<G> {
    fn clone(&self) -> Self {
        Self {
            use_case: Arc::clone(&self.use_case),
            model: Arc::clone(&self.model),
        }
    }
}

/// `POST /api/request`
///
/// Always answers 200: failures are reported in the body with a null answer.
pub async fn answer_request<G: LlmGateway + 'static>(
    State(state): State<AppState<G>>,
    Json(request): Json<AnswerRequest>,
) -> Json<AnswerResponse> {
    info!(id = request.id, "Processing question");

    let result = state
        .use_case
        .execute(AnswerQuestionInput::new(request.id, request.query))
        .await;

    info!(
        id = result.id,
        answer = ?result.answer,
        clear = result.is_answer_clear,
        rounds = result.rounds,
        "Question processed"
    );

    Json(AnswerResponse::from_result(result, &state.model))
}

/// `GET /health`
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::test_support::use_case;

    #[tokio::test]
    async fn test_answer_request_scenario() {
        let state = AppState::new(use_case());
        let request = AnswerRequest {
            id: 42,
            query: "Event X date? 1. Jan 1  2. Jan 2".to_string(),
        };

        let Json(response) = answer_request(State(state), Json(request)).await;

        assert_eq!(response.id, 42);
        assert_eq!(response.answer, Some(2));
        assert!(response.reasoning.starts_with("Answer generated by test-model; "));
        assert!(!response.sources.is_empty());
        assert!(response.sources.len() <= 3);
    }

    #[tokio::test]
    async fn test_answer_request_invalid_question() {
        let state = AppState::new(use_case());
        let request = AnswerRequest {
            id: 7,
            query: "What is the date of event X?".to_string(),
        };

        let Json(response) = answer_request(State(state), Json(request)).await;

        assert_eq!(response.id, 7);
        assert_eq!(response.answer, None);
        assert!(response.reasoning.contains("Invalid multiple-choice question format"));
        assert!(response.sources.is_empty());
    }

    #[tokio::test]
    async fn test_health() {
        let Json(response) = health().await;
        assert_eq!(response.status, "ok");
    }
}
