//! Answer Question use case
//!
//! Runs the answering loop for one multiple-choice question:
//!
//! ```text
//! round 1:   generate query ─▶ retrieve ─▶ summarize ─▶ synthesize
//! round 2+:  refine query   ─▶ retrieve ─▶ summarize ─▶ synthesize
//! ```
//!
//! The loop stops at the first clear result or after `max_rounds`, in which
//! case the last round's result is returned. The use case never fails:
//! every error ends up as an [`AnswerResult`] with an error kind.

use crate::config::AnswerParams;
use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::{NoRoundProgress, RoundProgressNotifier};
use crate::use_cases::query_strategist::{QueryGenerationError, QueryStrategist};
use crate::use_cases::retrieve::RetrievalStage;
use crate::use_cases::summarize::Summarizer;
use crate::use_cases::synthesize::{AnswerSynthesizer, SynthesisError};
use scout_domain::{AnswerErrorKind, AnswerResult, Question, SearchQuery};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

/// Errors that abort the loop (reported as `processing_error`)
#[derive(Error, Debug)]
pub enum AnswerQuestionError {
    #[error("Query generation failed: {0}")]
    QueryGeneration(#[from] QueryGenerationError),

    #[error("Synthesis failed: {0}")]
    Synthesis(#[from] SynthesisError),
}

/// Input for the AnswerQuestion use case
#[derive(Debug, Clone)]
pub struct AnswerQuestionInput {
    /// Caller-chosen request id, echoed in the result
    pub id: i64,
    /// Question text with enumerated options
    pub query: String,
}

impl AnswerQuestionInput {
    pub fn new(id: i64, query: impl Into<String>) -> Self {
        Self {
            id,
            query: query.into(),
        }
    }
}

/// Use case for answering a multiple-choice question
pub struct AnswerQuestionUseCase<G: LlmGateway + 'static> {
    strategist: QueryStrategist<G>,
    retrieval: RetrievalStage,
    summarizer: Summarizer<G>,
    synthesizer: AnswerSynthesizer<G>,
    params: AnswerParams,
}

impl<G: LlmGateway + 'static> AnswerQuestionUseCase<G> {
    pub fn new(gateway: Arc<G>, retrieval: RetrievalStage, params: AnswerParams) -> Self {
        Self {
            strategist: QueryStrategist::new(Arc::clone(&gateway), &params),
            summarizer: Summarizer::new(Arc::clone(&gateway), &params),
            synthesizer: AnswerSynthesizer::new(gateway, &params),
            retrieval: retrieval.with_max_page_chars(params.max_page_chars),
            params,
        }
    }

    pub fn params(&self) -> &AnswerParams {
        &self.params
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: AnswerQuestionInput) -> AnswerResult {
        self.execute_with_progress(input, &NoRoundProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: AnswerQuestionInput,
        progress: &dyn RoundProgressNotifier,
    ) -> AnswerResult {
        let question = match Question::parse(input.query) {
            Ok(question) => Arc::new(question),
            Err(e) => {
                info!("Rejected request {}: {}", input.id, e);
                return AnswerResult::failure(
                    input.id,
                    AnswerErrorKind::ValidationError,
                    format!("Invalid multiple-choice question format: {}", e),
                );
            }
        };

        info!(
            "Answering request {} ({} options)",
            input.id,
            question.options().len()
        );

        let mut rounds = 0;
        match self
            .run_rounds(input.id, &question, progress, &mut rounds)
            .await
        {
            Ok(result) => {
                info!(
                    "Request {} finished after {} rounds: answer={:?} clear={}",
                    input.id, result.rounds, result.answer, result.is_answer_clear
                );
                result
            }
            Err(e) => {
                error!("Request {} failed in round {}: {}", input.id, rounds, e);
                AnswerResult::failure(
                    input.id,
                    AnswerErrorKind::ProcessingError,
                    format!("Processing error: {}", e),
                )
                .with_rounds(rounds)
            }
        }
    }

    async fn run_rounds(
        &self,
        id: i64,
        question: &Arc<Question>,
        progress: &dyn RoundProgressNotifier,
        rounds: &mut usize,
    ) -> Result<AnswerResult, AnswerQuestionError> {
        let max_rounds = self.params.max_rounds.max(1);
        let mut previous: Option<SearchQuery> = None;
        let mut last: Option<AnswerResult> = None;

        for round in 1..=max_rounds {
            *rounds = round;
            progress.on_round_start(round, max_rounds);

            let query = match &previous {
                None => self.strategist.generate_initial_query(question).await?,
                Some(prev) => self.strategist.refine_query(question, prev).await?,
            };
            info!("Round {}/{}: searching '{}'", round, max_rounds, query);
            progress.on_query(round, &query);

            let pages = self
                .retrieval
                .retrieve(&query, self.params.max_results)
                .await;
            progress.on_pages_retrieved(round, pages.len());

            let summaries = self.summarizer.summarize_all(question, pages).await;
            let failed = summaries.iter().filter(|s| s.is_placeholder).count();
            if failed > 0 {
                warn!("Round {}: {} of {} summaries failed", round, failed, summaries.len());
            }
            progress.on_summaries_ready(round, summaries.len(), failed);

            let result = self
                .synthesizer
                .synthesize(id, question, &summaries)
                .await?
                .with_rounds(round);
            progress.on_round_complete(round, &result);

            if result.is_answer_clear {
                return Ok(result);
            }
            previous = Some(query);
            last = Some(result);
        }

        Ok(last.unwrap_or_else(|| {
            AnswerResult::failure(
                id,
                AnswerErrorKind::ProcessingError,
                "Processing error: no rounds were run",
            )
        }))
    }
}
