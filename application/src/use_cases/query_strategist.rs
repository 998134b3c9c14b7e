//! Query strategist
//!
//! Produces the search query for a round: a fresh one for the first round,
//! a refinement of the previous one afterwards. The model explains itself in
//! `reasoning_steps`, which only go to the debug log.

use crate::config::AnswerParams;
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::use_cases::shared::ask_model;
use scout_domain::{
    DomainError, Model, PromptTemplate, QueryDraft, Question, SearchQuery, parse_structured,
};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Errors from query generation or refinement
#[derive(Error, Debug)]
pub enum QueryGenerationError {
    #[error("Gateway error: {0}")]
    GatewayError(#[from] GatewayError),

    #[error("Invalid query output: {0}")]
    InvalidOutput(#[from] DomainError),
}

/// Generates and refines search queries for a question
pub struct QueryStrategist<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    model: Model,
    timeout: Option<Duration>,
}

impl<G: LlmGateway + 'static> QueryStrategist<G> {
    pub fn new(gateway: Arc<G>, params: &AnswerParams) -> Self {
        Self {
            gateway,
            model: params.model.clone(),
            timeout: params.model_timeout,
        }
    }

    /// First query for `question`.
    pub async fn generate_initial_query(
        &self,
        question: &Question,
    ) -> Result<SearchQuery, QueryGenerationError> {
        let prompt = PromptTemplate::query_generation(question);
        self.request(&prompt).await
    }

    /// Replacement for `previous`, which did not lead to a clear answer.
    pub async fn refine_query(
        &self,
        question: &Question,
        previous: &SearchQuery,
    ) -> Result<SearchQuery, QueryGenerationError> {
        let prompt = PromptTemplate::query_refinement(question, previous.as_str());
        let query = self.request(&prompt).await?;
        if &query == previous {
            debug!("Refined query is identical to the previous one: {}", query);
        }
        Ok(query)
    }

    async fn request(&self, prompt: &str) -> Result<SearchQuery, QueryGenerationError> {
        let response = ask_model(
            self.gateway.as_ref(),
            &self.model,
            PromptTemplate::query_system(),
            prompt,
            self.timeout,
        )
        .await?;

        let draft: QueryDraft = parse_structured(&response)?;
        for step in &draft.reasoning_steps {
            debug!("Query reasoning: {}", step);
        }
        Ok(SearchQuery::new(&draft.search_query)?)
    }
}
