//! Summarizer
//!
//! Condenses each retrieved page into the facts relevant to the question.
//! Pages are summarized concurrently. A failed summary never fails the
//! round: it becomes a placeholder so the synthesizer still sees the source.

use crate::config::AnswerParams;
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::use_cases::shared::ask_model;
use scout_domain::core::string::take_chars;
use scout_domain::{
    ContentSummary, DomainError, Model, PageResult, PromptTemplate, Question, SummaryDraft,
    parse_structured,
};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

/// Why a single page could not be summarized
#[derive(Error, Debug)]
pub enum SummarizeError {
    #[error("Gateway error: {0}")]
    GatewayError(#[from] GatewayError),

    #[error("Invalid summary output: {0}")]
    InvalidOutput(#[from] DomainError),
}

/// Summarizes pages with respect to a question
pub struct Summarizer<G: LlmGateway + 'static> {
    gateway: Arc<G>,
    model: Model,
    timeout: Option<Duration>,
    input_chars: usize,
}

impl<G: LlmGateway + 'static> Summarizer<G> {
    pub fn new(gateway: Arc<G>, params: &AnswerParams) -> Self {
        Self {
            gateway,
            model: params.model.clone(),
            timeout: params.model_timeout,
            input_chars: params.summary_input_chars,
        }
    }

    /// Summary of one page; a placeholder when the model call fails.
    pub async fn summarize(&self, question: &Question, page: &PageResult) -> ContentSummary {
        Self::summarize_page(
            self.gateway.as_ref(),
            &self.model,
            self.timeout,
            self.input_chars,
            question,
            page,
        )
        .await
    }

    /// One summary per page, in page order.
    pub async fn summarize_all(
        &self,
        question: &Arc<Question>,
        pages: Vec<PageResult>,
    ) -> Vec<ContentSummary> {
        if pages.is_empty() {
            return Vec::new();
        }
        info!("Summarizing {} pages", pages.len());

        let sources: Vec<String> = pages.iter().map(|p| p.url.clone()).collect();
        let mut join_set = JoinSet::new();

        for (index, page) in pages.into_iter().enumerate() {
            let gateway = Arc::clone(&self.gateway);
            let model = self.model.clone();
            let question = Arc::clone(question);
            let timeout = self.timeout;
            let input_chars = self.input_chars;

            join_set.spawn(async move {
                let summary = Self::summarize_page(
                    gateway.as_ref(),
                    &model,
                    timeout,
                    input_chars,
                    &question,
                    &page,
                )
                .await;
                (index, summary)
            });
        }

        let mut summaries: Vec<Option<ContentSummary>> = vec![None; sources.len()];

        while let Some(result) = join_set.join_next().await {
            match result {
                Ok((index, summary)) => summaries[index] = Some(summary),
                Err(e) => warn!("Task join error: {}", e),
            }
        }

        summaries
            .into_iter()
            .zip(sources)
            .map(|(summary, source)| {
                summary.unwrap_or_else(|| {
                    ContentSummary::placeholder(source, "summarization task aborted")
                })
            })
            .collect()
    }

    async fn summarize_page(
        gateway: &G,
        model: &Model,
        timeout: Option<Duration>,
        input_chars: usize,
        question: &Question,
        page: &PageResult,
    ) -> ContentSummary {
        match Self::try_summarize(gateway, model, timeout, input_chars, question, page).await {
            Ok(summary) => summary,
            Err(e) => {
                warn!("Summarization failed for {}: {}", page.url, e);
                ContentSummary::placeholder(&page.url, e)
            }
        }
    }

    async fn try_summarize(
        gateway: &G,
        model: &Model,
        timeout: Option<Duration>,
        input_chars: usize,
        question: &Question,
        page: &PageResult,
    ) -> Result<ContentSummary, SummarizeError> {
        let prompt = PromptTemplate::summarization(question, take_chars(&page.text, input_chars));
        let response = ask_model(
            gateway,
            model,
            PromptTemplate::summary_system(),
            &prompt,
            timeout,
        )
        .await?;

        let draft: SummaryDraft = parse_structured(&response)?;
        debug!("Summarized {} ({} chars)", page.url, draft.summary.len());
        Ok(ContentSummary::new(
            &page.url,
            draft.summary,
            draft.reasoning_steps,
        ))
    }
}
