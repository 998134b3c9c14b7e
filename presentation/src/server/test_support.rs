//! In-process fakes for the HTTP API tests.

use async_trait::async_trait;
use scout_application::{
    AnswerParams, AnswerQuestionUseCase, GatewayError, LlmGateway, LlmSession, PageFetcher,
    RetrievalStage, SearchError, TextExtractor, WebSearch,
};
use scout_domain::{Model, PromptTemplate, SearchQuery};
use std::sync::Arc;

/// Gateway that always finds "Jan 2" for the event X question.
pub(crate) struct CannedGateway;

#[async_trait]
impl LlmGateway for CannedGateway {
    async fn create_session(&self, model: &Model) -> Result<Box<dyn LlmSession>, GatewayError> {
        self.create_session_with_system_prompt(model, "").await
    }

    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        let reply = if system_prompt == PromptTemplate::query_system() {
            r#"{"reasoning_steps": [], "search_query": "event x official date"}"#
        } else if system_prompt == PromptTemplate::summary_system() {
            r#"{"reasoning_steps": [], "summary": "Event X is held on Jan 2"}"#
        } else {
            r#"{"reasoning": "Both sources state Jan 2", "is_answer_clear": true, "sources": ["https://a.example/x", "https://b.example/x"], "answer": 2}"#
        };
        Ok(Box::new(CannedSession {
            model: model.clone(),
            reply,
        }))
    }
}

struct CannedSession {
    model: Model,
    reply: &'static str,
}

#[async_trait]
impl LlmSession for CannedSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, _content: &str) -> Result<String, GatewayError> {
        Ok(self.reply.to_string())
    }
}

struct TwoPageSearch;

#[async_trait]
impl WebSearch for TwoPageSearch {
    async fn search(&self, _query: &SearchQuery) -> Result<Vec<String>, SearchError> {
        Ok(vec![
            "https://a.example/x".to_string(),
            "https://b.example/x".to_string(),
        ])
    }
}

struct StaticPage;

#[async_trait]
impl PageFetcher for StaticPage {
    async fn fetch(&self, _url: &str) -> Option<String> {
        Some("Event X is held on Jan 2 every year.".to_string())
    }
}

struct PlainText;

impl TextExtractor for PlainText {
    fn extract(&self, markup: &str) -> String {
        markup.trim().to_string()
    }
}

pub(crate) fn use_case() -> AnswerQuestionUseCase<CannedGateway> {
    let retrieval = RetrievalStage::new(
        Arc::new(TwoPageSearch),
        Arc::new(StaticPage),
        Arc::new(PlainText),
    );
    AnswerQuestionUseCase::new(
        Arc::new(CannedGateway),
        retrieval,
        AnswerParams::default().with_model(Model::new("test-model")),
    )
}
