//! Fakes shared by the use case tests.

use crate::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use crate::ports::page_fetcher::PageFetcher;
use crate::ports::text_extractor::TextExtractor;
use crate::ports::web_search::{SearchError, WebSearch};
use async_trait::async_trait;
use scout_domain::{Model, PromptTemplate, SearchQuery};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Which stage a model call belongs to, recovered from its system prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Stage {
    Query,
    Summary,
    Synthesis,
}

impl Stage {
    fn from_system_prompt(system_prompt: &str) -> Self {
        if system_prompt == PromptTemplate::query_system() {
            Stage::Query
        } else if system_prompt == PromptTemplate::summary_system() {
            Stage::Summary
        } else if system_prompt == PromptTemplate::synthesis_system() {
            Stage::Synthesis
        } else {
            panic!("unexpected system prompt: {system_prompt}")
        }
    }
}

type Responder = dyn Fn(Stage, &str) -> Result<String, GatewayError> + Send + Sync;

/// Gateway whose replies are computed from the stage and the user prompt.
pub(crate) struct ScriptedGateway {
    responder: Arc<Responder>,
    calls: Arc<Mutex<Vec<(Stage, String)>>>,
    delay: Option<Duration>,
}

impl ScriptedGateway {
    pub(crate) fn new(
        responder: impl Fn(Stage, &str) -> Result<String, GatewayError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            responder: Arc::new(responder),
            calls: Arc::new(Mutex::new(Vec::new())),
            delay: None,
        }
    }

    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub(crate) fn calls(&self, stage: Stage) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(s, _)| *s == stage)
            .map(|(_, prompt)| prompt.clone())
            .collect()
    }

    pub(crate) fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmGateway for ScriptedGateway {
    async fn create_session(&self, _model: &Model) -> Result<Box<dyn LlmSession>, GatewayError> {
        Err(GatewayError::Other(
            "sessions need a system prompt".to_string(),
        ))
    }

    async fn create_session_with_system_prompt(
        &self,
        model: &Model,
        system_prompt: &str,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        Ok(Box::new(ScriptedSession {
            model: model.clone(),
            stage: Stage::from_system_prompt(system_prompt),
            responder: Arc::clone(&self.responder),
            calls: Arc::clone(&self.calls),
            delay: self.delay,
        }))
    }
}

struct ScriptedSession {
    model: Model,
    stage: Stage,
    responder: Arc<Responder>,
    calls: Arc<Mutex<Vec<(Stage, String)>>>,
    delay: Option<Duration>,
}

#[async_trait]
impl LlmSession for ScriptedSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        self.calls
            .lock()
            .unwrap()
            .push((self.stage, content.to_string()));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        (self.responder)(self.stage, content)
    }
}

/// The page excerpt embedded in a summarization prompt.
pub(crate) fn page_excerpt(prompt: &str) -> &str {
    let start = prompt
        .find("Content (excerpt):\n")
        .map(|i| i + "Content (excerpt):\n".len())
        .unwrap();
    let end = prompt[start..].find("\n\nSteps:").unwrap() + start;
    &prompt[start..end]
}

pub(crate) fn query_json(query: &str) -> String {
    serde_json::json!({"reasoning_steps": ["keep the dates"], "search_query": query}).to_string()
}

pub(crate) fn summary_json(summary: &str) -> String {
    serde_json::json!({"reasoning_steps": ["read the page"], "summary": summary}).to_string()
}

pub(crate) fn synthesis_json(answer: Option<u32>, clear: bool, sources: &[&str]) -> String {
    serde_json::json!({
        "reasoning": "compared options with sources",
        "is_answer_clear": clear,
        "sources": sources,
        "answer": answer,
    })
    .to_string()
}

/// Search backend returning the same URLs for every query.
pub(crate) struct StaticSearch {
    urls: Option<Vec<String>>,
    queries: Mutex<Vec<String>>,
}

impl StaticSearch {
    pub(crate) fn new(urls: &[&str]) -> Self {
        Self {
            urls: Some(urls.iter().map(|u| u.to_string()).collect()),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            urls: None,
            queries: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl WebSearch for StaticSearch {
    async fn search(&self, query: &SearchQuery) -> Result<Vec<String>, SearchError> {
        self.queries.lock().unwrap().push(query.to_string());
        self.urls
            .clone()
            .ok_or_else(|| SearchError::Backend("quota exceeded".to_string()))
    }
}

/// Fetcher serving canned markup; unknown URLs fail.
#[derive(Default)]
pub(crate) struct MapFetcher {
    pages: HashMap<String, String>,
    delays: HashMap<String, Duration>,
}

impl MapFetcher {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn page(mut self, url: &str, markup: &str) -> Self {
        self.pages.insert(url.to_string(), markup.to_string());
        self
    }

    pub(crate) fn slow_page(mut self, url: &str, markup: &str, delay: Duration) -> Self {
        self.delays.insert(url.to_string(), delay);
        self.page(url, markup)
    }
}

#[async_trait]
impl PageFetcher for MapFetcher {
    async fn fetch(&self, url: &str) -> Option<String> {
        if let Some(delay) = self.delays.get(url) {
            tokio::time::sleep(*delay).await;
        }
        self.pages.get(url).cloned()
    }
}

/// Extractor that only trims; markup in tests is already plain text.
pub(crate) struct TrimExtractor;

impl TextExtractor for TrimExtractor {
    fn extract(&self, markup: &str) -> String {
        markup.trim().to_string()
    }
}
