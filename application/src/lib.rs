//! Application layer for mcq-scout
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::AnswerParams;
pub use ports::{
    llm_gateway::{GatewayError, LlmGateway, LlmSession},
    page_fetcher::PageFetcher,
    progress::{NoRoundProgress, RoundProgressNotifier},
    text_extractor::TextExtractor,
    web_search::{SearchError, WebSearch},
};
pub use use_cases::answer_question::{
    AnswerQuestionError, AnswerQuestionInput, AnswerQuestionUseCase,
};
pub use use_cases::query_strategist::{QueryGenerationError, QueryStrategist};
pub use use_cases::retrieve::RetrievalStage;
pub use use_cases::summarize::{SummarizeError, Summarizer};
pub use use_cases::synthesize::{AnswerSynthesizer, SynthesisError};
