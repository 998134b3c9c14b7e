//! Infrastructure layer for mcq-scout
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.
//!
//! | Port | Adapter |
//! |------|---------|
//! | `LlmGateway` | [`OpenAiGateway`] |
//! | `WebSearch` | [`YandexSearchClient`] |
//! | `PageFetcher` | [`HttpPageFetcher`] |
//! | `TextExtractor` | [`HtmlTextExtractor`] |

pub mod config;
pub mod openai;
pub mod web;

// Re-export commonly used types
pub use config::{ConfigLoader, DEFAULT_USER_AGENT, FileConfig};
pub use openai::{OpenAiClient, OpenAiConfig, OpenAiError, OpenAiGateway};
pub use web::{
    FetchConfig, HtmlTextExtractor, HttpPageFetcher, YandexError, YandexSearchClient,
    YandexSearchConfig,
};
