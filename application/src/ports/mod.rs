//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod llm_gateway;
pub mod page_fetcher;
pub mod progress;
pub mod text_extractor;
pub mod web_search;
