//! Retrieval subdomain: queries, fetched pages and their summaries.

pub mod value_objects;

pub use value_objects::{ContentSummary, PageResult, SearchQuery};
