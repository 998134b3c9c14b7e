//! Web adapters: search, page fetching and text extraction

pub mod extract;
pub mod fetch;
pub mod yandex;

pub use extract::{HtmlTextExtractor, html_to_text};
pub use fetch::{FetchConfig, HttpPageFetcher};
pub use yandex::{YandexError, YandexSearchClient, YandexSearchConfig};
