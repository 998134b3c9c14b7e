//! Web search configuration from TOML (`[search]` section)

use serde::{Deserialize, Serialize};

/// Yandex XML search API settings.
///
/// Credentials are read from environment variables only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSearchConfig {
    /// XML search endpoint.
    pub endpoint: String,
    /// Environment variable holding the Yandex Cloud folder id.
    pub folder_id_env: String,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// Ceiling on a single search call, in seconds.
    pub timeout_secs: u64,
    /// Result pages fetched per round.
    pub max_results: usize,
}

impl Default for FileSearchConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://yandex.ru/search/xml".to_string(),
            folder_id_env: "YANDEX_SEARCH_ID".to_string(),
            api_key_env: "YANDEX_SEARCH_SECRET".to_string(),
            timeout_secs: 15,
            max_results: 5,
        }
    }
}

impl FileSearchConfig {
    pub fn resolve_folder_id(&self) -> Option<String> {
        std::env::var(&self.folder_id_env)
            .ok()
            .filter(|v| !v.is_empty())
    }

    pub fn resolve_api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|v| !v.is_empty())
    }
}
