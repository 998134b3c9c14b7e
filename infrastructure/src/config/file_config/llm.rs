//! Language model configuration from TOML (`[llm]` section)

use serde::{Deserialize, Serialize};

/// OpenAI-compatible chat completions endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLlmConfig {
    /// Base URL of the API, without the `/chat/completions` suffix.
    pub base_url: String,
    /// Model id used for every stage.
    pub model: String,
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key; prefer the environment variable.
    pub api_key: Option<String>,
    /// Per-call timeout in seconds.
    pub timeout_secs: u64,
    /// Sampling temperature; provider default when unset.
    pub temperature: Option<f32>,
}

impl Default for FileLlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            timeout_secs: 60,
            temperature: None,
        }
    }
}

impl FileLlmConfig {
    /// Inline key first, then the configured environment variable.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.is_empty())
            .or_else(|| std::env::var(&self.api_key_env).ok())
            .filter(|k| !k.is_empty())
    }
}
