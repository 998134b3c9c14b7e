//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application types.

mod answer;
mod fetch;
mod llm;
mod logging;
mod output;
mod search;
mod server;

pub use answer::FileAnswerConfig;
pub use fetch::{DEFAULT_USER_AGENT, FileFetchConfig};
pub use llm::FileLlmConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use search::FileSearchConfig;
pub use server::FileServerConfig;

use scout_application::AnswerParams;
use scout_domain::{ConfigIssue, ConfigIssueCode, Model};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Language model endpoint
    pub llm: FileLlmConfig,
    /// Web search backend
    pub search: FileSearchConfig,
    /// Page fetching
    pub fetch: FileFetchConfig,
    /// Answering loop limits
    pub answer: FileAnswerConfig,
    /// HTTP server
    pub server: FileServerConfig,
    /// Log files
    pub logging: FileLoggingConfig,
    /// Terminal output
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Errors make the configuration unusable; warnings (missing secrets)
    /// only mean some calls will fail at runtime.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        for (field, value) in [
            ("answer.max_rounds", self.answer.max_rounds),
            ("answer.max_page_chars", self.answer.max_page_chars),
            ("answer.summary_input_chars", self.answer.summary_input_chars),
            ("search.max_results", self.search.max_results),
            ("fetch.max_connections_per_host", self.fetch.max_connections_per_host),
        ] {
            if value == 0 {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::ZeroValue {
                        field: field.to_string(),
                    },
                    format!("{} must be greater than 0", field),
                ));
            }
        }

        for (field, value) in [
            ("llm.timeout_secs", self.llm.timeout_secs),
            ("search.timeout_secs", self.search.timeout_secs),
            ("fetch.timeout_secs", self.fetch.timeout_secs),
        ] {
            if value == 0 {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::ZeroValue {
                        field: field.to_string(),
                    },
                    format!("{} cannot be 0", field),
                ));
            }
        }

        for (field, value) in [
            ("llm.model", &self.llm.model),
            ("llm.base_url", &self.llm.base_url),
            ("search.endpoint", &self.search.endpoint),
        ] {
            if value.trim().is_empty() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyValue {
                        field: field.to_string(),
                    },
                    format!("{} cannot be empty", field),
                ));
            }
        }

        if self.server.parse_bind().is_none() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidValue {
                    field: "server.bind".to_string(),
                    value: self.server.bind.clone(),
                },
                format!(
                    "server.bind: '{}' is not a socket address (expected host:port)",
                    self.server.bind
                ),
            ));
        }

        if self.llm.resolve_api_key().is_none() {
            issues.push(missing_secret(&self.llm.api_key_env, "language model calls"));
        }
        if self.search.resolve_folder_id().is_none() {
            issues.push(missing_secret(&self.search.folder_id_env, "web search"));
        }
        if self.search.resolve_api_key().is_none() {
            issues.push(missing_secret(&self.search.api_key_env, "web search"));
        }

        issues
    }

    /// Loop parameters for the answering use case.
    pub fn answer_params(&self) -> AnswerParams {
        AnswerParams::default()
            .with_model(Model::new(self.llm.model.trim()))
            .with_max_rounds(self.answer.max_rounds)
            .with_max_results(self.search.max_results)
            .with_max_page_chars(self.answer.max_page_chars)
            .with_summary_input_chars(self.answer.summary_input_chars)
            .with_model_timeout(Some(Duration::from_secs(self.llm.timeout_secs)))
    }
}

fn missing_secret(env: &str, purpose: &str) -> ConfigIssue {
    ConfigIssue::warning(
        ConfigIssueCode::MissingSecret {
            env: env.to_string(),
        },
        format!("{} is not set; {} will fail", env, purpose),
    )
}
