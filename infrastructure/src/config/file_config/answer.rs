//! Answering loop configuration from TOML (`[answer]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAnswerConfig {
    /// Maximum rounds before giving up (default: 4).
    pub max_rounds: usize,
    /// Cleaned page text is truncated to this many characters.
    pub max_page_chars: usize,
    /// Page text sent to the summarizer is capped at this many characters.
    pub summary_input_chars: usize,
}

impl Default for FileAnswerConfig {
    fn default() -> Self {
        Self {
            max_rounds: 4,
            max_page_chars: 1000,
            summary_input_chars: 5000,
        }
    }
}
