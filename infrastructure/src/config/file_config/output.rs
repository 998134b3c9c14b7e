//! Output configuration from TOML (`[output]` section)

use scout_domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// Raw output configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Default format of `ask` when `-o` is not given
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}
