//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for answers printed by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable, colored output (default)
    #[default]
    Pretty,
    /// The answer result as pretty-printed JSON
    Json,
}
