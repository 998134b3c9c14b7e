//! Log file configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Directory for daily-rolling log files; console only when unset.
    pub dir: Option<PathBuf>,
}
