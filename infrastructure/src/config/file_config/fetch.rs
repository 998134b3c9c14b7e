//! Page fetch configuration from TOML (`[fetch]` section)

use serde::{Deserialize, Serialize};

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFetchConfig {
    /// Per-page request timeout in seconds.
    pub timeout_secs: u64,
    /// Browser-like User-Agent; many sites refuse obvious bots.
    pub user_agent: String,
    /// Redirects followed before giving up.
    pub max_redirects: usize,
    /// Concurrent connections allowed to one host.
    pub max_connections_per_host: usize,
}

impl Default for FileFetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_redirects: 10,
            max_connections_per_host: 50,
        }
    }
}
