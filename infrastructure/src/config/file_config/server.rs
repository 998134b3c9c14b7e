//! HTTP server configuration from TOML (`[server]` section)

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Listen address, `host:port`.
    pub bind: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8080".to_string(),
        }
    }
}

impl FileServerConfig {
    pub fn parse_bind(&self) -> Option<SocketAddr> {
        self.bind.parse().ok()
    }
}
