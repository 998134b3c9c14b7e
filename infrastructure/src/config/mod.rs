//! Configuration file loading for mcq-scout
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `SCOUT_<SECTION>__<KEY>` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./scout.toml` or `./.scout.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/mcq-scout/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    DEFAULT_USER_AGENT, FileAnswerConfig, FileConfig, FileFetchConfig, FileLlmConfig,
    FileLoggingConfig, FileOutputConfig, FileSearchConfig, FileServerConfig,
};
pub use loader::ConfigLoader;
