//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order
const PROJECT_CONFIG_FILES: [&str; 2] = ["scout.toml", ".scout.toml"];

/// Prefix of environment overrides (`SCOUT_ANSWER__MAX_ROUNDS=2`)
const ENV_PREFIX: &str = "SCOUT_";

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables `SCOUT_<SECTION>__<KEY>`
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./scout.toml` or `./.scout.toml`
    /// 4. XDG config: `$XDG_CONFIG_HOME/mcq-scout/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&Path>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(
            Self::global_config_path().as_deref(),
            Path::new("."),
            config_path,
        )
        .extract()
        .map_err(Box::new)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Build the merged provider chain without extracting it.
    pub fn figment(
        global_path: Option<&Path>,
        project_dir: &Path,
        config_path: Option<&Path>,
    ) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = global_path
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        if let Some(project_path) = Self::find_project_config(project_dir) {
            figment = figment.merge(Toml::file(project_path));
        }

        // An explicit path that does not exist is an error, not a silent skip.
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file_exact(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/mcq-scout/config.toml if set,
    /// otherwise the platform config directory.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("mcq-scout").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        Self::find_project_config(Path::new("."))
    }

    fn find_project_config(dir: &Path) -> Option<PathBuf> {
        PROJECT_CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&Path>) {
        println!("Configuration sources (in priority order):");

        println!("  [     ] Environment: {}<SECTION>__<KEY>", ENV_PREFIX);

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{:^5}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./scout.toml or ./.scout.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}
