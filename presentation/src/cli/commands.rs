//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for `ask`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored, human-readable answer
    Pretty,
    /// The answer result as JSON
    Json,
}

impl From<OutputFormat> for scout_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Pretty => scout_domain::OutputFormat::Pretty,
            OutputFormat::Json => scout_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for mcq-scout
#[derive(Parser, Debug)]
#[command(name = "mcq-scout")]
#[command(author, version, about = "Answer multiple-choice questions from live web evidence")]
#[command(long_about = r#"
mcq-scout answers multiple-choice questions by searching the web, summarizing
what it finds and picking an option only when a source states it verbatim.

Each round has four steps:
1. Query: the model writes (or rewrites) a search query
2. Retrieve: search results are fetched and cleaned concurrently
3. Summarize: each page is condensed to the facts relevant to the question
4. Synthesize: an option is chosen, or none if the evidence is not exact

Rounds repeat with a refined query until the answer is clear (at most 4).

Configuration files are loaded from (in priority order):
1. SCOUT_<SECTION>__<KEY>   Environment overrides
2. --config <path>          Explicit config file
3. ./scout.toml             Project-level config
4. ~/.config/mcq-scout/config.toml   Global config

Example:
  mcq-scout serve --bind 127.0.0.1:8080
  mcq-scout ask "When is event X held in 2025? 1. Jan 1  2. Jan 2"
  mcq-scout ask -o json --id 7 "Who founded Y? 1. A 2. B 3. C"
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP API (POST /api/request, GET /health)
    Serve {
        /// Listen address, overrides [server] bind
        #[arg(long, value_name = "ADDR")]
        bind: Option<String>,
    },

    /// Answer a single question and print the result
    Ask {
        /// Question text with numbered options
        question: String,

        /// Request id echoed in the result
        #[arg(long, default_value_t = 0)]
        id: i64,

        /// Output format, overrides [output] format
        #[arg(short, long, value_enum)]
        output: Option<OutputFormat>,
    },

    /// Show configuration file locations and the effective configuration
    ShowConfig,
}
