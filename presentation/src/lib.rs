//! Presentation layer for mcq-scout
//!
//! This crate contains CLI definitions, the HTTP API, output formatters
//! and progress reporters.

pub mod cli;
pub mod output;
pub mod progress;
pub mod server;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use server::{AnswerRequest, AnswerResponse, AppState, HealthResponse, router, serve};
