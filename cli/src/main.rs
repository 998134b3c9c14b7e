//! CLI entrypoint for mcq-scout
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use colored::Colorize;
use scout_application::{AnswerQuestionInput, AnswerQuestionUseCase, RetrievalStage};
use scout_domain::{ConfigIssue, OutputFormat, Severity};
use scout_infrastructure::{
    ConfigLoader, FetchConfig, FileConfig, HtmlTextExtractor, HttpPageFetcher, OpenAiClient,
    OpenAiConfig, OpenAiGateway, YandexSearchClient, YandexSearchConfig,
};
use scout_presentation::{AppState, Cli, Command, ConsoleFormatter, ProgressReporter};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration before logging so [logging] dir is known
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let _log_guard = init_logging(cli.verbose, config.logging.dir.as_deref())?;

    match cli.command {
        Command::ShowConfig => {
            ConfigLoader::print_config_sources(cli.config.as_deref());
            println!();
            println!("{}", toml::to_string_pretty(&config)?);
            report_issues(&config.validate());
        }
        Command::Serve { bind } => {
            let use_case = prepare(&config)?;
            let bind = bind.unwrap_or_else(|| config.server.bind.clone());
            let listener = TcpListener::bind(&bind)
                .await
                .with_context(|| format!("Failed to bind {}", bind))?;

            let app = scout_presentation::router(AppState::new(use_case));
            scout_presentation::serve(listener, app).await?;
        }
        Command::Ask {
            question,
            id,
            output,
        } => {
            let use_case = prepare(&config)?;
            let format = output
                .map(OutputFormat::from)
                .or(config.output.format)
                .unwrap_or_default();

            let input = AnswerQuestionInput::new(id, question.clone());
            let result = if cli.quiet || format == OutputFormat::Json {
                use_case.execute(input).await
            } else {
                let progress = ProgressReporter::new();
                use_case.execute_with_progress(input, &progress).await
            };

            println!("{}", ConsoleFormatter::render(&result, &question, format));
        }
    }

    Ok(())
}

/// Validate the configuration and wire the answering use case
fn prepare(config: &FileConfig) -> Result<AnswerQuestionUseCase<OpenAiGateway>> {
    let issues = config.validate();
    report_issues(&issues);
    if issues.iter().any(ConfigIssue::is_error) {
        bail!("Invalid configuration");
    }

    if !config.output.color {
        colored::control::set_override(false);
    }

    info!(model = %config.llm.model, "Starting mcq-scout");

    // === Dependency Injection ===
    build_use_case(config)
}

fn build_use_case(config: &FileConfig) -> Result<AnswerQuestionUseCase<OpenAiGateway>> {
    let llm = OpenAiConfig::new(
        config.llm.base_url.clone(),
        config.llm.resolve_api_key().unwrap_or_default(),
    )
    .with_temperature(config.llm.temperature)
    .with_timeout(Duration::from_secs(config.llm.timeout_secs));
    let gateway = Arc::new(OpenAiGateway::new(OpenAiClient::new(llm)?));

    let search = YandexSearchClient::new(
        YandexSearchConfig::new(
            config.search.endpoint.clone(),
            config.search.resolve_folder_id().unwrap_or_default(),
            config.search.resolve_api_key().unwrap_or_default(),
        )
        .with_timeout(Duration::from_secs(config.search.timeout_secs)),
    )?;

    let fetcher = HttpPageFetcher::new(
        FetchConfig::new(config.fetch.user_agent.clone())
            .with_timeout(Duration::from_secs(config.fetch.timeout_secs))
            .with_max_redirects(config.fetch.max_redirects)
            .with_max_connections_per_host(config.fetch.max_connections_per_host),
    )?;

    let retrieval = RetrievalStage::new(
        Arc::new(search),
        Arc::new(fetcher),
        Arc::new(HtmlTextExtractor::new()),
    );

    Ok(AnswerQuestionUseCase::new(
        gateway,
        retrieval,
        config.answer_params(),
    ))
}

/// Install the tracing subscriber; the returned guard flushes the log file
fn init_logging(verbose: u8, log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let Some(dir) = log_dir else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
        return Ok(None);
    };

    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let appender = tracing_appender::rolling::daily(dir, "mcq-scout.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();
    Ok(Some(guard))
}

fn report_issues(issues: &[ConfigIssue]) {
    for issue in issues {
        match issue.severity {
            Severity::Error => eprintln!("{} {}", "config error:".red().bold(), issue.message),
            Severity::Warning => {
                eprintln!("{} {}", "config warning:".yellow().bold(), issue.message)
            }
        }
    }
}
