//! CLI entrypoint for pressure-interview
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;
use interview_application::InterviewOrchestrator;
use interview_domain::{ConfigIssue, InterviewContext, Severity};
use interview_infrastructure::{ConfigLoader, FileConfig, JsonlConversationLogger, build_gateway};
use interview_presentation::{Cli, ConsoleFormatter, InterviewRepl, SessionSettings};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = init_tracing(cli.verbose, cli.log_file.as_deref())?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    info!("Starting pressure-interview");

    // === Configuration ===
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };
    report_issues(&file_config.check()?);

    let context = InterviewContext::builtin();
    let catalog_issues = context.validate();
    report_issues(&catalog_issues);
    if catalog_issues.iter().any(|i| i.severity == Severity::Error) {
        bail!("Built-in interview catalogs are inconsistent");
    }

    if cli.no_color || !file_config.output.color {
        colored::control::set_override(false);
    }

    let settings = session_settings(&cli, &file_config);
    let mut providers = file_config.providers.to_provider_config().0;
    if let Some(kind) = cli.provider {
        providers.default = kind;
    }
    if let Some(model) = &cli.model {
        providers.set_active_model(model.clone());
    }

    // === Dependency Injection ===
    let gateway = build_gateway(&providers, file_config.generation.timeout())?;

    let mut orchestrator = InterviewOrchestrator::new(gateway, Arc::new(context))
        .with_params(file_config.generation.to_params());

    let log_path = cli
        .conversation_log
        .clone()
        .or_else(|| file_config.output.conversation_log.clone());
    if let Some(path) = log_path {
        match JsonlConversationLogger::open(&path) {
            Some(logger) => {
                info!("Conversation log: {}", path.display());
                orchestrator = orchestrator.with_conversation_logger(Arc::new(logger));
            }
            None => warn!("Conversation log disabled: cannot open {}", path.display()),
        }
    }

    let mut repl = InterviewRepl::new(orchestrator, settings);
    let outcome = repl.run().await?;
    info!(
        "Session finished: {} answers, {} turns, concluded={}",
        outcome.report.answers.len(),
        outcome.turns,
        outcome.concluded
    );

    Ok(())
}

/// Install the tracing subscriber, writing to `log_file` when given.
fn init_tracing(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .with_context(|| format!("Invalid log file path: {}", path.display()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file_name));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Ok(Some(guard))
}

/// Merge file settings with CLI overrides.
fn session_settings(cli: &Cli, config: &FileConfig) -> SessionSettings {
    let session = &config.session;
    let difficulty = cli.difficulty.unwrap_or_else(|| session.parse_difficulty().0);
    let mode = cli.mode.unwrap_or_else(|| session.parse_mode().0);
    let time_limit_secs = if cli.no_time_limit {
        None
    } else {
        session.time_limit_for(difficulty)
    };

    SessionSettings {
        difficulty,
        mode,
        max_questions: cli.questions.unwrap_or(session.max_questions).max(1),
        time_limit_secs,
        seed: cli.seed,
        show_progress: !cli.quiet,
    }
}

fn report_issues(issues: &[ConfigIssue]) {
    for issue in issues {
        match issue.severity {
            Severity::Warning => eprintln!("{} {}", "Warning:".yellow().bold(), issue.message),
            Severity::Error => eprintln!("{}", ConsoleFormatter::error(&issue.message)),
        }
    }
}
