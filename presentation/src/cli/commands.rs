//! CLI command definitions

use clap::Parser;
use interview_domain::{Difficulty, InterviewMode, ProviderKind};
use std::path::PathBuf;

/// CLI arguments for pressure-interview
#[derive(Parser, Debug)]
#[command(name = "pressure-interview")]
#[command(author, version, about = "Pressure interview simulator - rehearse with an AI interviewer panel")]
#[command(long_about = r#"
Pressure Interview runs a mock Korean public-sector interview in your terminal.

A panel of interviewer personas (chairperson, technical expert, stress
interviewer, ...) is drawn for the chosen difficulty. Each question is asked by
its persona, your typed answers are timed and checked for filler words, and
a feedback report with scores is generated at the end.

Configuration files are loaded from (in priority order):
1. PRESSURE_INTERVIEW_* environment variables
2. --config <path>       Explicit config file
3. ./interview.toml      Project-level config
4. ~/.config/pressure-interview/config.toml   Global config

Example:
  pressure-interview
  pressure-interview --difficulty hard --mode public-corp -n 5
  pressure-interview --provider anthropic --model claude-sonnet-4-20250514
"#)]
pub struct Cli {
    /// Difficulty tier: easy, medium, hard
    #[arg(short, long, value_name = "LEVEL")]
    pub difficulty: Option<Difficulty>,

    /// Interview mode: public-servant, public-corp, mixed
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<InterviewMode>,

    /// Number of questions to ask
    #[arg(short = 'n', long, value_name = "N")]
    pub questions: Option<usize>,

    /// Backend: ollama, anthropic
    #[arg(short, long, value_name = "PROVIDER")]
    pub provider: Option<ProviderKind>,

    /// Model name for the selected backend
    #[arg(long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Disable the per-answer time limit
    #[arg(long)]
    pub no_time_limit: bool,

    /// Seed for panel and question selection (reproducible sessions)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Append the interview transcript to a JSONL file
    #[arg(long, value_name = "PATH")]
    pub conversation_log: Option<PathBuf>,

    /// Write diagnostic logs to a file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
