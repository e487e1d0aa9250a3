//! Luyện CLI - TOEIC grammar practice client.
//!
//! Provides commands for:
//! - `topics`: list grammar topics
//! - `summary`: render a topic summary to an HTML fragment
//! - `exam`: start, answer and submit practice exams
//! - `history`, `review`, `performance`, `insights`: results and analytics

mod commands;
mod error;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use luyen_config::{CliSettings, Config};

use commands::{Context, ExamCommand, ReviewArgs, SummaryArgs};
use error::CliError;
use output::Output;

/// Luyện - TOEIC grammar practice.
#[derive(Parser)]
#[command(name = "luyen", version, about)]
struct Cli {
    /// Path to configuration file (default: auto-discover luyen.toml).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// API base URL (overrides config).
    #[arg(long, global = true, env = "LUYEN_API_URL")]
    api_url: Option<String>,

    /// Request timeout in seconds (overrides config).
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// Data directory for session state (overrides config).
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable verbose output (show request logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List grammar topics.
    Topics,
    /// Render a topic summary to an HTML fragment.
    Summary(SummaryArgs),
    /// Exam session commands.
    #[command(subcommand)]
    Exam(ExamCommand),
    /// List past exam sessions.
    History,
    /// Review a graded exam with explanations.
    Review(ReviewArgs),
    /// Show per-topic performance.
    Performance,
    /// Show AI study guidance.
    Insights,
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // Initialize tracing with appropriate log level
    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(err) = run(cli) {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let cli_settings = CliSettings {
        api_url: cli.api_url,
        timeout_secs: cli.timeout_secs,
        data_dir: cli.data_dir,
    };
    let config = Config::load(cli.config.as_deref(), Some(&cli_settings))?;
    let ctx = Context {
        config,
        output: Output::new(),
    };

    match cli.command {
        Commands::Topics => commands::topics::execute(&ctx),
        Commands::Summary(args) => args.execute(&ctx),
        Commands::Exam(command) => command.execute(&ctx),
        Commands::History => commands::history::execute(&ctx),
        Commands::Review(args) => args.execute(&ctx),
        Commands::Performance => commands::performance::execute(&ctx),
        Commands::Insights => commands::insights::execute(&ctx),
    }
}
