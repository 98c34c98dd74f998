//! Dotlog - append-only personal note log with shell-action rendering
//!
//! Entry point: parses the command line, initialises logging to stderr so
//! stdout stays pipeable into a shell, resolves configuration once, and
//! dispatches to the command handlers.

use clap::{Parser, Subcommand};
use dotlog_core::config::Config;
use dotlog_core::error::Result;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "dotlog")]
#[command(about = "Append-only personal note log with a token-query language", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Set log level
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// Note root directory (overrides DOTLOG_ROOT env var and ~/me default)
    #[arg(long, env = "DOTLOG_ROOT")]
    root: Option<String>,

    /// Store file path (overrides DOTLOG_STORE env var and <root>/db.json)
    #[arg(long, env = "DOTLOG_STORE")]
    store: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Query notes and print shell-executable lines
    ///
    /// Tokens: plain words filter by substring; "." scopes to the current
    /// project, ".X" to paths containing X; "~" keeps the last 31 days;
    /// "!" keeps one row per project; "S"/"O"/"C"/"R"/"A" pick the render
    /// mode (cd / open / copy / raw / add)
    Find {
        /// Free-text query tokens
        #[arg(trailing_var_arg = true)]
        tokens: Vec<String>,
    },

    /// Add a note under the current project
    Add {
        /// Note text (joined with spaces)
        #[arg(trailing_var_arg = true, required = true)]
        tokens: Vec<String>,
    },

    /// Rebuild the store from legacy per-directory logs plus the current store
    Migrate,

    /// Print shell alias definitions for fzf-driven querying
    Alias,
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout is reserved for renderable output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(cli.log_level.clone())),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(cli) {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::resolve(cli.root, cli.store);

    match cli.command {
        Commands::Find { tokens } => cli::find::handle(&config, &tokens),
        Commands::Add { tokens } => cli::add::handle(&config, &tokens),
        Commands::Migrate => cli::migrate::handle(&config),
        Commands::Alias => cli::alias::handle(),
    }
}
