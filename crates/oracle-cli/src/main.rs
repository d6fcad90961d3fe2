//! CLI frontend for The Literary Oracle.

mod card;
mod commands;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "oracle",
    about = "The Literary Oracle — ask a question, receive a sentence",
    version,
    propagate_version = true
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask one question and print the oracle card
    Ask {
        /// The question to ask
        question: String,

        /// Directory containing the corpus and image files
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Output format: text, html, json
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pause before revealing the card, in milliseconds
        #[arg(long, default_value_t = oracle_core::config::DEFAULT_PAUSE_MS)]
        pause_ms: u64,
    },

    /// Ask questions interactively, one per line
    Session {
        /// Directory containing the corpus and image files
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Pause before revealing each card, in milliseconds
        #[arg(long, default_value_t = oracle_core::config::DEFAULT_PAUSE_MS)]
        pause_ms: u64,
    },

    /// Show which data files were found and what they contributed
    Corpus {
        /// Directory containing the corpus and image files
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },

    /// Create a new data directory with sample corpus files
    Init {
        /// Name of the directory to create
        name: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Ask {
            question,
            dir,
            format,
            output,
            pause_ms,
        } => commands::ask::run(&dir, &question, &format, output.as_deref(), pause_ms),
        Commands::Session { dir, pause_ms } => commands::session::run(&dir, pause_ms),
        Commands::Corpus { dir } => commands::corpus::run(&dir),
        Commands::Init { name } => commands::init::run(&name),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Log to stderr. `RUST_LOG` wins over the `-v` count.
fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
