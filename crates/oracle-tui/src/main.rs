//! Standalone TUI binary for The Literary Oracle.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use oracle_core::{Oracle, OracleConfig};

#[derive(Parser)]
#[command(
    name = "oracle-tui",
    about = "Terminal widget for The Literary Oracle",
    version
)]
struct Args {
    /// Directory containing the corpus and image files
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Pause before revealing each card, in milliseconds
    #[arg(long, default_value_t = oracle_core::config::DEFAULT_PAUSE_MS)]
    pause_ms: u64,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = init_tracing(&args.dir) {
        eprintln!("warning: logging disabled: {e}");
    }

    let config = OracleConfig::default()
        .with_data_dir(&args.dir)
        .with_pause_ms(args.pause_ms);

    let oracle = match Oracle::from_config(&config) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    let app = oracle_tui::app::OracleApp::new(oracle, config.pause);

    if let Err(e) = oracle_tui::terminal::run(app) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Log to `oracle-tui.log` in the data directory, only when `RUST_LOG` is set.
/// The terminal itself belongs to the UI.
fn init_tracing(dir: &Path) -> Result<(), String> {
    let Ok(filter) = EnvFilter::try_from_default_env() else {
        return Ok(());
    };

    let log_file = File::create(dir.join("oracle-tui.log")).map_err(|e| e.to_string())?;
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber).map_err(|e| e.to_string())
}
