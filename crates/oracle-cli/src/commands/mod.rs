pub mod ask;
pub mod corpus;
pub mod init;
pub mod session;

use std::path::Path;
use std::thread;

use colored::Colorize;
use tracing::debug;

use oracle_core::copy;
use oracle_core::{Oracle, OracleConfig};

/// Configuration for a data directory and reveal pause.
fn config(dir: &Path, pause_ms: u64) -> OracleConfig {
    OracleConfig::default()
        .with_data_dir(dir)
        .with_pause_ms(pause_ms)
}

/// Load the oracle for a data directory through the process-wide cache.
fn load_oracle(config: &OracleConfig) -> Result<Oracle, String> {
    debug!(dir = %config.data_dir.display(), "loading oracle data");
    Oracle::from_config(config).map_err(|e| e.to_string())
}

/// Show the page-turning message and wait, if a pause is configured.
fn turn_page(config: &OracleConfig) {
    if config.pause.is_zero() {
        return;
    }
    eprintln!("  {}", copy::TURNING_PAGE.dimmed());
    thread::sleep(config.pause);
}
