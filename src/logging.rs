//! File-backed `tracing` setup.
//!
//! The terminal belongs to the UI while it runs, so log records go to a file.

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// Install the global subscriber.
///
/// Filter precedence: `--log-level` (already merged into `config`) when
/// given, then `RUST_LOG`, then the configured level.
/// Failing to open the log file disables logging instead of aborting.
pub fn init(config: &Config, level_from_cli: bool) {
    let path = config.log_path();
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Logging disabled: cannot open {}: {e}", path.display());
            return;
        }
    };

    let filter = if level_from_cli {
        EnvFilter::try_new(&config.log_level)
    } else {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.log_level))
    }
    .unwrap_or_else(|_| EnvFilter::new("warn"));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();
    if let Err(e) = result {
        eprintln!("Logging disabled: {e}");
    }
}
