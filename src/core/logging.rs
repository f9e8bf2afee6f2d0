//! Log setup
//!
//! The terminal is owned by the menu, so log records go to a file instead of
//! stderr. The level comes from `RUST_LOG` and defaults to `info`.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Install the global subscriber writing to `path`
///
/// Returns false when the log file cannot be opened or a subscriber is
/// already installed; the loader then runs without logging.
pub fn init(path: &Path) -> bool {
    let file = match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => file,
        Err(_) => return false,
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .is_ok()
}
