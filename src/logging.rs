//! Tracing subscriber setup
//!
//! The selector owns the terminal and stdout carries the chosen path, so log
//! output is appended to a file instead of either standard stream.

use crate::config::BkConfig;
use std::fs::{self, OpenOptions};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber described by `config`
///
/// Does nothing when the level is `off`, no log file location is known, or the
/// file cannot be opened. Safe to call more than once; only the first
/// successful call takes effect.
pub fn init_tracing(config: &BkConfig) {
    let level = config.log_level();
    if level.eq_ignore_ascii_case("off") {
        return;
    }

    let Some(log_file) = config.log_file() else {
        return;
    };
    if let Some(parent) = log_file.parent()
        && fs::create_dir_all(parent).is_err()
    {
        return;
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_file) else {
        return;
    };

    let filter = EnvFilter::try_new(level)
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_LEVEL));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();

    tracing::debug!(path = ?log_file, level, "tracing initialized");
}
