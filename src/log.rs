// src/log.rs
//
// Logging goes through `tracing`. The short macros below keep call sites
// terse; `init` wires a subscriber that appends to .store/debug.log.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{
    filter::LevelFilter,
    fmt::{self, time::uptime},
    prelude::*,
    EnvFilter,
};

use crate::config::consts::{LOG_FILE, STORE_DIR};

/// Install the global subscriber.
///
/// - file layer: `.store/debug.log`, level from `RUST_LOG` (default `info`)
/// - `echo_stderr`: also print warnings and errors to stderr (CLI)
///
/// Safe to call more than once; later calls are ignored.
pub fn init(echo_stderr: bool) {
    let _ = fs::create_dir_all(STORE_DIR);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(Path::new(LOG_FILE))
        .ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = file.map(|f| {
        fmt::layer()
            .with_writer(Mutex::new(f))
            .with_ansi(false)
            .with_target(false)
            .with_timer(uptime())
    });

    let stderr_layer = echo_stderr.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .with_filter(LevelFilter::WARN)
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init();
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Warn-level logging
#[macro_export]
macro_rules! logw {
    ($($arg:tt)*) => {
        ::tracing::warn!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
