//! Tracing setup for hosts embedding the keymap
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=chordbind::keymap=trace` - every capture hit and miss
//!
//! # Log Files
//!
//! A raw-mode terminal cannot take log lines on stdout/stderr, so logs are
//! written to `~/.config/chordbind/logs/chordbind.log` with daily rotation.
//! When no logs directory can be created, logs go to stderr instead.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize the tracing subscriber.
///
/// `default_level` is used when RUST_LOG is unset. Calling this twice is
/// harmless; the second call leaves the first subscriber in place.
pub fn init(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let (file_layer, stderr_layer) = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "chordbind.log");
            let layer = fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_filter(filter);
            (Some(layer), None)
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            let layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_filter(filter);
            (None, Some(layer))
        }
    };

    let _ = tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .try_init();
}
