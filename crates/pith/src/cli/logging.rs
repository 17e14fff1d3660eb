//! Tracing setup for the CLI.
//!
//! The filter comes from `RUST_LOG` when set, otherwise from `-v` flags, otherwise from the
//! `[log] level` setting. Events go to stderr so they never mix with selected text.

use std::io;

use pith_config::DEFAULT_LOG_LEVEL;
use tracing_subscriber::EnvFilter;

/// Picks the filter directive for the given verbosity and configured level.
pub fn filter_directive(verbose: u8, configured: &str) -> String {
    match verbose {
        0 => configured.to_string(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Installs the global tracing subscriber.
pub fn init(verbose: u8, configured: &str) {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(filter_directive(verbose, configured))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL)),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
