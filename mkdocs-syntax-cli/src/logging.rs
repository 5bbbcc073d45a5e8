//! Log setup for the CLI.
//!
//! Logs go to stderr so stdout carries only the report. The level comes from
//! `-v` alone; the environment is never consulted.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Map the `-v` count to a log level.
#[must_use]
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install the global subscriber.
///
/// If a subscriber is already installed, the existing one is kept and the
/// conflict is logged through it at debug level.
pub fn init(verbose: u8) {
    // Library and binary share the `mkdocs_syntax` target prefix.
    let filter = EnvFilter::new(format!("mkdocs_syntax={}", level_for(verbose)));
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
    {
        tracing::debug!(error = %e, "log subscriber already installed");
    }
}
