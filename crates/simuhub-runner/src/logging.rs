//! Structured logging setup for the `simuhub` binary.
//!
//! Logs go to stderr so command output on stdout stays machine-readable.

use crate::config::LoggingConfig;
use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Filter used when `--verbose` is passed
pub const VERBOSE_FILTER: &str = "simuhub=debug,simuhub_runner=debug,simuhub_calculator=debug";

/// Picks the filter directive: `RUST_LOG` wins, then `--verbose`, then config.
pub fn filter_directive(
    config: &LoggingConfig,
    verbose: bool,
    rust_log: Option<String>,
) -> String {
    match rust_log {
        Some(directive) if !directive.trim().is_empty() => directive,
        _ if verbose => VERBOSE_FILTER.to_string(),
        _ => config.filter.clone(),
    }
}

/// Installs the global tracing subscriber. Call once, before any work.
pub fn init(config: &LoggingConfig, verbose: bool) -> Result<()> {
    let directive = filter_directive(config, verbose, std::env::var("RUST_LOG").ok());
    let filter = EnvFilter::try_new(&directive)
        .map_err(|err| anyhow!("invalid log filter '{directive}': {err}"))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|err| anyhow!("failed to install tracing subscriber: {err}"))
}
