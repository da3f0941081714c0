//! Tracing subscriber setup for the `share` binary.
//!
//! Logs go to stderr so stdout carries only command output. `RUST_LOG`
//! overrides the defaults.

use std::io::IsTerminal;
use tracing_subscriber::{fmt, EnvFilter};

fn default_directives(verbose: bool) -> String {
    if verbose {
        "warn,syrins_share=debug,share=debug".to_string()
    } else {
        "warn,syrins_share=info".to_string()
    }
}

/// Install the global subscriber. Call once, before loading configuration.
pub fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {}", e))
}
