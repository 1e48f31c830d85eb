//! Logging for the command-line shell.
//!
//! Events go to stderr so `--json` output on stdout stays machine readable.
//! The filter comes from `RUST_LOG` (default `warn`); `--verbose` forces
//! `trace`, which includes every computed recipe.

use std::io;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Install the global subscriber. Call once, before any calculation.
pub fn init_logging(verbose: bool) {
    let env_filter = if verbose {
        EnvFilter::new("trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}
