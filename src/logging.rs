//! Diagnostic logging
//!
//! Logs go to stderr so that usage text on stdout stays clean.

use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Maps the `-v` count onto a default filter directive.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// A valid `RUST_LOG` wins; anything else falls back to the verbosity level.
pub fn build_filter(rust_log: Option<&str>, verbosity: u8) -> EnvFilter {
    rust_log
        .and_then(|filter| EnvFilter::try_new(filter).ok())
        .unwrap_or_else(|| EnvFilter::new(default_directive(verbosity)))
}

/// Install the global subscriber. Installing twice is a no-op.
pub fn init_tracing(verbosity: u8) {
    use tracing_subscriber::{fmt, prelude::*};

    let rust_log = std::env::var("RUST_LOG").ok();
    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(build_filter(rust_log.as_deref(), verbosity))
        .with(fmt_layer)
        .try_init();

    if let Some(filter) = rust_log.filter(|filter| EnvFilter::try_new(filter).is_err()) {
        warn!(%filter, "ignoring invalid RUST_LOG");
    }
}
