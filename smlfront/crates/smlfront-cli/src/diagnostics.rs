//! Logging setup (§6 "Logging/diagnostics"). The core crates don't log —
//! this is CLI-only instrumentation of the pipeline stages.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Installs a `tracing` subscriber writing to stderr. `RUST_LOG` wins when
/// set; otherwise `--verbose` selects `debug`, and its absence `info`.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "debug" } else { "info" })
    });

    let subscriber = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init();
}
