//! Diagnostics setup for the binary using `tracing_subscriber`.
//!
//! Events go to stderr so they never mix with command output. `RUST_LOG` wins
//! when set; otherwise warnings and errors are shown, or library debug events with `--verbose`.

use tracing_subscriber::EnvFilter;

pub fn setup_logging(verbose: bool) {
    let directives = if verbose { "stockroom=debug" } else { "warn" };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
