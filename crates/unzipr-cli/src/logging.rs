//! Diagnostic logging to stderr.

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// `--verbose` forces `debug`; otherwise `RUST_LOG` is honored and falls back
/// to `warn`. `--quiet` installs nothing.
pub fn init(verbose: bool, quiet: bool) {
    if quiet {
        return;
    }

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .try_init();
}
