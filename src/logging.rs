//! Diagnostic logging setup

use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber
///
/// Logs go to stderr so `list` output on stdout stays clean. `RUST_LOG`
/// takes precedence over the level chosen by `--verbose`.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // A second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "bundlehost=debug,info"
    } else {
        "info"
    }
}
