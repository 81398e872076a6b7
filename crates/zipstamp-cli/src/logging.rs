//! Tracing subscriber setup.
//!
//! Diagnostics go to stderr so that stdout stays parseable with `--json`.

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `-v` enables debug events and the
/// default shows errors only, since retention warnings are also reported by
/// the output formatter.
pub fn init(verbose: bool, quiet: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet))),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

const fn default_directive(verbose: bool, quiet: bool) -> &'static str {
    if quiet {
        "off"
    } else if verbose {
        "debug"
    } else {
        "error"
    }
}
