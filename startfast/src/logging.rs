//! Diagnostic logging for the command line.
//!
//! Events go to stderr so that `--json` and `--dry-run` output on stdout
//! stays clean. `RUST_LOG` takes precedence over `--verbose`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

// Directive targets match by prefix, so these cover every startfast crate.
const DEFAULT_FILTER: &str = "startfast=warn";
const VERBOSE_FILTER: &str = "startfast=debug";

pub fn init(verbose: bool) {
    let fallback = if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}
