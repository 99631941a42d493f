/// Diagnostic logging to stderr via `tracing`.
use tracing_subscriber::EnvFilter;

/// Default filter without `--verbose`.
const DEFAULT_FILTER: &str = "warn";

/// Filter with `--verbose`: debug events from this crate only.
const VERBOSE_FILTER: &str = "warn,argreport=debug";

/// Install the global subscriber. `RUST_LOG` takes precedence over `verbose`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(false)
        .try_init();
}

fn default_directives(verbose: bool) -> &'static str {
    if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER }
}
