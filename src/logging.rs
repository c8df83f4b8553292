//! Tracing subscriber setup for the binary

use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::Verbosity;

/// Install a stderr subscriber. `RUST_LOG` overrides the verbosity level.
///
/// Returns false when a global subscriber was already installed.
pub fn init_logging(verbosity: Verbosity) -> bool {
    let default_level = verbosity.filter_directive();
    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok();

    // An existing subscriber keeps its filter; later calls are no-ops
    if installed {
        debug!(verbosity = verbosity.as_str(), "logging initialised");
    }
    installed
}
