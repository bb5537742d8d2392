//! Diagnostic logging setup for the binary.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs a stderr `tracing` subscriber. `RUST_LOG` wins; otherwise
/// `verbose` selects debug output for this crate and warnings for the rest.
pub fn init(verbose: bool) {
    let fallback = if verbose {
        "routeguard_core=debug,routeguard=debug"
    } else {
        "warn"
    };
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
