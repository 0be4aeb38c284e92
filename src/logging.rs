use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. `RUST_LOG` is only honored when debug
/// logging is enabled; otherwise the level is pinned to `info`.
pub fn init(debug: bool) {
    let level = if debug { "debug" } else { "info" };

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    // A host may already own the global subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init();
}
