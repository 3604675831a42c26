use tracing_subscriber::EnvFilter;

/// Initializes tracing for the CLI.
///
/// `RUST_LOG` overrides the default `info` filter, e.g.
/// `RUST_LOG=booking_core=debug` to watch the engine recompute.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
