use tracing_subscriber::EnvFilter;

/// Initializes the logging system.
///
/// All diagnostics go to stderr; stdout is reserved for emitted song
/// records. Respects RUST_LOG if set.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("nowplaying_scraper=info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
