use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn";

/// Route diagnostics to stderr; stdout carries the progress report.
/// `RUST_LOG` overrides the default filter.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub fn log_error(prefix: &str, e: &dyn std::error::Error) {
    tracing::error!("{}: {}", prefix, e);
}
