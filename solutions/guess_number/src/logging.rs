use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset: keep the game text clean.
const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Diagnostics go to stderr so they never mix with prompts.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
