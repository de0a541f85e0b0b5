use tracing_subscriber::EnvFilter;

use crate::options::Verbosity;

/// Install the stderr log subscriber. `RUST_LOG` overrides the level.
pub fn init_tracing(verbosity: Verbosity, ansi: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(verbosity == Verbosity::Verbose)
        .without_time()
        .init();
}
