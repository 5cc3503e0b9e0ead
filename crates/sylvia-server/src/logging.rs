//! Tracing setup.

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber. `RUST_LOG` wins; otherwise the
/// given level applies to the sylvia crates and `info` to the rest.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "info,sylvia_server={level},sylvia_session={level},sylvia_llm={level},sylvia_config={level}"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}
