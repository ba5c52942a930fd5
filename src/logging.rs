//! Structured logging setup
//!
//! Output goes to stderr. The UI shell calls `init` once at startup;
//! RUST_LOG takes priority over the level passed in.

use tracing_subscriber::EnvFilter;

/// Default level when neither RUST_LOG nor an explicit level is given
const DEFAULT_LOG_LEVEL: &str = "info";

/// Initialise the logging subsystem.
///
/// Calling this more than once is a no-op (the second `init` would panic,
/// so `try_init` is used and its error discarded).
pub fn init(level: Option<&str>) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(level.unwrap_or(DEFAULT_LOG_LEVEL))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init();

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        "logging initialised"
    );
}
