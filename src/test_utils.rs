use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::config::{AppConfig, AppContext, build_context};
use crate::supplier::JsonFileSource;

/// Path of the bundled account fixtures.
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures").join("accounts.json")
}

/// Context over the bundled fixtures with `today` pinned.
pub fn fixture_context(today: NaiveDate) -> AppContext {
    let config = AppConfig {
        accounts_path: fixture_path(),
        ..AppConfig::default()
    };
    let source = Box::new(JsonFileSource::new(config.accounts_path.clone()));

    build_context(config, source, Some(today)).expect("Failed to build test context")
}

/// Initialize tracing for tests with output to STDERR.
///
/// The log level is determined by the RUST_LOG environment variable,
/// defaulting to WARN if not set.
///
/// # Returns
///
/// A guard that will clean up the subscriber when dropped.
pub fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| match level.to_uppercase().as_str() {
            "ERROR" => Some(Level::ERROR),
            "WARN" => Some(Level::WARN),
            "INFO" => Some(Level::INFO),
            "DEBUG" => Some(Level::DEBUG),
            "TRACE" => Some(Level::TRACE),
            _ => None,
        })
        .unwrap_or(Level::WARN);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr) // Output to stderr, which is captured by tests
        .finish();
    tracing::subscriber::set_default(subscriber)
}
