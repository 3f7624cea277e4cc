pub mod account;
pub mod transaction;
pub mod window;

pub use account::{Account, AccountRecord};
pub use transaction::{AmountRecord, Transaction, TransactionRecord};
pub use window::{DateWindow, DateWindowRecord};

// Re-export tracing for use in this crate
pub use tracing;

/// Initialize tracing for binaries.
///
/// The log level is controlled via the RUST_LOG environment variable and
/// defaults to `warn` so command output stays readable.
pub fn init_tracing() {
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Logs go to stderr so that exported documents written to stdout stay clean
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .try_init();
}
