//! Time sources for resolving the default window.
//!
//! The reconciler never reads the wall clock directly; it asks a
//! [`TimeSource`] so that tests and the `--today` override stay deterministic.

use chrono::{NaiveDate, Utc};

/// Something that knows what "today" is.
pub trait TimeSource {
    fn today(&self) -> NaiveDate;
}

/// Reads the current UTC date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Always answers with the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTimeSource(pub NaiveDate);

impl TimeSource for FixedTimeSource {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
