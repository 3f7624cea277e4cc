use chrono::NaiveDate;
use thiserror::Error;

/// Error types for the reconciliation engine.
///
/// Every variant is caused by malformed input. Nothing here is transient,
/// so callers should surface the error rather than retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReconcileError {
    /// A transaction date or a window bound is not a calendar date
    #[error("Invalid date in {field}: {value:?}")]
    InvalidDate { field: String, value: String },

    /// An amount or balance is not a finite decimal
    #[error("Invalid amount in {field}: {value:?}")]
    InvalidAmount { field: String, value: String },

    /// The window start lies after its end
    #[error("Invalid window: start {start} is after end {end}")]
    InvalidWindow { start: NaiveDate, end: NaiveDate },
}

impl ReconcileError {
    pub(crate) fn invalid_date(field: impl Into<String>, value: impl Into<String>) -> Self {
        ReconcileError::InvalidDate {
            field: field.into(),
            value: value.into(),
        }
    }

    pub(crate) fn invalid_amount(field: impl Into<String>, value: impl Into<String>) -> Self {
        ReconcileError::InvalidAmount {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Type alias for Result with ReconcileError
pub type Result<T> = std::result::Result<T, ReconcileError>;
