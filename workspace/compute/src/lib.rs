pub mod clock;
pub mod error;
pub mod ledger;
pub mod validate;


use chrono::NaiveDate;

pub use clock::{FixedTimeSource, SystemTimeSource, TimeSource};
pub use error::{ReconcileError, Result};
pub use ledger::{LedgerReconciler, Partition, Reconciliation, ReconciliationResult, ResolvedWindow};

/// Returns the reconciler used by the command line tools.
///
/// This function uses the provided date as "today", or the system clock if
/// none is provided.
pub fn default_reconciler(today: Option<NaiveDate>) -> LedgerReconciler {
    match today {
        Some(today) => LedgerReconciler::new_with_today(today),
        None => LedgerReconciler::new(Box::new(SystemTimeSource)),
    }
}
