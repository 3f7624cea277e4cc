use chrono::{Months, NaiveDate};
use model::DateWindow;
use serde::Serialize;

use crate::error::{ReconcileError, Result};

/// An inclusive date range with both bounds known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl ResolvedWindow {
    /// Returns true when `date` lies inside the window, bounds included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Returns the date one calendar month before `today`.
///
/// Days past the end of the shorter month are clamped, so 31 March gives
/// the last day of February.
pub fn one_month_before(today: NaiveDate) -> NaiveDate {
    today.checked_sub_months(Months::new(1)).unwrap_or(NaiveDate::MIN)
}

/// Fills unset bounds with the default window `[today - 1 month, today]`
/// and rejects windows whose start lies after their end.
pub fn resolve_window(window: &DateWindow, today: NaiveDate) -> Result<ResolvedWindow> {
    let start = window.start.unwrap_or_else(|| one_month_before(today));
    let end = window.end.unwrap_or(today);

    if start > end {
        return Err(ReconcileError::InvalidWindow { start, end });
    }

    Ok(ResolvedWindow { start, end })
}
