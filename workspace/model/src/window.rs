use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A caller-supplied date filter. Either bound may be left open, in which
/// case the reconciler substitutes its default window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateWindow {
    /// A window with no bounds set.
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }
}

/// A date filter as typed by the user, before parsing.
///
/// An empty or whitespace-only bound is the same as no bound: a cleared date
/// input submits `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindowRecord {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

impl DateWindowRecord {
    pub fn new(start: Option<&str>, end: Option<&str>) -> Self {
        Self {
            start: start.map(str::to_string),
            end: end.map(str::to_string),
        }
    }

    /// Gets the start bound, treating blank input as unset.
    pub fn start(&self) -> Option<&str> {
        non_blank(self.start.as_deref())
    }

    /// Gets the end bound, treating blank input as unset.
    pub fn end(&self) -> Option<&str> {
        non_blank(self.end.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
