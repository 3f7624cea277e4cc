use super::helpers::{date, new_account, new_transaction};
use super::{Expectation, TestScenario, TestScenarioBuilder};
use crate::error::ReconcileError;
use model::DateWindowRecord;

/// Start after end is rejected even though every record is well formed.
pub struct ScenarioInvertedWindow {}

impl ScenarioInvertedWindow {
    pub fn new() -> Self {
        Self {}
    }
}

impl TestScenarioBuilder for ScenarioInvertedWindow {
    fn get_scenario(&self) -> TestScenario {
        let account = new_account("1000").with_transactions(vec![new_transaction(
            "TNX0098765432",
            "2025-10-11",
            "-14000",
            "Operations Batch salary",
            "Jesse Pinkman",
        )]);
        let window = DateWindowRecord::new(Some("2025-10-16"), Some("2025-10-07"));

        let expectation = Expectation::Failure(ReconcileError::InvalidWindow {
            start: date(2025, 10, 16),
            end: date(2025, 10, 7),
        });

        (account, window, date(2025, 10, 17), expectation)
    }
}
