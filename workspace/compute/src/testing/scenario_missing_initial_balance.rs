use super::helpers::{date, new_account, new_transaction};
use super::{Expectation, TestScenario, TestScenarioBuilder};
use crate::error::ReconcileError;
use model::DateWindowRecord;

/// A supplier record without `initialBalance` is rejected, not read as zero.
pub struct ScenarioMissingInitialBalance {}

impl ScenarioMissingInitialBalance {
    pub fn new() -> Self {
        Self {}
    }
}

impl TestScenarioBuilder for ScenarioMissingInitialBalance {
    fn get_scenario(&self) -> TestScenario {
        let mut account = new_account("0")
            .with_current_balance("97851.32")
            .with_transactions(vec![new_transaction("t1", "2025-10-10", "-100", "Miscellaneous", "Skyler")]);
        account.id = "3".to_string();
        account.initial_balance = None;

        let expectation = Expectation::Failure(ReconcileError::InvalidAmount {
            field: "account 3 initialBalance".to_string(),
            value: "<missing>".to_string(),
        });

        (account, DateWindowRecord::default(), date(2025, 10, 17), expectation)
    }
}
