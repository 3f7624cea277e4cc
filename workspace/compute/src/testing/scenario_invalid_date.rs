use super::helpers::{date, new_account, new_transaction};
use super::{Expectation, TestScenario, TestScenarioBuilder};
use crate::error::ReconcileError;
use model::DateWindowRecord;

/// One unparsable date fails the whole account instead of being skipped.
pub struct ScenarioInvalidDate {}

impl ScenarioInvalidDate {
    pub fn new() -> Self {
        Self {}
    }
}

impl TestScenarioBuilder for ScenarioInvalidDate {
    fn get_scenario(&self) -> TestScenario {
        let account = new_account("1000").with_transactions(vec![
            new_transaction("TNX005298076301", "2025-10-07", "-11380", "Managerial Batch salary", "Jane Margolis"),
            new_transaction("TNX003591878654", "13/10/2025", "-76860", "Executives Salary", "Mr.White"),
            new_transaction("TNX008922875820", "2025-10-16", "-42500", "Miscellaneous", "Skyler"),
        ]);

        let expectation = Expectation::Failure(ReconcileError::InvalidDate {
            field: "transaction TNX003591878654 date".to_string(),
            value: "13/10/2025".to_string(),
        });

        (account, DateWindowRecord::default(), date(2025, 10, 17), expectation)
    }
}
