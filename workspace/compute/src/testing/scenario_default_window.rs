use rust_decimal::Decimal;

use super::helpers::{date, days_before, new_account, new_transaction};
use super::{Expectation, TestScenario, TestScenarioBuilder};
use model::DateWindowRecord;

/// No window given: only the last month is shown, older activity is folded
/// into the opening balance.
pub struct ScenarioDefaultWindow {}

impl ScenarioDefaultWindow {
    pub fn new() -> Self {
        Self {}
    }
}

impl TestScenarioBuilder for ScenarioDefaultWindow {
    fn get_scenario(&self) -> TestScenario {
        let today = date(2025, 10, 17);

        let account = new_account("1000").with_transactions(vec![
            new_transaction("D-40", &days_before(today, 40), "500", "Refund", "Skyler"),
            new_transaction("D-10", &days_before(today, 10), "-200", "Operations Batch salary", "Jesse Pinkman"),
            new_transaction("D-1", &days_before(today, 1), "50", "Interest", "Mr.White"),
        ]);

        // Default start is 2025-09-17, so D-40 (2025-09-07) is before the window
        // Opening: 1000 + 500 = 1500
        // Closing: 1500 - 200 + 50 = 1350
        let expectation = Expectation::Figures {
            opening_balance: Decimal::new(1500, 0),
            closing_balance: Decimal::new(1350, 0),
            displayed_ids: vec!["D-1", "D-10"],
        };

        (account, DateWindowRecord::default(), today, expectation)
    }
}
