use rust_decimal::Decimal;

use super::helpers::{date, new_account, new_transaction};
use super::{Expectation, TestScenario, TestScenarioBuilder};
use model::DateWindowRecord;

/// Transactions dated exactly one month before today and exactly today are
/// both inside the default window.
pub struct ScenarioWindowEdges {}

impl ScenarioWindowEdges {
    pub fn new() -> Self {
        Self {}
    }
}

impl TestScenarioBuilder for ScenarioWindowEdges {
    fn get_scenario(&self) -> TestScenario {
        let account = new_account("1000").with_transactions(vec![
            new_transaction("day-before-start", "2025-09-16", "5", "Refund", "Jane Margolis"),
            new_transaction("on-start", "2025-09-17", "10", "Refund", "Jane Margolis"),
            new_transaction("on-today", "2025-10-17", "20", "Refund", "Jesse Pinkman"),
            new_transaction("tomorrow", "2025-10-18", "40", "Refund", "Jesse Pinkman"),
        ]);

        // Default window 2025-09-17 ..= 2025-10-17
        let expectation = Expectation::Figures {
            opening_balance: Decimal::new(1005, 0),
            closing_balance: Decimal::new(1035, 0),
            displayed_ids: vec!["on-today", "on-start"],
        };

        (account, DateWindowRecord::new(None, None), date(2025, 10, 17), expectation)
    }
}
