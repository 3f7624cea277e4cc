use rust_decimal::Decimal;

use super::helpers::date;
use super::{Expectation, ScenarioSalaryBatches, TestScenario, TestScenarioBuilder};
use model::DateWindowRecord;

/// The salary batch account filtered to August only. October activity lies
/// after the window and must not reach either balance.
pub struct ScenarioExplicitWindow {}

impl ScenarioExplicitWindow {
    pub fn new() -> Self {
        Self {}
    }
}

impl TestScenarioBuilder for ScenarioExplicitWindow {
    fn get_scenario(&self) -> TestScenario {
        let (account, _, _, _) = ScenarioSalaryBatches::new().get_scenario();
        let window = DateWindowRecord::new(Some("2025-08-01"), Some("2025-08-31"));

        let expectation = Expectation::Figures {
            opening_balance: Decimal::new(170_000, 0),
            closing_balance: Decimal::new(160_000, 0),
            displayed_ids: vec!["TNX008922875820"],
        };

        (account, window, date(2025, 10, 17), expectation)
    }
}
