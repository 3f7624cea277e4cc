use chrono::{Duration, NaiveDate};
use model::{AccountRecord, TransactionRecord};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn days_before(today: NaiveDate, days: i64) -> String {
    (today - Duration::days(days)).format("%Y-%m-%d").to_string()
}

pub fn new_account(initial_balance: &str) -> AccountRecord {
    let mut account = AccountRecord::new("4", "Alex Kumar", initial_balance);
    account.account_number = "4412 1234 7890 6753".to_string();
    account.currency = Some("USD".to_string());
    account
}

pub fn new_transaction(id: &str, date: &str, amount: &str, description: &str, approver: &str) -> TransactionRecord {
    TransactionRecord {
        description: description.to_string(),
        approver: approver.to_string(),
        ..TransactionRecord::new(id, date, amount)
    }
}
