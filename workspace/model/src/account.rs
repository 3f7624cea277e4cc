use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::transaction::{AmountRecord, Transaction, TransactionRecord};

/// Represents a bank account together with its full transaction history.
///
/// `current_balance` is the balance reported by the data source as of now.
/// It is never derived from the transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub account_number: String,
    pub bank_name: Option<String>,
    pub initial_balance: Decimal,
    pub current_balance: Decimal,
    /// ISO 4217 currency code, e.g., "USD", "INR".
    pub currency: String,
    /// Transactions in the order the supplier delivered them.
    pub transactions: Vec<Transaction>,
}

impl Account {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        account_number: impl Into<String>,
        initial_balance: Decimal,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            account_number: account_number.into(),
            bank_name: None,
            initial_balance,
            current_balance: initial_balance,
            currency: currency.into(),
            transactions: Vec::new(),
        }
    }

    /// Returns the account with the given transactions attached.
    pub fn with_transactions(mut self, transactions: Vec<Transaction>) -> Self {
        self.transactions = transactions;
        self
    }

    pub fn with_current_balance(mut self, current_balance: Decimal) -> Self {
        self.current_balance = current_balance;
        self
    }

    pub fn with_bank_name(mut self, bank_name: impl Into<String>) -> Self {
        self.bank_name = Some(bank_name.into());
        self
    }
}

/// Unvalidated account as the supplier delivers it.
///
/// Field names follow the camelCase shape of the account fixtures
/// (`accountNumber`, `initialBalance`, `balance`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    #[serde(deserialize_with = "id_from_text_or_number")]
    pub id: String,
    pub name: String,
    pub account_number: String,
    #[serde(default)]
    pub bank_name: Option<String>,
    /// `None` when the supplier left the field out; validation rejects that.
    #[serde(default)]
    pub initial_balance: Option<AmountRecord>,
    #[serde(rename = "balance", default)]
    pub current_balance: Option<AmountRecord>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub transactions: Vec<TransactionRecord>,
}

/// Fixture files use both `"id": 1` and `"id": "acc-1"`.
fn id_from_text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string(),
    })
}

impl AccountRecord {
    /// Creates a record whose current balance starts equal to `initial_balance`.
    pub fn new(id: impl Into<String>, name: impl Into<String>, initial_balance: impl Into<AmountRecord>) -> Self {
        let initial_balance = initial_balance.into();
        Self {
            id: id.into(),
            name: name.into(),
            account_number: String::new(),
            bank_name: None,
            current_balance: Some(initial_balance.clone()),
            initial_balance: Some(initial_balance),
            currency: None,
            transactions: Vec::new(),
        }
    }

    pub fn with_transactions(mut self, transactions: Vec<TransactionRecord>) -> Self {
        self.transactions = transactions;
        self
    }

    pub fn with_current_balance(mut self, current_balance: impl Into<AmountRecord>) -> Self {
        self.current_balance = Some(current_balance.into());
        self
    }
}
