use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a single posted transaction on an account.
///
/// The `amount` is signed and already expresses the effect on the balance:
/// credits are positive, debits are negative. Nothing downstream re-signs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    id: String,
    date: NaiveDate,
    amount: Decimal,
    description: String,
    approver: String,
    currency: String,
}

impl Transaction {
    /// Creates a new Transaction without description or approver.
    pub fn new(id: impl Into<String>, date: NaiveDate, amount: Decimal, currency: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            date,
            amount,
            description: String::new(),
            approver: String::new(),
            currency: currency.into(),
        }
    }

    /// Creates a new Transaction with its description and approver.
    pub fn new_with_details(
        id: impl Into<String>,
        date: NaiveDate,
        amount: Decimal,
        currency: impl Into<String>,
        description: impl Into<String>,
        approver: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            amount,
            description: description.into(),
            approver: approver.into(),
            currency: currency.into(),
        }
    }

    /// Gets the transaction identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Gets the booking date of the transaction.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Gets the signed amount of the transaction.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Gets the name of whoever approved the transaction.
    pub fn approver(&self) -> &str {
        &self.approver
    }

    /// Gets the ISO currency code the amount is expressed in.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Returns true when the transaction increases the balance.
    pub fn is_credit(&self) -> bool {
        self.amount >= Decimal::ZERO
    }
}

/// An amount as delivered by a data source: either a JSON number or a decimal string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmountRecord {
    Number(f64),
    Text(String),
}

impl From<f64> for AmountRecord {
    fn from(value: f64) -> Self {
        AmountRecord::Number(value)
    }
}

impl From<&str> for AmountRecord {
    fn from(value: &str) -> Self {
        AmountRecord::Text(value.to_string())
    }
}

/// Unvalidated transaction exactly as it arrives from the account supplier.
///
/// Dates stay strings here so that a malformed value reaches the reconciler
/// and is reported instead of being dropped during deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub id: String,
    pub date: String,
    pub amount: AmountRecord,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub approver: String,
    #[serde(default)]
    pub currency: Option<String>,
}

impl TransactionRecord {
    pub fn new(id: impl Into<String>, date: impl Into<String>, amount: impl Into<AmountRecord>) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            amount: amount.into(),
            description: String::new(),
            approver: String::new(),
            currency: None,
        }
    }
}
