//! Turns supplier records into validated domain values.
//!
//! Nothing is coerced: a date that does not parse or an amount that is not a
//! finite decimal aborts validation with the offending field and value.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate};
use model::{
    Account, AccountRecord, AmountRecord, DateWindow, DateWindowRecord, Transaction,
    TransactionRecord,
};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

use crate::error::{ReconcileError, Result};

/// Reported as the value of a required field the supplier left out.
pub const MISSING_VALUE: &str = "<missing>";

/// Parses a calendar date.
///
/// Accepts `YYYY-MM-DD` and RFC 3339 date-times; for the latter the calendar
/// date in the value's own offset is used.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate> {
    let trimmed = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(trimmed)
        .map(|dt| dt.date_naive())
        .map_err(|_| ReconcileError::invalid_date(field, value))
}

/// Parses an amount into an exact decimal.
pub fn parse_amount(field: &str, value: &AmountRecord) -> Result<Decimal> {
    match value {
        AmountRecord::Number(number) => {
            if !number.is_finite() {
                return Err(ReconcileError::invalid_amount(field, number.to_string()));
            }
            Decimal::from_f64(*number).ok_or_else(|| ReconcileError::invalid_amount(field, number.to_string()))
        }
        AmountRecord::Text(text) => {
            Decimal::from_str(text.trim()).map_err(|_| ReconcileError::invalid_amount(field, text.clone()))
        }
    }
}

/// Parses an amount the supplier must provide; an absent value is invalid.
pub fn parse_required_amount(field: &str, value: Option<&AmountRecord>) -> Result<Decimal> {
    match value {
        Some(value) => parse_amount(field, value),
        None => Err(ReconcileError::invalid_amount(field, MISSING_VALUE)),
    }
}

/// Validates a single transaction record.
///
/// `fallback_currency` is used when the record carries no currency of its own.
pub fn validate_transaction(record: &TransactionRecord, fallback_currency: &str) -> Result<Transaction> {
    let date = parse_date(&format!("transaction {} date", record.id), &record.date)?;
    let amount = parse_amount(&format!("transaction {} amount", record.id), &record.amount)?;
    let currency = record
        .currency
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(fallback_currency);

    Ok(Transaction::new_with_details(
        record.id.clone(),
        date,
        amount,
        currency.to_uppercase(),
        record.description.clone(),
        record.approver.clone(),
    ))
}

/// Validates an account record and every transaction on it.
///
/// Transactions keep the order in which the supplier delivered them.
pub fn validate_account(record: &AccountRecord, fallback_currency: &str) -> Result<Account> {
    let initial_balance = parse_required_amount(
        &format!("account {} initialBalance", record.id),
        record.initial_balance.as_ref(),
    )?;
    let current_balance =
        parse_required_amount(&format!("account {} balance", record.id), record.current_balance.as_ref())?;
    let currency = record
        .currency
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(fallback_currency)
        .to_uppercase();

    let transactions = record
        .transactions
        .iter()
        .map(|tx| validate_transaction(tx, &currency))
        .collect::<Result<Vec<_>>>()?;

    let mut account = Account::new(
        record.id.clone(),
        record.name.clone(),
        record.account_number.clone(),
        initial_balance,
        currency,
    )
    .with_current_balance(current_balance)
    .with_transactions(transactions);
    account.bank_name = record.bank_name.clone();

    Ok(account)
}

/// Validates the user supplied window bounds. Blank bounds stay unset.
pub fn validate_window(record: &DateWindowRecord) -> Result<DateWindow> {
    let start = record.start().map(|s| parse_date("window.start", s)).transpose()?;
    let end = record.end().map(|e| parse_date("window.end", e)).transpose()?;

    Ok(DateWindow { start, end })
}
