//! The statement shown on screen and written to exported documents.
//!
//! A [`StatementView`] is built once from a [`ReconciliationResult`]; every
//! renderer reads from it, so the screen and the export always show the same
//! figures.

use chrono::NaiveDate;
use compute::{ReconciliationResult, ResolvedWindow};
use model::Account;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::currency::{CurrencyError, CurrencyTable, format_currency, format_magnitude};
use crate::exchange::ExchangeRates;

/// Whether a row added money to the account or took it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EntryKind {
    Credit,
    Debit,
}

impl EntryKind {
    pub fn of(amount: Decimal) -> Self {
        if amount.is_sign_negative() && !amount.is_zero() {
            EntryKind::Debit
        } else {
            EntryKind::Credit
        }
    }

    /// Short indicator printed next to the amount.
    pub fn indicator(&self) -> &'static str {
        match self {
            EntryKind::Credit => "CR",
            EntryKind::Debit => "DR",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementHeader {
    pub account_id: String,
    pub account_name: String,
    pub account_number: String,
    pub bank_name: Option<String>,
    pub current_balance: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementRow {
    pub date: NaiveDate,
    pub id: String,
    pub description: String,
    pub approver: String,
    /// Signed amount, in `currency`.
    pub amount: Decimal,
    pub currency: String,
}

impl StatementRow {
    pub fn kind(&self) -> EntryKind {
        EntryKind::of(self.amount)
    }
}

/// Everything a renderer needs, still as exact values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatementView {
    pub header: StatementHeader,
    /// Currency the balances are expressed in.
    pub currency: String,
    pub window: ResolvedWindow,
    pub opening_balance: Decimal,
    pub closing_balance: Decimal,
    /// Rows in display order, newest first.
    pub rows: Vec<StatementRow>,
}

impl StatementView {
    /// Builds the view for `account` from an already computed result.
    pub fn build(account: &Account, result: &ReconciliationResult) -> Self {
        let rows = result
            .displayed_transactions
            .iter()
            .map(|tx| StatementRow {
                date: tx.date(),
                id: tx.id().to_string(),
                description: tx.description().to_string(),
                approver: tx.approver().to_string(),
                amount: tx.amount(),
                currency: tx.currency().to_string(),
            })
            .collect();

        Self {
            header: StatementHeader {
                account_id: account.id.clone(),
                account_name: account.name.clone(),
                account_number: account.account_number.clone(),
                bank_name: account.bank_name.clone(),
                current_balance: account.current_balance,
            },
            currency: account.currency.clone(),
            window: result.window,
            opening_balance: result.opening_balance,
            closing_balance: result.closing_balance,
            rows,
        }
    }

    /// Returns a copy with every figure converted into `target` for display.
    ///
    /// The view this is called on is left untouched.
    pub fn convert_for_display(&self, rates: &ExchangeRates, target: &str) -> Result<Self, CurrencyError> {
        let target = target.trim().to_uppercase();
        let convert = |amount: Decimal| rates.convert(amount, &self.currency, &target);

        let rows = self
            .rows
            .iter()
            .map(|row| {
                Ok(StatementRow {
                    amount: rates.convert(row.amount, &row.currency, &target)?,
                    currency: target.clone(),
                    ..row.clone()
                })
            })
            .collect::<Result<Vec<_>, CurrencyError>>()?;

        Ok(Self {
            header: StatementHeader {
                current_balance: convert(self.header.current_balance)?,
                ..self.header.clone()
            },
            currency: target.clone(),
            window: self.window,
            opening_balance: convert(self.opening_balance)?,
            closing_balance: convert(self.closing_balance)?,
            rows,
        })
    }

    /// Turns every figure into display text using `table`.
    pub fn format(&self, table: &CurrencyTable) -> FormattedStatement {
        FormattedStatement {
            account_id: self.header.account_id.clone(),
            account_name: self.header.account_name.clone(),
            account_number: self.header.account_number.clone(),
            bank_name: self.header.bank_name.clone().unwrap_or_default(),
            currency: self.currency.clone(),
            current_balance: format_currency(self.header.current_balance, &self.currency, table),
            window_start: self.window.start.format("%Y-%m-%d").to_string(),
            window_end: self.window.end.format("%Y-%m-%d").to_string(),
            opening_balance: format_currency(self.opening_balance, &self.currency, table),
            closing_balance: format_currency(self.closing_balance, &self.currency, table),
            rows: self
                .rows
                .iter()
                .map(|row| FormattedRow {
                    date: row.date.format("%Y-%m-%d").to_string(),
                    id: row.id.clone(),
                    description: row.description.clone(),
                    approver: row.approver.clone(),
                    amount: format_magnitude(row.amount, &row.currency, table),
                    indicator: row.kind().indicator().to_string(),
                })
                .collect(),
        }
    }
}

/// Display text for one statement; what renderers actually print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedStatement {
    pub account_id: String,
    pub account_name: String,
    pub account_number: String,
    pub bank_name: String,
    pub currency: String,
    pub current_balance: String,
    pub window_start: String,
    pub window_end: String,
    pub opening_balance: String,
    pub closing_balance: String,
    pub rows: Vec<FormattedRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedRow {
    pub date: String,
    pub id: String,
    pub description: String,
    pub approver: String,
    /// Absolute amount with its currency symbol.
    pub amount: String,
    /// `CR` or `DR`.
    pub indicator: String,
}
