pub mod partition;
pub mod window;

use chrono::NaiveDate;
use model::{Account, AccountRecord, DateWindow, DateWindowRecord, Transaction};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::clock::{FixedTimeSource, SystemTimeSource, TimeSource};
use crate::error::{ReconcileError, Result};
use crate::validate::{validate_account, validate_window};

pub use partition::{Partition, partition};
pub use window::{ResolvedWindow, resolve_window};

/// Currency assumed for accounts and transactions that do not name one.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Figures for one account over one window.
///
/// Every view of the history (screen table, exported document) is built from
/// a single instance of this struct so the figures can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReconciliationResult {
    /// The window the figures were computed over, defaults filled in.
    pub window: ResolvedWindow,
    /// Balance immediately before the first in-window transaction.
    pub opening_balance: Decimal,
    /// Balance immediately after the last in-window transaction.
    pub closing_balance: Decimal,
    /// In-window transactions, newest first.
    pub displayed_transactions: Vec<Transaction>,
}

impl ReconciliationResult {
    /// Net movement over the window.
    pub fn net_change(&self) -> Decimal {
        self.closing_balance - self.opening_balance
    }
}

/// A validated account together with its figures for one window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    pub account: Account,
    pub result: ReconciliationResult,
}

/// Computes opening and closing balances of an account over a date window.
pub struct LedgerReconciler {
    time_source: Box<dyn TimeSource + Send + Sync>,
    default_currency: String,
}

impl LedgerReconciler {
    /// Creates a reconciler that asks `time_source` for today's date.
    pub fn new(time_source: Box<dyn TimeSource + Send + Sync>) -> Self {
        Self {
            time_source,
            default_currency: DEFAULT_CURRENCY.to_string(),
        }
    }

    /// Creates a reconciler that treats `today` as the current date.
    pub fn new_with_today(today: NaiveDate) -> Self {
        Self::new(Box::new(FixedTimeSource(today)))
    }

    /// Sets the currency used for records that carry none.
    pub fn with_default_currency(mut self, currency: impl Into<String>) -> Self {
        self.default_currency = currency.into().to_uppercase();
        self
    }

    pub fn default_currency(&self) -> &str {
        &self.default_currency
    }

    pub fn today(&self) -> NaiveDate {
        self.time_source.today()
    }

    /// Validates supplier records and reconciles them.
    ///
    /// The window bounds are checked first, then the account. The first
    /// malformed value fails the whole call; there is no partial result.
    pub fn reconcile(&self, account: &AccountRecord, window: &DateWindowRecord) -> Result<ReconciliationResult> {
        self.reconcile_record(account, window).map(|reconciliation| reconciliation.result)
    }

    /// Like [`LedgerReconciler::reconcile`], but also hands back the
    /// validated account so callers can render it next to the figures.
    pub fn reconcile_record(&self, account: &AccountRecord, window: &DateWindowRecord) -> Result<Reconciliation> {
        let window = validate_window(window)?;
        let account = validate_account(account, &self.default_currency)?;
        let result = self.reconcile_account(&account, &window)?;

        Ok(Reconciliation { account, result })
    }

    /// Reconciles an already validated account.
    pub fn reconcile_account(&self, account: &Account, window: &DateWindow) -> Result<ReconciliationResult> {
        let window = resolve_window(window, self.today())?;
        let split = partition(&account.transactions, &window);

        let opening_balance = checked_total(account.initial_balance, &split.before)?;
        let closing_balance = checked_total(opening_balance, &split.in_window)?;

        let mut displayed_transactions: Vec<Transaction> = split.in_window.into_iter().cloned().collect();
        // sort_by is stable: same-day transactions keep their input order
        displayed_transactions.sort_by(|a, b| b.date().cmp(&a.date()));

        Ok(ReconciliationResult {
            window,
            opening_balance,
            closing_balance,
            displayed_transactions,
        })
    }
}

impl Default for LedgerReconciler {
    fn default() -> Self {
        Self::new(Box::new(SystemTimeSource))
    }
}

fn checked_total(start: Decimal, transactions: &[&Transaction]) -> Result<Decimal> {
    transactions.iter().try_fold(start, |total, tx| {
        total
            .checked_add(tx.amount())
            .ok_or_else(|| ReconcileError::invalid_amount(format!("transaction {} amount", tx.id()), tx.amount().to_string()))
    })
}
