use model::Transaction;

use super::window::ResolvedWindow;

/// Transactions split by their position relative to a window.
///
/// Every input transaction lands in exactly one bucket, and each bucket keeps
/// the input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition<'a> {
    pub before: Vec<&'a Transaction>,
    pub in_window: Vec<&'a Transaction>,
    pub after: Vec<&'a Transaction>,
}

impl Partition<'_> {
    /// Total number of transactions across all three buckets.
    pub fn len(&self) -> usize {
        self.before.len() + self.in_window.len() + self.after.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Splits `transactions` into before, inside, and after `window`.
pub fn partition<'a>(transactions: &'a [Transaction], window: &ResolvedWindow) -> Partition<'a> {
    let mut result = Partition::default();

    for tx in transactions {
        if tx.date() < window.start {
            result.before.push(tx);
        } else if tx.date() > window.end {
            result.after.push(tx);
        } else {
            result.in_window.push(tx);
        }
    }

    result
}
