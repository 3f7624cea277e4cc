//! Property tests over randomly generated ledgers.

use chrono::{Duration, NaiveDate};
use model::{Account, DateWindow, Transaction};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::helpers::date;
use crate::error::ReconcileError;
use crate::ledger::{LedgerReconciler, partition, resolve_window};

fn today() -> NaiveDate {
    date(2025, 10, 17)
}

/// Builds an account whose transaction ids are their input positions.
fn build_account(initial_cents: i64, entries: &[(i64, i64)]) -> Account {
    let transactions = entries
        .iter()
        .enumerate()
        .map(|(i, (days_back, cents))| {
            Transaction::new(i.to_string(), today() - Duration::days(*days_back), Decimal::new(*cents, 2), "USD")
        })
        .collect();

    Account::new("prop", "Property", "0000", Decimal::new(initial_cents, 2), "USD").with_transactions(transactions)
}

fn window_strategy() -> impl Strategy<Value = DateWindow> {
    (prop::option::of(0i64..120), prop::option::of(0i64..120)).prop_map(|(start_back, end_back)| {
        let (start_back, end_back) = match (start_back, end_back) {
            // Keep explicit windows well formed; inverted ones have their own property
            (Some(s), Some(e)) if s < e => (Some(e), Some(s)),
            other => other,
        };
        DateWindow {
            start: start_back.map(|d| today() - Duration::days(d)),
            end: end_back.map(|d| today() - Duration::days(d)),
        }
    })
}

fn entries_strategy() -> impl Strategy<Value = Vec<(i64, i64)>> {
    prop::collection::vec((0i64..120, -1_000_000i64..1_000_000i64), 0..60)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Property: every transaction lands in exactly one bucket.
    #[test]
    fn partition_is_complete_and_disjoint(entries in entries_strategy(), window in window_strategy()) {
        let account = build_account(0, &entries);
        let Ok(resolved) = resolve_window(&window, today()) else {
            return Ok(());
        };

        let split = partition(&account.transactions, &resolved);

        prop_assert_eq!(split.len(), account.transactions.len());
        let mut seen: Vec<usize> = split
            .before
            .iter()
            .chain(split.in_window.iter())
            .chain(split.after.iter())
            .map(|t| t.id().parse::<usize>().unwrap())
            .collect();
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..account.transactions.len()).collect::<Vec<_>>());
    }

    /// Property: closing - opening equals the sum of in-window amounts, and
    /// opening equals the initial balance plus everything before the window.
    #[test]
    fn balance_identity_holds(initial in -10_000_000i64..10_000_000i64, entries in entries_strategy(), window in window_strategy()) {
        let account = build_account(initial, &entries);
        let reconciler = LedgerReconciler::new_with_today(today());

        let Ok(result) = reconciler.reconcile_account(&account, &window) else {
            return Ok(());
        };

        let in_window: Decimal = account
            .transactions
            .iter()
            .filter(|t| result.window.contains(t.date()))
            .map(|t| t.amount())
            .sum();
        let before: Decimal = account
            .transactions
            .iter()
            .filter(|t| t.date() < result.window.start)
            .map(|t| t.amount())
            .sum();

        prop_assert_eq!(result.closing_balance - result.opening_balance, in_window);
        prop_assert_eq!(result.opening_balance, account.initial_balance + before);
        let displayed: Decimal = result.displayed_transactions.iter().map(|t| t.amount()).sum();
        prop_assert_eq!(displayed, in_window);
    }

    /// Property: displayed transactions are newest first, and same-day
    /// transactions keep their input order.
    #[test]
    fn displayed_transactions_are_sorted_and_stable(entries in entries_strategy()) {
        let account = build_account(0, &entries);
        let reconciler = LedgerReconciler::new_with_today(today());

        let result = reconciler
            .reconcile_account(&account, &DateWindow::between(today() - Duration::days(119), today()))
            .unwrap();

        prop_assert_eq!(result.displayed_transactions.len(), account.transactions.len());
        for pair in result.displayed_transactions.windows(2) {
            prop_assert!(pair[0].date() >= pair[1].date());
            if pair[0].date() == pair[1].date() {
                let first: usize = pair[0].id().parse().unwrap();
                let second: usize = pair[1].id().parse().unwrap();
                prop_assert!(first < second);
            }
        }
    }

    /// Property: identical inputs give identical results.
    #[test]
    fn reconcile_is_idempotent(initial in -10_000_000i64..10_000_000i64, entries in entries_strategy(), window in window_strategy()) {
        let account = build_account(initial, &entries);
        let reconciler = LedgerReconciler::new_with_today(today());

        prop_assert_eq!(
            reconciler.reconcile_account(&account, &window),
            reconciler.reconcile_account(&account, &window)
        );
    }

    /// Property: an explicit start after an explicit end is always rejected.
    #[test]
    fn inverted_window_is_rejected(entries in entries_strategy(), start_back in 0i64..60, gap in 1i64..60) {
        let account = build_account(0, &entries);
        let start = today() - Duration::days(start_back);
        let end = start - Duration::days(gap);
        let reconciler = LedgerReconciler::new_with_today(today());

        let outcome = reconciler.reconcile_account(&account, &DateWindow::between(start, end));

        prop_assert_eq!(outcome, Err(ReconcileError::InvalidWindow { start, end }));
    }
}
