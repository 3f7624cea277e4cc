pub mod accounts;
pub mod export;
pub mod history;

pub use accounts::list_accounts;
pub use export::export_statement;
pub use history::show_history;

use anyhow::{Context, Result};
use common::{FormattedStatement, StatementView};
use model::DateWindowRecord;
use tracing::{debug, error, trace};

use crate::cli::StatementArgs;
use crate::config::AppContext;
use crate::supplier::find_account;

/// Loads the selected account, reconciles it and formats the result.
///
/// This is the only place a statement is computed; every command renders
/// what it returns.
pub(crate) fn build_statement(
    context: &AppContext,
    args: &StatementArgs,
    display_currency: Option<&str>,
) -> Result<FormattedStatement> {
    trace!("Loading account records");
    let record = find_account(context.source.load()?, &args.account)?;
    let window = DateWindowRecord::new(args.start.as_deref(), args.end.as_deref());

    let reconciliation = match context.reconciler.reconcile_record(&record, &window) {
        Ok(reconciliation) => reconciliation,
        Err(e) => {
            error!("Failed to reconcile account {}: {}", args.account, e);
            return Err(e).with_context(|| format!("Cannot show account {}", args.account));
        }
    };
    debug!(
        "Window {} to {}: {} transactions, opening {}, closing {}",
        reconciliation.result.window.start,
        reconciliation.result.window.end,
        reconciliation.result.displayed_transactions.len(),
        reconciliation.result.opening_balance,
        reconciliation.result.closing_balance
    );

    let mut view = StatementView::build(&reconciliation.account, &reconciliation.result);
    if let Some(target) = display_currency {
        debug!("Converting figures from {} to {} for display", view.currency, target);
        view = view
            .convert_for_display(&context.rates, target)
            .with_context(|| format!("Cannot display account {} in {}", args.account, target))?;
    }

    Ok(view.format(&context.table))
}
