use std::io::Write;

use anyhow::Result;
use common::format_currency;
use compute::validate::validate_account;
use tracing::{info, instrument, warn};

use crate::config::AppContext;

/// Prints one card per account: identifier, holder, number, bank and current balance.
#[instrument(skip_all)]
pub fn list_accounts(context: &AppContext, out: &mut dyn Write) -> Result<()> {
    let records = context.source.load()?;
    info!("Listing {} accounts from {}", records.len(), context.config.accounts_path.display());

    if records.is_empty() {
        writeln!(out, "No accounts available.")?;
        return Ok(());
    }

    for record in &records {
        match validate_account(record, context.reconciler.default_currency()) {
            Ok(account) => {
                let bank = account.bank_name.as_deref().unwrap_or("-");
                writeln!(
                    out,
                    "{:<6} {:<20} {:<22} {:<20} {}",
                    account.id,
                    account.name,
                    account.account_number,
                    bank,
                    format_currency(account.current_balance, &account.currency, &context.table)
                )?;
            }
            Err(e) => {
                warn!("Account {} has invalid data: {}", record.id, e);
                writeln!(out, "{:<6} {:<20} unavailable ({})", record.id, record.name, e)?;
            }
        }
    }

    Ok(())
}
