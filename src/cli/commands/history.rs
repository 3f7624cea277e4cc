use std::io::Write;

use anyhow::Result;
use tracing::{info, instrument};

use super::build_statement;
use crate::cli::StatementArgs;
use crate::config::AppContext;
use crate::export::{StatementRenderer, TableRenderer};

#[instrument(skip(context, out))]
pub fn show_history(
    context: &AppContext,
    args: &StatementArgs,
    display_currency: Option<&str>,
    out: &mut dyn Write,
) -> Result<()> {
    info!("Showing history of account {}", args.account);
    let statement = build_statement(context, args, display_currency)?;
    TableRenderer.render(&statement, out)
}
