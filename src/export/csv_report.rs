use std::io::Write;

use anyhow::{Context, Result};
use common::FormattedStatement;

use super::StatementRenderer;

/// CSV report: a block of account details followed by one line per transaction.
pub struct CsvRenderer;

impl StatementRenderer for CsvRenderer {
    fn render(&self, statement: &FormattedStatement, out: &mut dyn Write) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(out);

        let details = [
            ["Account Name", statement.account_name.as_str()],
            ["Account Number", statement.account_number.as_str()],
            ["Bank", statement.bank_name.as_str()],
            ["Current Balance", statement.current_balance.as_str()],
            ["Currency", statement.currency.as_str()],
            ["Period Start", statement.window_start.as_str()],
            ["Period End", statement.window_end.as_str()],
            ["Opening Balance", statement.opening_balance.as_str()],
            ["Closing Balance", statement.closing_balance.as_str()],
        ];
        for record in details {
            writer.write_record(record).context("CSV write error")?;
        }

        writer
            .write_record(["Date", "Transaction ID", "Description", "Amount", "Type", "Approved By"])
            .context("CSV write error")?;
        for row in &statement.rows {
            writer
                .write_record([&row.date, &row.id, &row.description, &row.amount, &row.indicator, &row.approver])
                .context("CSV write error")?;
        }

        writer.flush().context("CSV write error")?;
        Ok(())
    }

    fn extension(&self) -> &'static str {
        "csv"
    }
}
