use std::io::Write;

use anyhow::Result;
use common::{FormattedRow, FormattedStatement};

use super::StatementRenderer;

const HEADERS: [&str; 6] = ["Date", "Transaction ID", "Description", "Amount", "Type", "Approved By"];

/// Plain-text history for the terminal.
pub struct TableRenderer;

impl StatementRenderer for TableRenderer {
    fn render(&self, statement: &FormattedStatement, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", statement.account_name)?;
        if statement.bank_name.is_empty() {
            writeln!(out, "Account {}", statement.account_number)?;
        } else {
            writeln!(out, "Account {} ({})", statement.account_number, statement.bank_name)?;
        }
        writeln!(out, "Current balance: {}", statement.current_balance)?;
        writeln!(out)?;
        writeln!(out, "Transactions from {} to {}", statement.window_start, statement.window_end)?;
        writeln!(out, "Opening balance: {}", statement.opening_balance)?;
        writeln!(out, "Closing balance: {}", statement.closing_balance)?;
        writeln!(out)?;

        if statement.rows.is_empty() {
            writeln!(out, "No transactions in this period.")?;
            return Ok(());
        }

        let widths = column_widths(&statement.rows);
        let header: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
        write_line(out, &header, &widths)?;
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        write_line(out, &rule, &widths)?;

        for row in &statement.rows {
            write_line(out, &cells(row), &widths)?;
        }

        Ok(())
    }

    fn extension(&self) -> &'static str {
        "txt"
    }
}

fn cells(row: &FormattedRow) -> Vec<String> {
    vec![
        row.date.clone(),
        row.id.clone(),
        row.description.clone(),
        row.amount.clone(),
        row.indicator.clone(),
        row.approver.clone(),
    ]
}

fn column_widths(rows: &[FormattedRow]) -> Vec<usize> {
    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(cells(row)) {
            *width = (*width).max(cell.chars().count());
        }
    }
    widths
}

fn write_line(out: &mut dyn Write, cells: &[String], widths: &[usize]) -> Result<()> {
    let line = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(column, (cell, &width))| {
            // Amounts line up on the right
            if column == 3 {
                format!("{cell:>width$}")
            } else {
                format!("{cell:<width$}")
            }
        })
        .collect::<Vec<_>>()
        .join("  ");

    writeln!(out, "{}", line.trim_end())?;
    Ok(())
}
