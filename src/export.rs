//! Renderers for a formatted statement.
//!
//! Every renderer receives the same [`FormattedStatement`], so the screen
//! table and the exported report cannot disagree on a figure.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use clap::ValueEnum;
use common::FormattedStatement;

mod csv_report;
mod json_report;
mod table;

pub use csv_report::CsvRenderer;
pub use json_report::JsonRenderer;
pub use table::TableRenderer;

pub trait StatementRenderer {
    fn render(&self, statement: &FormattedStatement, out: &mut dyn Write) -> Result<()>;

    /// File extension used for reports written by this renderer.
    fn extension(&self) -> &'static str;
}

/// Report formats offered by `txnview export`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn renderer(self) -> Box<dyn StatementRenderer> {
        match self {
            ExportFormat::Csv => Box::new(CsvRenderer),
            ExportFormat::Json => Box::new(JsonRenderer),
        }
    }
}

/// Name of the report file when the user does not pick one.
pub fn default_report_name(today: NaiveDate, renderer: &dyn StatementRenderer) -> String {
    format!("transaction-report-{}.{}", today.format("%Y-%m-%d"), renderer.extension())
}
