use std::io::Write;

use anyhow::{Context, Result};
use common::FormattedStatement;

use super::StatementRenderer;

pub struct JsonRenderer;

impl StatementRenderer for JsonRenderer {
    fn render(&self, statement: &FormattedStatement, out: &mut dyn Write) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, statement).context("JSON write error")?;
        writeln!(out)?;
        Ok(())
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}
