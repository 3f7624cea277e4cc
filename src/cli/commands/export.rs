use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, instrument};

use super::build_statement;
use crate::cli::StatementArgs;
use crate::config::AppContext;
use crate::export::{ExportFormat, default_report_name};

/// Writes the statement as a report.
///
/// `output` of `-` sends the report to `out`; no output writes
/// `transaction-report-<today>.<ext>` in the working directory.
#[instrument(skip(context, out))]
pub fn export_statement(
    context: &AppContext,
    args: &StatementArgs,
    format: ExportFormat,
    output: Option<&Path>,
    out: &mut dyn Write,
) -> Result<()> {
    let statement = build_statement(context, args, None)?;
    let renderer = format.renderer();

    let path = match output {
        Some(path) if path == Path::new("-") => {
            debug!("Writing report to stdout");
            return renderer.render(&statement, out);
        }
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(default_report_name(context.reconciler.today(), renderer.as_ref())),
    };

    let file = File::create(&path).with_context(|| format!("Cannot create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    renderer.render(&statement, &mut writer)?;
    writer.flush().with_context(|| format!("Cannot write {}", path.display()))?;

    info!("Report for account {} written to {}", args.account, path.display());
    writeln!(out, "Report written to {}", path.display())?;
    Ok(())
}
