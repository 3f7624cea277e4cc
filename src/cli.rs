use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

pub mod commands;

use commands::{export_statement, list_accounts, show_history};

use crate::config::initialize_app_context;
use crate::export::ExportFormat;

#[derive(Parser)]
#[command(name = "txnview")]
#[command(about = "Account transaction history with opening and closing balances")]
#[command(version)]
pub struct Cli {
    /// Path to the JSON file with the account records
    ///
    /// Overrides `accounts_path` from the configuration file.
    #[arg(long, global = true, env = "TXNVIEW_ACCOUNTS")]
    pub accounts: Option<PathBuf>,

    /// Path to a TOML configuration file
    ///
    /// When omitted, `txnview.toml` in the working directory is used if it exists.
    #[arg(long, global = true, env = "TXNVIEW_CONFIG")]
    pub config: Option<PathBuf>,

    /// Treat this date (YYYY-MM-DD) as today instead of reading the system clock
    #[arg(long, global = true)]
    pub today: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Account and window selection shared by every statement command.
#[derive(Args, Debug, Clone)]
pub struct StatementArgs {
    /// Account identifier as listed by `txnview accounts`
    #[arg(short, long)]
    pub account: String,

    /// First day of the window (YYYY-MM-DD); defaults to one month before today
    #[arg(short, long)]
    pub start: Option<String>,

    /// Last day of the window (YYYY-MM-DD); defaults to today
    #[arg(short, long)]
    pub end: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the available accounts
    Accounts,
    /// Show the transaction history of one account
    History {
        #[command(flatten)]
        statement: StatementArgs,

        /// Show every figure converted into this currency
        ///
        /// Conversion uses the configured exchange rates and only affects
        /// what is displayed.
        #[arg(long)]
        display_currency: Option<String>,
    },
    /// Write the transaction history of one account as a report
    ///
    /// Examples:
    ///   txnview export --account 4 --format csv
    ///   txnview export --account 4 --start 2025-08-01 --end 2025-08-31 --format json --output -
    Export {
        #[command(flatten)]
        statement: StatementArgs,

        /// Report format
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,

        /// Output file, or `-` for stdout
        ///
        /// Defaults to `transaction-report-<today>.<ext>` in the working directory.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let context = initialize_app_context(self.config.as_deref(), self.accounts, self.today)?;

        let stdout = std::io::stdout();
        let mut out = stdout.lock();

        match self.command {
            Commands::Accounts => {
                list_accounts(&context, &mut out)?;
            }
            Commands::History { statement, display_currency } => {
                show_history(&context, &statement, display_currency.as_deref(), &mut out)?;
            }
            Commands::Export { statement, format, output } => {
                export_statement(&context, &statement, format, output.as_deref(), &mut out)?;
            }
        }

        out.flush()?;
        Ok(())
    }
}
