use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use model::AccountRecord;
use tracing::{debug, instrument, trace};

/// Delivers account records to the commands.
///
/// Records come back unvalidated; the reconciler reports malformed values.
pub trait AccountSource {
    fn load(&self) -> Result<Vec<AccountRecord>>;
}

/// Reads a JSON array of account records from a file.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl AccountSource for JsonFileSource {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Vec<AccountRecord>> {
        trace!("Opening accounts file");
        let file = File::open(&self.path).with_context(|| format!("Cannot open accounts file {}", self.path.display()))?;

        let records: Vec<AccountRecord> = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Cannot parse accounts file {}", self.path.display()))?;

        debug!("Loaded {} account records", records.len());
        Ok(records)
    }
}

/// Picks the account with identifier `id`.
pub fn find_account(records: Vec<AccountRecord>, id: &str) -> Result<AccountRecord> {
    let id = id.trim();
    match records.into_iter().find(|record| record.id == id) {
        Some(record) => Ok(record),
        None => bail!("Account {id} not found"),
    }
}
