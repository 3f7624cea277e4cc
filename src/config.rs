use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use common::{CurrencyTable, DEFAULT_SYMBOL, ExchangeRates};
use compute::{LedgerReconciler, default_reconciler};
use config::{Config, Environment, File};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, info, instrument};

use crate::supplier::{AccountSource, JsonFileSource};

/// Configuration file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "txnview.toml";

/// Settings read from defaults, an optional TOML file and `TXNVIEW_*` variables.
///
/// Map keys (currency codes) are matched case-insensitively; the config
/// layer lowercases them on the way in.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub accounts_path: PathBuf,
    /// Symbol printed for currencies missing from `currencies`.
    pub default_symbol: String,
    /// Currency of accounts and transactions that do not name one.
    pub default_currency: String,
    /// Currency code to display symbol.
    pub currencies: BTreeMap<String, String>,
    /// Units of each currency per one unit of a common base.
    pub exchange_rates: BTreeMap<String, Decimal>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            accounts_path: PathBuf::from("accounts.json"),
            default_symbol: DEFAULT_SYMBOL.to_string(),
            default_currency: compute::ledger::DEFAULT_CURRENCY.to_string(),
            currencies: BTreeMap::from([
                ("INR".to_string(), "₹".to_string()),
                ("USD".to_string(), "$".to_string()),
            ]),
            exchange_rates: BTreeMap::from([
                ("INR".to_string(), Decimal::new(88, 0)),
                ("USD".to_string(), Decimal::ONE),
            ]),
        }
    }
}

impl AppConfig {
    pub fn currency_table(&self) -> CurrencyTable {
        CurrencyTable::from_map(self.default_symbol.clone(), self.currencies.clone())
    }

    pub fn exchange_rates(&self) -> Result<ExchangeRates> {
        let mut rates = ExchangeRates::new();
        for (code, rate) in &self.exchange_rates {
            rates
                .insert(code, *rate)
                .with_context(|| format!("Invalid exchange rate for {code}"))?;
        }
        Ok(rates)
    }
}

/// Loads the configuration.
///
/// An explicitly given `path` must exist; the implicit `txnview.toml` is optional.
#[instrument]
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let file = match path {
        Some(path) => {
            debug!("Using configuration file {}", path.display());
            File::from(path).required(true)
        }
        None => File::from(Path::new(DEFAULT_CONFIG_FILE)).required(false),
    };

    load_config_from(file, Environment::with_prefix("TXNVIEW").prefix_separator("_").separator("__"))
}

fn load_config_from(file: File<config::FileSourceFile, config::FileFormat>, env: Environment) -> Result<AppConfig> {
    let settings = Config::builder()
        .add_source(file)
        .add_source(env)
        .build()
        .context("Failed to read configuration")?;

    settings
        .try_deserialize::<AppConfig>()
        .context("Failed to parse configuration")
}

/// Everything a command needs, built once per invocation.
pub struct AppContext {
    pub config: AppConfig,
    pub table: CurrencyTable,
    pub rates: ExchangeRates,
    pub reconciler: LedgerReconciler,
    pub source: Box<dyn AccountSource>,
}

/// Initialize configuration and the objects derived from it.
///
/// `accounts` and `today` come from the command line and win over the
/// configuration.
pub fn initialize_app_context(
    config_path: Option<&Path>,
    accounts: Option<PathBuf>,
    today: Option<NaiveDate>,
) -> Result<AppContext> {
    let mut config = load_config(config_path)?;
    if let Some(accounts) = accounts {
        config.accounts_path = accounts;
    }

    info!("Reading accounts from {}", config.accounts_path.display());
    let source = Box::new(JsonFileSource::new(config.accounts_path.clone()));

    build_context(config, source, today)
}

pub fn build_context(config: AppConfig, source: Box<dyn AccountSource>, today: Option<NaiveDate>) -> Result<AppContext> {
    let table = config.currency_table();
    let rates = config.exchange_rates()?;
    let reconciler = default_reconciler(today).with_default_currency(config.default_currency.clone());
    debug!("Today is {}, default currency {}", reconciler.today(), reconciler.default_currency());

    Ok(AppContext {
        config,
        table,
        rates,
        reconciler,
        source,
    })
}
