//! Currency symbols and amount formatting for display.
//!
//! Formatting never feeds back into any computation: reconciled figures stay
//! exact and are only rounded here, at the moment they are turned into text.

use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;
use tracing::trace;

/// Errors raised by the presentation helpers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    /// The code is not part of the ISO 4217 catalogue
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// No exchange rate is configured for the code
    #[error("Missing exchange rate for {0}")]
    MissingRate(String),

    /// Exchange rates must be strictly positive
    #[error("Invalid exchange rate for {code}: {rate}")]
    InvalidRate { code: String, rate: Decimal },

    /// The converted amount does not fit into a decimal
    #[error("Conversion overflow: {amount} {from} to {to}")]
    ConversionOverflow { amount: Decimal, from: String, to: String },
}

/// Symbol used when a code is not in the table.
pub const DEFAULT_SYMBOL: &str = "$";

/// Caller supplied mapping from currency code to display symbol.
///
/// Codes are matched case-insensitively. Unknown codes fall back to the
/// table's default symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyTable {
    symbols: BTreeMap<String, String>,
    default_symbol: String,
}

impl CurrencyTable {
    /// Creates an empty table; every code renders with `default_symbol`.
    pub fn new(default_symbol: impl Into<String>) -> Self {
        Self {
            symbols: BTreeMap::new(),
            default_symbol: default_symbol.into(),
        }
    }

    /// Builds a table from explicit code/symbol pairs.
    pub fn from_map<I, K, V>(default_symbol: impl Into<String>, symbols: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        symbols
            .into_iter()
            .fold(Self::new(default_symbol), |table, (code, symbol)| table.with_symbol(code.as_ref(), symbol))
    }

    /// Builds a table whose symbols come from the ISO 4217 catalogue.
    pub fn from_iso_codes(codes: &[&str], default_symbol: impl Into<String>) -> Result<Self, CurrencyError> {
        let mut table = Self::new(default_symbol);

        for code in codes {
            let currency = rusty_money::iso::find(&code.trim().to_uppercase())
                .ok_or_else(|| CurrencyError::UnknownCurrency(code.to_string()))?;
            trace!("Using ISO symbol {} for {}", currency.symbol, currency.iso_alpha_code);
            table.insert(currency.iso_alpha_code, currency.symbol);
        }

        Ok(table)
    }

    /// Returns the table with one more code/symbol pair, replacing any
    /// existing symbol for the code.
    pub fn with_symbol(mut self, code: &str, symbol: impl Into<String>) -> Self {
        self.insert(code, symbol);
        self
    }

    pub fn insert(&mut self, code: &str, symbol: impl Into<String>) {
        self.symbols.insert(normalize_code(code), symbol.into());
    }

    /// Looks up the symbol for `code`, falling back to the default symbol.
    pub fn symbol_for(&self, code: &str) -> &str {
        self.symbols
            .get(&normalize_code(code))
            .map(String::as_str)
            .unwrap_or(&self.default_symbol)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.symbols.contains_key(&normalize_code(code))
    }

    pub fn default_symbol(&self) -> &str {
        &self.default_symbol
    }

    /// Known codes in alphabetical order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.symbols.keys().map(String::as_str)
    }
}

impl Default for CurrencyTable {
    /// The INR/USD table the account views have always shipped with.
    fn default() -> Self {
        Self::new(DEFAULT_SYMBOL).with_symbol("INR", "₹").with_symbol("USD", "$")
    }
}

fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Rounds to two fraction digits, halves away from zero.
pub fn round_for_display(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Renders `amount` with the symbol for `currency_code`.
///
/// Output has exactly two fraction digits and `,` thousands separators.
/// Midpoints round away from zero (`2.345` becomes `2.35`, `-1.005` becomes
/// `-1.01`). Negative values are written as `-` followed by the symbol.
pub fn format_currency(amount: Decimal, currency_code: &str, table: &CurrencyTable) -> String {
    let rounded = round_for_display(amount);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };

    format!("{}{}{}", sign, table.symbol_for(currency_code), format_digits(rounded.abs()))
}

/// Renders the absolute value of `amount` with its symbol, for rows that
/// carry a separate debit/credit indicator.
pub fn format_magnitude(amount: Decimal, currency_code: &str, table: &CurrencyTable) -> String {
    format_currency(amount.abs(), currency_code, table)
}

/// Formats a non-negative value with two fraction digits and grouped thousands.
fn format_digits(value: Decimal) -> String {
    let mut value = round_for_display(value);
    value.rescale(2);
    let text = value.to_string();

    let (integer, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, ch) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}.{}", grouped, fraction)
}
