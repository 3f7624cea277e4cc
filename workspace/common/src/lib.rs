//! Presentation helpers shared by every renderer of an account history.
//! Nothing in here changes a reconciled figure; it only converts and
//! formats values for display.

pub mod currency;
pub mod exchange;
pub mod statement;

pub use currency::{CurrencyError, CurrencyTable, DEFAULT_SYMBOL, format_currency, format_magnitude, round_for_display};
pub use exchange::ExchangeRates;
pub use statement::{EntryKind, FormattedRow, FormattedStatement, StatementHeader, StatementRow, StatementView};
