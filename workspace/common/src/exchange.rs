//! Fixed exchange rates for showing figures in another currency.
//!
//! Conversion is an explicit, display-only step. Reconciled figures are
//! always computed in the account's own currency and never converted back.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::currency::CurrencyError;

/// Rates expressed as units of each currency per one unit of a common base.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExchangeRates {
    rates: BTreeMap<String, Decimal>,
}

impl ExchangeRates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the rate for `code`. Rates must be strictly positive.
    pub fn with_rate(mut self, code: &str, rate: Decimal) -> Result<Self, CurrencyError> {
        self.insert(code, rate)?;
        Ok(self)
    }

    pub fn insert(&mut self, code: &str, rate: Decimal) -> Result<(), CurrencyError> {
        let code = code.trim().to_uppercase();
        if rate <= Decimal::ZERO {
            return Err(CurrencyError::InvalidRate { code, rate });
        }
        self.rates.insert(code, rate);
        Ok(())
    }

    pub fn rate(&self, code: &str) -> Option<Decimal> {
        self.rates.get(&code.trim().to_uppercase()).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Converts `amount` from one currency into another.
    ///
    /// Same-currency conversion is the identity and needs no rates.
    pub fn convert(&self, amount: Decimal, from: &str, to: &str) -> Result<Decimal, CurrencyError> {
        if from.trim().eq_ignore_ascii_case(to.trim()) {
            return Ok(amount);
        }

        let from_rate = self.rate(from).ok_or_else(|| CurrencyError::MissingRate(from.to_uppercase()))?;
        let to_rate = self.rate(to).ok_or_else(|| CurrencyError::MissingRate(to.to_uppercase()))?;

        amount
            .checked_mul(to_rate)
            .and_then(|scaled| scaled.checked_div(from_rate))
            .ok_or_else(|| CurrencyError::ConversionOverflow {
                amount,
                from: from.to_uppercase(),
                to: to.to_uppercase(),
            })
    }
}
