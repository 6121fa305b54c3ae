//! Cross-rate conversion through the base currency.

use fxpad_common::CurrencyPair;
use serde::Serialize;

use crate::error::{FxError, FxResult};
use crate::rates::RateTable;

/// Convert `amount` from a currency with multiplier `from` into one with
/// multiplier `to`, both expressed per unit of the base currency.
pub fn convert(amount: f64, from: f64, to: f64) -> f64 {
    (amount / from) * to
}

/// Format a value for display with exactly two decimals.
///
/// Rounds the exact binary value; an exact tie goes to the even digit.
pub fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}

/// Parse amount text. Empty text is zero.
///
/// A numeral beyond the `f64` range is `AmountOverflow`; anything else that
/// is not a finite number (including `inf` and `NaN`) is `InvalidAmount`.
pub fn parse_amount(text: &str) -> FxResult<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(0.0);
    }

    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(_) if is_numeral(text) => Err(FxError::AmountOverflow(text.to_string())),
        _ => Err(FxError::InvalidAmount(text.to_string())),
    }
}

fn is_numeral(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'+' | b'-' | b'e' | b'E'))
}

/// A computed conversion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Conversion {
    /// Source and target currencies.
    pub pair: CurrencyPair,
    /// Input amount.
    pub amount: f64,
    /// Multiplier of the source currency.
    pub from_rate: f64,
    /// Multiplier of the target currency.
    pub to_rate: f64,
    /// Converted amount.
    pub value: f64,
}

impl Conversion {
    /// Convert amount text between the pair's currencies.
    ///
    /// The amount is parsed before any rate lookup, so unparsable text
    /// reports `InvalidAmount` even when a rate is missing.
    pub fn compute(table: &RateTable, pair: CurrencyPair, amount_text: &str) -> FxResult<Self> {
        let amount = parse_amount(amount_text)?;
        Self::from_amount(table, pair, amount)
    }

    /// Convert a numeric amount between the pair's currencies.
    pub fn from_amount(table: &RateTable, pair: CurrencyPair, amount: f64) -> FxResult<Self> {
        let from_rate = table.rate(pair.from)?;
        let to_rate = table.rate(pair.to)?;
        let value = convert(amount, from_rate, to_rate);

        if !value.is_finite() {
            return Err(FxError::NonFiniteResult(pair));
        }

        Ok(Self {
            pair,
            amount,
            from_rate,
            to_rate,
            value,
        })
    }

    /// Units of the target currency per unit of the source currency.
    pub fn effective_rate(&self) -> f64 {
        convert(1.0, self.from_rate, self.to_rate)
    }

    /// Converted value formatted for display.
    pub fn display(&self) -> String {
        format_amount(self.value)
    }
}
