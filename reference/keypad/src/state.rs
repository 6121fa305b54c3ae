//! Conversion state bound to the front end.

use fxpad_common::{Currency, CurrencyPair, Side};
use fxpad_fx::{Conversion, FxError, RateTable};
use tracing::{debug, error};

use crate::buffer::{AmountBuffer, KeypadKey};
use crate::config::ConverterConfig;
use crate::error::KeypadResult;

/// Display shown when the amount can't be read.
pub const DISPLAY_ZERO: &str = "0.00";
/// Display shown when conversion fails for any other reason.
pub const DISPLAY_ERROR: &str = "Error";

/// A user action on the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConverterEvent {
    /// Keypad press.
    Key(KeypadKey),
    /// Exchange source and target currencies.
    Swap,
    /// Select a currency on one side.
    SetCurrency(Side, Currency),
}

impl From<KeypadKey> for ConverterEvent {
    fn from(key: KeypadKey) -> Self {
        ConverterEvent::Key(key)
    }
}

/// Amount buffer, selected currencies and the derived display.
///
/// Every mutation recomputes the display before returning.
#[derive(Debug, Clone)]
pub struct ConverterState {
    table: RateTable,
    buffer: AmountBuffer,
    pair: CurrencyPair,
    display: String,
}

impl ConverterState {
    /// Create state over a rate table.
    pub fn new(table: RateTable, config: &ConverterConfig) -> KeypadResult<Self> {
        let buffer = AmountBuffer::new(config.initial_amount.as_str())?;
        let mut state = Self {
            table,
            buffer,
            pair: config.pair,
            display: DISPLAY_ZERO.to_string(),
        };
        state.recompute();
        Ok(state)
    }

    /// Apply an event and return the new display.
    pub fn apply(&mut self, event: ConverterEvent) -> &str {
        match event {
            ConverterEvent::Key(key) => self.press(key),
            ConverterEvent::Swap => self.swap_currencies(),
            ConverterEvent::SetCurrency(side, currency) => self.set_currency(side, currency),
        }
    }

    /// Keypad press.
    pub fn press(&mut self, key: KeypadKey) -> &str {
        self.buffer.press(key);
        self.recompute();
        &self.display
    }

    /// Exchange source and target. The amount is unchanged.
    pub fn swap_currencies(&mut self) -> &str {
        self.pair = self.pair.inverse();
        self.recompute();
        &self.display
    }

    /// Select the currency on one side.
    pub fn set_currency(&mut self, side: Side, currency: Currency) -> &str {
        self.pair.set(side, currency);
        self.recompute();
        &self.display
    }

    /// The converted amount as shown to the user.
    pub fn converted_display(&self) -> &str {
        &self.display
    }

    /// The amount text being edited.
    pub fn amount(&self) -> &str {
        self.buffer.as_str()
    }

    /// The selected currencies.
    pub fn pair(&self) -> CurrencyPair {
        self.pair
    }

    /// The rate table in use.
    pub fn table(&self) -> &RateTable {
        &self.table
    }

    fn recompute(&mut self) {
        self.display = match Conversion::compute(&self.table, self.pair, self.buffer.as_str()) {
            Ok(conversion) => conversion.display(),
            Err(FxError::InvalidAmount(text)) => {
                debug!(amount = %text, "Amount not numeric, showing zero");
                DISPLAY_ZERO.to_string()
            }
            Err(e) => {
                error!(pair = %self.pair, error = %e, code = e.error_code(), "Conversion error");
                DISPLAY_ERROR.to_string()
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with(amount: &str, from: Currency, to: Currency) -> ConverterState {
        let config = ConverterConfig {
            initial_amount: amount.to_string(),
            pair: CurrencyPair::new(from, to),
        };
        ConverterState::new(RateTable::fallback(), &config).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let state =
            ConverterState::new(RateTable::fallback(), &ConverterConfig::default()).unwrap();

        assert_eq!(state.amount(), "1000.00");
        assert_eq!(state.pair(), CurrencyPair::new(Currency::Usd, Currency::Npr));
        assert_eq!(state.converted_display(), "132500.00");
    }

    #[test]
    fn test_empty_amount_shows_zero() {
        let state = state_with("", Currency::Usd, Currency::Eur);
        assert_eq!(state.converted_display(), "0.00");
    }

    #[test]
    fn test_lone_decimal_point_shows_zero() {
        let state = state_with(".", Currency::Usd, Currency::Eur);
        assert_eq!(state.converted_display(), DISPLAY_ZERO);
    }

    #[test]
    fn test_same_currency_is_identity() {
        let mut state = state_with("1234.5", Currency::Jpy, Currency::Jpy);
        assert_eq!(state.converted_display(), "1234.50");

        assert_eq!(state.swap_currencies(), "1234.50");
    }

    #[test]
    fn test_swap_recomputes_with_swapped_rates() {
        let mut state = state_with("1000.00", Currency::Usd, Currency::Npr);

        let display = state.swap_currencies().to_string();

        assert_eq!(state.pair(), CurrencyPair::new(Currency::Npr, Currency::Usd));
        assert_eq!(state.amount(), "1000.00");
        assert_eq!(display, "7.55");

        state.swap_currencies();
        assert_eq!(state.converted_display(), "132500.00");
    }

    #[test]
    fn test_every_key_recomputes() {
        let mut state = state_with("0", Currency::Usd, Currency::Eur);

        assert_eq!(state.press(KeypadKey::Digit(5)), "4.60");
        assert_eq!(state.press(KeypadKey::Digit(0)), "46.00");
        assert_eq!(state.press(KeypadKey::DecimalPoint), "46.00");
        assert_eq!(state.press(KeypadKey::Digit(5)), "46.46");
        assert_eq!(state.press(KeypadKey::Backspace), "46.00");
        assert_eq!(state.press(KeypadKey::Backspace), "46.00");
        assert_eq!(state.press(KeypadKey::Backspace), "4.60");
        assert_eq!(state.press(KeypadKey::Backspace), "0.00");
        assert_eq!(state.amount(), "");
    }

    #[test]
    fn test_set_currency() {
        let mut state = state_with("100", Currency::Usd, Currency::Npr);

        assert_eq!(state.set_currency(Side::To, Currency::Gbp), "79.00");
        assert_eq!(state.set_currency(Side::From, Currency::Gbp), "100.00");
    }

    #[test]
    fn test_apply_dispatches_events() {
        let mut state = state_with("", Currency::Usd, Currency::Npr);

        state.apply(KeypadKey::Digit(2).into());
        state.apply(ConverterEvent::SetCurrency(Side::To, Currency::Eur));
        let display = state.apply(ConverterEvent::Swap).to_string();

        assert_eq!(state.pair(), CurrencyPair::new(Currency::Eur, Currency::Usd));
        assert_eq!(display, "2.17");
    }

    #[test]
    fn test_missing_rate_shows_error() {
        let table = RateTable::from_rates([(Currency::Usd, 1.0), (Currency::Eur, 0.92)]);
        let config = ConverterConfig::default();
        let mut state = ConverterState::new(table, &config).unwrap();

        assert_eq!(state.converted_display(), DISPLAY_ERROR);

        assert_eq!(state.set_currency(Side::To, Currency::Eur), "920.00");
    }

    #[test]
    fn test_amount_beyond_f64_range_shows_error() {
        let huge = "9".repeat(400);
        let mut state = state_with(&huge, Currency::Usd, Currency::Npr);

        assert_eq!(state.converted_display(), DISPLAY_ERROR);

        assert_eq!(state.press(KeypadKey::DecimalPoint), DISPLAY_ERROR);
        let mut display = String::new();
        for _ in 0..huge.len() {
            display = state.press(KeypadKey::Backspace).to_string();
        }
        assert_eq!(state.amount(), "9");
        assert_eq!(display, "1192.50");
    }

    #[test]
    fn test_invalid_initial_amount_rejected() {
        let config = ConverterConfig {
            initial_amount: "abc".to_string(),
            ..Default::default()
        };
        assert!(ConverterState::new(RateTable::fallback(), &config).is_err());
    }
}
