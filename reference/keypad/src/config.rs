//! Initial converter state configuration.

use fxpad_common::{Currency, CurrencyPair};

use crate::buffer::AmountBuffer;

/// Starting amount and currency selection.
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    /// Amount shown at startup.
    pub initial_amount: String,
    /// Initial source and target currencies.
    pub pair: CurrencyPair,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            initial_amount: "1000.00".to_string(),
            pair: CurrencyPair::new(Currency::Usd, Currency::Npr),
        }
    }
}

impl ConverterConfig {
    /// Load configuration from environment variables.
    ///
    /// Unsupported currency codes are ignored and keep the default.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(amount) = std::env::var("FXPAD_AMOUNT") {
            config.initial_amount = amount;
        }

        if let Some(from) = std::env::var("FXPAD_FROM").ok().and_then(|c| c.parse().ok()) {
            config.pair.from = from;
        }

        if let Some(to) = std::env::var("FXPAD_TO").ok().and_then(|c| c.parse().ok()) {
            config.pair.to = to;
        }

        config
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), String> {
        AmountBuffer::new(self.initial_amount.as_str())
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConverterConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.pair.to_string(), "USD/NPR");
    }

    #[test]
    fn test_invalid_amount() {
        let config = ConverterConfig {
            initial_amount: "12,50".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
