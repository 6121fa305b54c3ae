//! Console configuration: environment first, then command-line overrides.

use fxpad_flags::FlagConfig;
use fxpad_fx::FxConfig;
use fxpad_keypad::ConverterConfig;

use crate::Args;

/// Everything the console needs at startup.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Rate source.
    pub fx: FxConfig,
    /// Icon source.
    pub flags: FlagConfig,
    /// Initial converter state.
    pub converter: ConverterConfig,
    /// Default log filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            fx: FxConfig::from_env(),
            flags: FlagConfig::from_env(),
            converter: ConverterConfig::from_env(),
            log_level: std::env::var("FXPAD_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string()),
        }
    }

    /// Apply command-line overrides.
    pub fn with_args(mut self, args: &Args) -> Self {
        if let Some(url) = &args.rates_url {
            self.fx.rates_url = url.clone();
        }
        if let Some(timeout) = args.timeout {
            self.fx.request_timeout = timeout;
            self.flags.request_timeout = timeout;
        }
        if args.offline {
            self.fx.offline = true;
            self.flags.enabled = false;
        }
        if args.no_flags {
            self.flags.enabled = false;
        }
        if let Some(amount) = &args.amount {
            self.converter.initial_amount = amount.clone();
        }
        if let Some(from) = args.from {
            self.converter.pair.from = from;
        }
        if let Some(to) = args.to {
            self.converter.pair.to = to;
        }
        if let Some(level) = &args.log_level {
            self.log_level = level.clone();
        }
        self
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), String> {
        self.fx.validate()?;
        self.flags.validate()?;
        self.converter.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use fxpad_common::Currency;
    use std::time::Duration;

    #[test]
    fn test_default_config() {
        let config = AppConfig {
            log_level: "warn".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_args_override() {
        let args = Args::parse_from([
            "fxpad",
            "--offline",
            "--amount",
            "12.5",
            "--from",
            "eur",
            "--to",
            "GBP",
            "--timeout",
            "1.5",
        ]);

        let config = AppConfig::default().with_args(&args);

        assert!(config.fx.offline);
        assert!(!config.flags.enabled);
        assert_eq!(config.converter.initial_amount, "12.5");
        assert_eq!(config.converter.pair.from, Currency::Eur);
        assert_eq!(config.converter.pair.to, Currency::Gbp);
        assert_eq!(config.fx.request_timeout, Duration::from_millis(1500));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_amount_arg() {
        let args = Args::parse_from(["fxpad", "--amount", "1,000"]);

        let config = AppConfig::default().with_args(&args);

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unusable_timeout_arg_rejected() {
        for value in ["1e30", "0", "-1", "NaN", "inf"] {
            assert!(
                Args::try_parse_from(["fxpad", "--timeout", value]).is_err(),
                "accepted --timeout {value}"
            );
        }
    }

    #[test]
    fn test_unsupported_currency_arg_rejected() {
        assert!(Args::try_parse_from(["fxpad", "--to", "XYZ"]).is_err());
    }
}
