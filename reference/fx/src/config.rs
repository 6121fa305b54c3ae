//! Rate source configuration.

use std::time::Duration;

use fxpad_common::parse_timeout;
use tracing::warn;

/// Default endpoint returning USD-based multipliers.
pub const DEFAULT_RATES_URL: &str = "https://api.exchangerate-api.com/v4/latest/USD";

/// Configuration for the rate store.
#[derive(Debug, Clone)]
pub struct FxConfig {
    /// URL of the rate document.
    pub rates_url: String,
    /// Timeout for the single fetch attempt.
    pub request_timeout: Duration,
    /// Skip the network and use the fallback table.
    pub offline: bool,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            rates_url: DEFAULT_RATES_URL.to_string(),
            request_timeout: Duration::from_secs(5),
            offline: false,
        }
    }
}

impl FxConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("FXPAD_RATES_URL") {
            config.rates_url = url;
        }

        if let Ok(secs) = std::env::var("FXPAD_TIMEOUT_SECS") {
            match parse_timeout(&secs) {
                Some(timeout) => config.request_timeout = timeout,
                None => warn!(value = %secs, "Ignoring unusable FXPAD_TIMEOUT_SECS"),
            }
        }

        if let Ok(offline) = std::env::var("FXPAD_OFFLINE") {
            config.offline = matches!(offline.as_str(), "1" | "true" | "yes");
        }

        config
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.offline {
            return Ok(());
        }

        if self.rates_url.is_empty() {
            return Err("Rates URL cannot be empty".to_string());
        }

        if !(self.rates_url.starts_with("http://") || self.rates_url.starts_with("https://")) {
            return Err(format!("Rates URL must be http(s): {}", self.rates_url));
        }

        if self.request_timeout.is_zero() {
            return Err("Request timeout cannot be zero".to_string());
        }

        Ok(())
    }
}
