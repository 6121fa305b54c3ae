//! Icon source configuration.

use std::time::Duration;

use fxpad_common::parse_timeout;
use tracing::warn;

/// Default flag endpoint; `{country}` is replaced by the ISO 3166 code.
pub const DEFAULT_FLAGS_URL: &str = "https://flagcdn.com/32x24/{country}.png";

/// Configuration for flag loading.
#[derive(Debug, Clone)]
pub struct FlagConfig {
    /// URL template containing `{country}`.
    pub url_template: String,
    /// Timeout per flag request.
    pub request_timeout: Duration,
    /// Fetch flags at all; placeholders only when false.
    pub enabled: bool,
}

impl Default for FlagConfig {
    fn default() -> Self {
        Self {
            url_template: DEFAULT_FLAGS_URL.to_string(),
            request_timeout: Duration::from_secs(5),
            enabled: true,
        }
    }
}

impl FlagConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(template) = std::env::var("FXPAD_FLAGS_URL") {
            config.url_template = template;
        }

        // Shared with the rate fetch.
        if let Ok(secs) = std::env::var("FXPAD_TIMEOUT_SECS") {
            match parse_timeout(&secs) {
                Some(timeout) => config.request_timeout = timeout,
                None => warn!(value = %secs, "Ignoring unusable FXPAD_TIMEOUT_SECS"),
            }
        }

        if let Ok(disabled) = std::env::var("FXPAD_NO_FLAGS") {
            config.enabled = !matches!(disabled.as_str(), "1" | "true" | "yes");
        }

        config
    }

    /// URL for one country's flag.
    pub fn url_for(&self, country_code: &str) -> String {
        self.url_template.replace("{country}", country_code)
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.enabled {
            return Ok(());
        }

        if !self.url_template.contains("{country}") {
            return Err(format!(
                "Flag URL template must contain {{country}}: {}",
                self.url_template
            ));
        }

        if self.request_timeout.is_zero() {
            return Err("Flag request timeout cannot be zero".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FlagConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.url_for("np"), "https://flagcdn.com/32x24/np.png");
    }

    #[test]
    fn test_template_needs_placeholder() {
        let config = FlagConfig {
            url_template: "https://flags.example/us.png".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
