//! FX engine error types.

use fxpad_common::{Currency, CurrencyPair};
use thiserror::Error;

/// Errors that can occur in the FX engine.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FxError {
    /// The rate provider could not deliver a usable table.
    #[error("Rate source unavailable: {0}")]
    SourceUnavailable(String),

    /// Rate not present in the table.
    #[error("Rate not available for {0}")]
    RateNotAvailable(Currency),

    /// Amount text does not parse as a number.
    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),

    /// Amount is numeric but too large to represent.
    #[error("Amount out of range: {0}")]
    AmountOverflow(String),

    /// Conversion produced an infinite or NaN value.
    #[error("Conversion for {0} produced a non-finite value")]
    NonFiniteResult(CurrencyPair),
}

impl FxError {
    /// Get error code for log fields.
    pub fn error_code(&self) -> &'static str {
        match self {
            FxError::SourceUnavailable(_) => "SOURCE_UNAVAILABLE",
            FxError::RateNotAvailable(_) => "RATE_NOT_AVAILABLE",
            FxError::InvalidAmount(_) => "INVALID_AMOUNT",
            FxError::AmountOverflow(_) => "AMOUNT_OVERFLOW",
            FxError::NonFiniteResult(_) => "NON_FINITE_RESULT",
        }
    }
}

impl From<reqwest::Error> for FxError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            FxError::SourceUnavailable(format!("request timed out: {value}"))
        } else if value.is_decode() {
            FxError::SourceUnavailable(format!("malformed response: {value}"))
        } else {
            FxError::SourceUnavailable(value.to_string())
        }
    }
}

/// Result type for FX operations.
pub type FxResult<T> = Result<T, FxError>;
