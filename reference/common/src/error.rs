//! Error types shared by the fxpad crates.

use thiserror::Error;

/// Errors raised while interpreting user or provider supplied identifiers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommonError {
    /// Currency code is not part of the supported catalogue.
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),

    /// Selector side name was not recognised.
    #[error("Unknown selector side: {0}")]
    UnknownSide(String),
}

impl CommonError {
    /// Get error code for log fields.
    pub fn error_code(&self) -> &'static str {
        match self {
            CommonError::UnsupportedCurrency(_) => "UNSUPPORTED_CURRENCY",
            CommonError::UnknownSide(_) => "UNKNOWN_SIDE",
        }
    }
}

/// Result type alias for common operations.
pub type Result<T> = std::result::Result<T, CommonError>;
