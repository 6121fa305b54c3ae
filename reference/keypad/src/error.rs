//! Keypad error types.

use fxpad_common::CommonError;
use thiserror::Error;

/// Errors raised while building keypad state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KeypadError {
    /// Text is not a valid amount buffer.
    #[error("Invalid amount buffer {0:?}: only digits and a single '.' are allowed")]
    InvalidBuffer(String),

    /// Digit key outside 0-9.
    #[error("Invalid digit key: {0}")]
    InvalidDigit(u8),

    /// Key label not on the keypad.
    #[error("Unknown key: {0:?}")]
    UnknownKey(char),

    /// Currency could not be resolved.
    #[error(transparent)]
    Currency(#[from] CommonError),
}

/// Result type for keypad operations.
pub type KeypadResult<T> = Result<T, KeypadError>;
