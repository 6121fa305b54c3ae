//! Flag loading error types.

use thiserror::Error;

/// Reasons a flag could not be fetched. Never escapes the loader.
#[derive(Debug, Error)]
pub enum FlagError {
    /// Request failed or timed out.
    #[error("Flag request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an empty body.
    #[error("Flag response was empty")]
    EmptyBody,

    /// Body is not a PNG image.
    #[error("Flag response is not a PNG image ({0} bytes)")]
    NotPng(usize),
}
