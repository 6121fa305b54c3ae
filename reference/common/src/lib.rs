//! fxpad Common Types
//!
//! Shared types used across the fxpad crates: the supported currency
//! catalogue, currency pairs, the common error type and timeout parsing.

pub mod currency;
pub mod error;
pub mod timeout;

pub use currency::*;
pub use error::*;
pub use timeout::parse_timeout;
