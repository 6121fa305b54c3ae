//! fxpad FX Engine
//!
//! Exchange rate store and cross-rate conversion for the fxpad keypad.
//!
//! # Features
//!
//! - Single-shot rate fetch from an HTTP provider with a short timeout
//! - Fail-soft fallback to a fixed rate table
//! - Cross-rate conversion through the base currency (USD)
//! - Two-decimal display formatting
//!
//! # Example
//!
//! ```rust,ignore
//! use fxpad_fx::{FxConfig, HttpRateProvider, RateStore, Conversion};
//! use fxpad_common::{Currency, CurrencyPair};
//!
//! let provider = HttpRateProvider::new(&FxConfig::default())?;
//! let store = RateStore::fetch(&provider).await;
//!
//! let pair = CurrencyPair::new(Currency::Usd, Currency::Npr);
//! let conversion = Conversion::compute(store.table(), pair, "1000.00")?;
//! println!("{}", conversion.display());
//! ```

pub mod config;
pub mod conversion;
pub mod error;
pub mod provider;
pub mod rates;
pub mod store;

pub use config::FxConfig;
pub use conversion::{convert, format_amount, parse_amount, Conversion};
pub use error::{FxError, FxResult};
pub use provider::{HttpRateProvider, OfflineRateProvider, RateProvider, RateSnapshot};
pub use rates::RateTable;
pub use store::{RateOrigin, RateStore};

#[cfg(any(test, feature = "test-utils"))]
pub use provider::MockRateProvider;
