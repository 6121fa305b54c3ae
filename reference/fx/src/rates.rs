//! Rate table keyed by currency, expressed against the base currency.

use std::collections::BTreeMap;

use fxpad_common::Currency;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{FxError, FxResult};

/// Multipliers used when the live source is unavailable.
const FALLBACK_RATES: &[(Currency, f64)] = &[
    (Currency::Usd, 1.0),
    (Currency::Eur, 0.92),
    (Currency::Gbp, 0.79),
    (Currency::Inr, 83.12),
    (Currency::Npr, 132.50),
    (Currency::Jpy, 149.50),
    (Currency::Cny, 7.24),
    (Currency::Aud, 1.52),
    (Currency::Cad, 1.36),
    (Currency::Chf, 0.88),
    (Currency::Sgd, 1.34),
    (Currency::Hkd, 7.83),
    (Currency::Nzd, 1.64),
    (Currency::Krw, 1342.50),
    (Currency::Mxn, 17.15),
    (Currency::Brl, 4.97),
    (Currency::Zar, 18.65),
    (Currency::Aed, 3.67),
    (Currency::Sar, 3.75),
    (Currency::Thb, 35.50),
    (Currency::Myr, 4.72),
    (Currency::Idr, 15650.0),
    (Currency::Php, 56.80),
    (Currency::Vnd, 24500.0),
    (Currency::Pkr, 278.50),
    (Currency::Bdt, 110.25),
    (Currency::Lkr, 325.80),
    (Currency::Sek, 10.87),
    (Currency::Nok, 10.93),
    (Currency::Dkk, 6.86),
    (Currency::Pln, 4.03),
    (Currency::Try, 32.15),
    (Currency::Rub, 92.50),
    (Currency::Twd, 32.20),
];

/// Units of each currency per one unit of [`Currency::BASE`].
///
/// Every stored multiplier is positive and finite, and the base currency
/// always maps to `1.0`. A table is built once and only read afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateTable {
    rates: BTreeMap<Currency, f64>,
}

impl RateTable {
    /// The fixed table used when no live rates can be fetched.
    pub fn fallback() -> Self {
        Self {
            rates: FALLBACK_RATES.iter().copied().collect(),
        }
    }

    /// Build a table from currency/multiplier pairs.
    ///
    /// Non-positive and non-finite multipliers are dropped. The base currency
    /// is pinned to `1.0`.
    pub fn from_rates(rates: impl IntoIterator<Item = (Currency, f64)>) -> Self {
        let mut table = BTreeMap::new();
        for (currency, multiplier) in rates {
            if !multiplier.is_finite() || multiplier <= 0.0 {
                warn!(currency = %currency, multiplier, "Dropping unusable rate");
                continue;
            }
            table.insert(currency, multiplier);
        }

        match table.insert(Currency::BASE, 1.0) {
            Some(previous) if previous != 1.0 => {
                warn!(base = %Currency::BASE, previous, "Base rate was not 1.0, pinned");
            }
            _ => {}
        }

        Self { rates: table }
    }

    /// Build a table from raw provider codes, ignoring unsupported ones.
    pub fn from_codes<'a>(rates: impl IntoIterator<Item = (&'a str, f64)>) -> Self {
        let mut skipped = 0usize;
        let parsed: Vec<(Currency, f64)> = rates
            .into_iter()
            .filter_map(|(code, multiplier)| match code.parse::<Currency>() {
                Ok(currency) => Some((currency, multiplier)),
                Err(_) => {
                    skipped += 1;
                    None
                }
            })
            .collect();

        if skipped > 0 {
            debug!(skipped, "Ignored unsupported currency codes");
        }

        Self::from_rates(parsed)
    }

    /// Look up the multiplier for a currency.
    pub fn rate(&self, currency: Currency) -> FxResult<f64> {
        self.get(currency).ok_or(FxError::RateNotAvailable(currency))
    }

    /// Look up the multiplier for a currency, if present.
    pub fn get(&self, currency: Currency) -> Option<f64> {
        self.rates.get(&currency).copied()
    }

    /// Check whether the table holds a rate for the currency.
    pub fn contains(&self, currency: Currency) -> bool {
        self.rates.contains_key(&currency)
    }

    /// Supported currencies the table has no rate for.
    pub fn missing(&self) -> Vec<Currency> {
        Currency::ALL
            .iter()
            .copied()
            .filter(|c| !self.contains(*c))
            .collect()
    }

    /// Number of currencies in the table.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Iterate over the stored multipliers.
    pub fn iter(&self) -> impl Iterator<Item = (Currency, f64)> + '_ {
        self.rates.iter().map(|(c, r)| (*c, *r))
    }
}
