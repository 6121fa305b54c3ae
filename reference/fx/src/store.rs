//! Fetch-or-fallback rate store.

use std::fmt;

use chrono::{DateTime, Utc};
use fxpad_common::Currency;
use tracing::{info, instrument, warn};

use crate::error::FxResult;
use crate::provider::RateProvider;
use crate::rates::RateTable;

/// Where the active rate table came from.
#[derive(Debug, Clone, PartialEq)]
pub enum RateOrigin {
    /// Rates delivered by a provider.
    Live {
        provider: String,
        fetched_at: DateTime<Utc>,
        as_of: Option<DateTime<Utc>>,
    },
    /// Provider failed, fixed table in use.
    Fallback { reason: String },
}

impl fmt::Display for RateOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RateOrigin::Live {
                provider,
                as_of: Some(as_of),
                ..
            } => write!(
                f,
                "live rates ({provider}, updated {})",
                as_of.format("%Y-%m-%d %H:%M UTC")
            ),
            RateOrigin::Live { provider, .. } => write!(f, "live rates ({provider})"),
            RateOrigin::Fallback { reason } => write!(f, "offline rates ({reason})"),
        }
    }
}

/// The process-wide rate table, loaded once at startup.
#[derive(Debug, Clone)]
pub struct RateStore {
    table: RateTable,
    origin: RateOrigin,
}

impl RateStore {
    /// Fetch rates from the provider, substituting the fallback table on failure.
    ///
    /// Never fails: a single attempt is made and any `SourceUnavailable`
    /// error selects [`RateTable::fallback`].
    #[instrument(skip(provider), fields(provider = provider.name()))]
    pub async fn fetch(provider: &dyn RateProvider) -> Self {
        match provider.fetch().await {
            Ok(snapshot) => {
                let missing = snapshot.table.missing();
                if !missing.is_empty() {
                    warn!(missing = ?missing, "Live table lacks some supported currencies");
                }
                info!(rates = snapshot.table.len(), "Loaded live exchange rates");

                Self {
                    table: snapshot.table,
                    origin: RateOrigin::Live {
                        provider: provider.name().to_string(),
                        fetched_at: Utc::now(),
                        as_of: snapshot.as_of,
                    },
                }
            }
            Err(e) => {
                warn!(
                    error = %e,
                    code = e.error_code(),
                    "Rate source failed, using fallback table"
                );
                Self::fallback(e.to_string())
            }
        }
    }

    /// Store holding the fixed fallback table.
    pub fn fallback(reason: impl Into<String>) -> Self {
        Self {
            table: RateTable::fallback(),
            origin: RateOrigin::Fallback {
                reason: reason.into(),
            },
        }
    }

    /// Get the active table.
    pub fn table(&self) -> &RateTable {
        &self.table
    }

    /// Get where the table came from.
    pub fn origin(&self) -> &RateOrigin {
        &self.origin
    }

    /// Check whether the fallback table is in use.
    pub fn is_fallback(&self) -> bool {
        matches!(self.origin, RateOrigin::Fallback { .. })
    }

    /// Look up the multiplier for a currency.
    pub fn rate(&self, currency: Currency) -> FxResult<f64> {
        self.table.rate(currency)
    }

    /// Consume the store, keeping only the table.
    pub fn into_table(self) -> RateTable {
        self.table
    }
}
