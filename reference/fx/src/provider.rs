//! Rate provider trait and implementations.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use fxpad_common::Currency;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::config::FxConfig;
use crate::error::{FxError, FxResult};
use crate::rates::RateTable;

/// Rates delivered by a provider.
#[derive(Debug, Clone, PartialEq)]
pub struct RateSnapshot {
    /// The parsed table.
    pub table: RateTable,
    /// When the provider says the rates were last updated.
    pub as_of: Option<DateTime<Utc>>,
}

/// Trait for exchange rate providers.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Get the provider name.
    fn name(&self) -> &str;

    /// Fetch the full rate table, single attempt.
    async fn fetch(&self) -> FxResult<RateSnapshot>;
}

/// Body of the latest-rates document.
#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    base: String,
    #[serde(default)]
    time_last_updated: Option<i64>,
    rates: HashMap<String, f64>,
}

impl LatestRatesResponse {
    fn into_snapshot(self) -> FxResult<RateSnapshot> {
        if !self.base.eq_ignore_ascii_case(Currency::BASE.code()) {
            return Err(FxError::SourceUnavailable(format!(
                "unexpected base currency {}",
                self.base
            )));
        }

        let table = RateTable::from_codes(self.rates.iter().map(|(c, r)| (c.as_str(), *r)));
        // Only the pinned base rate survived.
        if table.len() < 2 {
            return Err(FxError::SourceUnavailable(
                "no supported rates in response".to_string(),
            ));
        }

        Ok(RateSnapshot {
            table,
            as_of: self
                .time_last_updated
                .and_then(|secs| DateTime::from_timestamp(secs, 0)),
        })
    }
}

/// Fetches rates over HTTP from an exchangerate-api style endpoint.
pub struct HttpRateProvider {
    client: reqwest::Client,
    url: String,
}

impl HttpRateProvider {
    /// Create a provider from configuration.
    pub fn new(config: &FxConfig) -> FxResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            url: config.rates_url.clone(),
        })
    }
}

#[async_trait]
impl RateProvider for HttpRateProvider {
    fn name(&self) -> &str {
        "HTTP"
    }

    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> FxResult<RateSnapshot> {
        let response = self.client.get(&self.url).send().await?.error_for_status()?;
        let body = response.bytes().await?;

        let document: LatestRatesResponse = serde_json::from_slice(&body)
            .map_err(|e| FxError::SourceUnavailable(format!("malformed response: {e}")))?;

        let snapshot = document.into_snapshot()?;
        debug!(rates = snapshot.table.len(), "Parsed rate document");

        Ok(snapshot)
    }
}

/// Provider that never reaches the network.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineRateProvider;

#[async_trait]
impl RateProvider for OfflineRateProvider {
    fn name(&self) -> &str {
        "OFFLINE"
    }

    async fn fetch(&self) -> FxResult<RateSnapshot> {
        Err(FxError::SourceUnavailable("offline mode".to_string()))
    }
}

/// Mock rate provider for testing.
#[cfg(any(test, feature = "test-utils"))]
pub struct MockRateProvider {
    name: String,
    result: FxResult<RateSnapshot>,
}

#[cfg(any(test, feature = "test-utils"))]
impl MockRateProvider {
    /// Provider that returns the given table.
    pub fn with_table(name: impl Into<String>, table: RateTable) -> Self {
        Self {
            name: name.into(),
            result: Ok(RateSnapshot { table, as_of: None }),
        }
    }

    /// Provider that always fails with `SourceUnavailable`.
    pub fn failing(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            result: Err(FxError::SourceUnavailable(reason.into())),
        }
    }
}

#[cfg(any(test, feature = "test-utils"))]
#[async_trait]
impl RateProvider for MockRateProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> FxResult<RateSnapshot> {
        self.result.clone()
    }
}
