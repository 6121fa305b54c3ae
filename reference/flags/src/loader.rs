//! Fetches flags for the currency catalogue.

use std::collections::HashMap;

use bytes::Bytes;
use fxpad_common::Currency;
use tracing::{debug, info, warn};

use crate::config::FlagConfig;
use crate::error::FlagError;
use crate::image::{FlagImage, FLAG_HEIGHT, FLAG_WIDTH, PLACEHOLDER_COLOR};

static PLACEHOLDER: FlagImage = FlagImage::Placeholder {
    width: FLAG_WIDTH,
    height: FLAG_HEIGHT,
    color: PLACEHOLDER_COLOR,
};

/// Flag per currency. Lookups never fail.
#[derive(Debug, Clone, Default)]
pub struct FlagSet {
    flags: HashMap<Currency, FlagImage>,
}

impl FlagSet {
    /// A set where every currency shows the placeholder.
    pub fn placeholders() -> Self {
        Self::default()
    }

    /// Record the flag for a currency.
    pub fn insert(&mut self, currency: Currency, flag: FlagImage) {
        self.flags.insert(currency, flag);
    }

    /// Get the flag for a currency, or the placeholder.
    pub fn get(&self, currency: Currency) -> &FlagImage {
        self.flags.get(&currency).unwrap_or(&PLACEHOLDER)
    }

    /// Number of currencies with a real flag.
    pub fn loaded(&self) -> usize {
        self.flags.values().filter(|f| !f.is_placeholder()).count()
    }
}

/// Loads flags from the configured icon source.
pub struct FlagLoader {
    client: Option<reqwest::Client>,
    config: FlagConfig,
}

impl FlagLoader {
    /// Create a loader. A client that can't be built disables fetching.
    pub fn new(config: FlagConfig) -> Self {
        let client = if config.enabled {
            match reqwest::Client::builder()
                .timeout(config.request_timeout)
                .build()
            {
                Ok(client) => Some(client),
                Err(e) => {
                    warn!(error = %e, "Could not build flag client, using placeholders");
                    None
                }
            }
        } else {
            None
        };

        Self { client, config }
    }

    /// Load the flag for one currency, or the placeholder on any failure.
    pub async fn load(&self, currency: Currency) -> FlagImage {
        let Some(client) = &self.client else {
            return FlagImage::placeholder();
        };

        let url = self.config.url_for(currency.country_code());
        match Self::fetch(client, &url).await {
            Ok(data) => {
                debug!(currency = %currency, bytes = data.len(), "Loaded flag");
                FlagImage::Png(data)
            }
            Err(e) => {
                warn!(
                    currency = %currency,
                    url = %url,
                    error = %e,
                    "Flag unavailable, using placeholder"
                );
                FlagImage::placeholder()
            }
        }
    }

    /// Load flags for every given currency, one request at a time.
    pub async fn load_all(&self, currencies: &[Currency]) -> FlagSet {
        let mut set = FlagSet::placeholders();
        for currency in currencies {
            set.insert(*currency, self.load(*currency).await);
        }

        info!(
            loaded = set.loaded(),
            total = currencies.len(),
            "Flag icons ready"
        );
        set
    }

    async fn fetch(client: &reqwest::Client, url: &str) -> Result<Bytes, FlagError> {
        let data = client.get(url).send().await?.error_for_status()?.bytes().await?;

        if data.is_empty() {
            return Err(FlagError::EmptyBody);
        }
        if !FlagImage::is_png(&data) {
            return Err(FlagError::NotPng(data.len()));
        }

        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    const PNG: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

    /// Serve the same response to `count` connections.
    async fn serve(status: &'static str, body: &'static [u8], count: usize) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            for _ in 0..count {
                let Ok((mut socket, _)) = listener.accept().await else {
                    return;
                };
                let mut buf = [0u8; 2048];
                let _ = socket.read(&mut buf).await;
                let head = format!(
                    "HTTP/1.1 {status}\r\ncontent-type: image/png\r\ncontent-length: {}\r\nconnection: close\r\n\r\n",
                    body.len()
                );
                let _ = socket.write_all(head.as_bytes()).await;
                let _ = socket.write_all(body).await;
                let _ = socket.shutdown().await;
            }
        });

        format!("http://{addr}/{{country}}.png")
    }

    fn loader_for(url_template: String) -> FlagLoader {
        FlagLoader::new(FlagConfig {
            url_template,
            request_timeout: Duration::from_secs(2),
            enabled: true,
        })
    }

    #[tokio::test]
    async fn test_load_png() {
        let loader = loader_for(serve("200 OK", PNG, 1).await);

        let flag = loader.load(Currency::Npr).await;

        assert_eq!(flag, FlagImage::Png(Bytes::from_static(PNG)));
    }

    #[tokio::test]
    async fn test_not_found_gives_placeholder() {
        let loader = loader_for(serve("404 Not Found", b"missing", 1).await);

        assert_eq!(loader.load(Currency::Usd).await, FlagImage::placeholder());
    }

    #[tokio::test]
    async fn test_non_png_gives_placeholder() {
        let loader = loader_for(serve("200 OK", b"<html></html>", 1).await);

        assert!(loader.load(Currency::Eur).await.is_placeholder());
    }

    #[tokio::test]
    async fn test_unreachable_gives_placeholder() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let loader = loader_for(format!("http://{addr}/{{country}}.png"));

        assert!(loader.load(Currency::Gbp).await.is_placeholder());
    }

    #[tokio::test]
    async fn test_disabled_loader_uses_placeholders() {
        let loader = FlagLoader::new(FlagConfig {
            enabled: false,
            ..Default::default()
        });

        let set = loader.load_all(Currency::ALL).await;

        assert_eq!(set.loaded(), 0);
        assert!(set.get(Currency::Twd).is_placeholder());
    }

    #[tokio::test]
    async fn test_load_all() {
        let loader = loader_for(serve("200 OK", PNG, 2).await);

        let set = loader.load_all(&[Currency::Usd, Currency::Npr]).await;

        assert_eq!(set.loaded(), 2);
        assert!(!set.get(Currency::Npr).is_placeholder());
        assert!(set.get(Currency::Eur).is_placeholder());
    }
}
