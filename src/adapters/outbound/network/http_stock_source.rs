use crate::ports::outbound::StockSource;
use crate::shared::error::FetchError;
use crate::shared::Result;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// HttpStockSource adapter fetching stock feeds over HTTP(S)
///
/// Implements the StockSource port with an async reqwest client. One call
/// is one GET: no retries, no caching.
pub struct HttpStockSource {
    client: reqwest::Client,
}

impl HttpStockSource {
    /// Creates a source with the default timeout
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("stock-fetcher/{}", version);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl StockSource for HttpStockSource {
    async fn fetch_json(&self, url: &str) -> std::result::Result<Value, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::not_ok());
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::network(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| FetchError::malformed(e.to_string()))
    }
}
