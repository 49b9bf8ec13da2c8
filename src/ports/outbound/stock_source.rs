use crate::shared::error::FetchError;
use async_trait::async_trait;
use serde_json::Value;

/// StockSource port for retrieving the remote JSON document
///
/// This port abstracts the transport (HTTP in production, in-memory in
/// tests). Implementations must be `Send + Sync` so one source can serve
/// overlapping fetches of the same element.
#[async_trait]
pub trait StockSource: Send + Sync {
    /// Issues a single GET for `url` and parses the body as JSON
    ///
    /// # Errors
    /// - `FetchError::NetworkFailure` with "Network response was not ok" for
    ///   any non-success status, or the transport error text
    /// - `FetchError::MalformedResponse` when the body is not valid JSON
    async fn fetch_json(&self, url: &str) -> Result<Value, FetchError>;
}
