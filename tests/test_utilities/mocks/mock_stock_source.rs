use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use stock_fetcher::prelude::*;

/// Mock StockSource serving canned responses per URL and recording requests
#[derive(Default, Clone)]
pub struct MockStockSource {
    responses: HashMap<String, (Duration, std::result::Result<Value, FetchError>)>,
    pub requests: Arc<Mutex<Vec<String>>>,
}

impl MockStockSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(mut self, url: &str, body: Value) -> Self {
        self.responses
            .insert(url.to_string(), (Duration::ZERO, Ok(body)));
        self
    }

    pub fn with_delayed_json(mut self, url: &str, delay: Duration, body: Value) -> Self {
        self.responses.insert(url.to_string(), (delay, Ok(body)));
        self
    }

    pub fn with_error(mut self, url: &str, error: FetchError) -> Self {
        self.responses.insert(url.to_string(), (Duration::ZERO, Err(error)));
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl StockSource for MockStockSource {
    async fn fetch_json(&self, url: &str) -> std::result::Result<Value, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());

        let Some((delay, response)) = self.responses.get(url).cloned() else {
            return Err(FetchError::not_ok());
        };
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        response
    }
}
