use super::stock_record::StockRecord;
use crate::shared::error::FetchError;
use serde_json::Value;

/// Result of one fetch, ready to be rendered.
///
/// `Message` covers both "no data" and every failure; the only thing a
/// reader sees of an error is its text.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    Records(Vec<StockRecord>),
    Message(String),
}

impl FetchOutcome {
    /// Interprets a parsed response body.
    ///
    /// An array is a stock list; an object with a string `message` is a
    /// message; anything else is malformed.
    pub fn from_json(body: Value) -> Result<Self, FetchError> {
        match body {
            Value::Array(items) => Ok(FetchOutcome::Records(
                items.into_iter().map(StockRecord::from_value).collect(),
            )),
            Value::Object(map) => match map.get("message").and_then(Value::as_str) {
                Some(message) => Ok(FetchOutcome::Message(message.to_string())),
                None => Err(FetchError::malformed(
                    "Response is not a list of stock items",
                )),
            },
            _ => Err(FetchError::malformed(
                "Response is not a list of stock items",
            )),
        }
    }

    pub fn from_error(error: &FetchError) -> Self {
        FetchOutcome::Message(error.to_string())
    }

    pub fn item_count(&self) -> Option<usize> {
        match self {
            FetchOutcome::Records(records) => Some(records.len()),
            FetchOutcome::Message(_) => None,
        }
    }
}

impl From<Result<Value, FetchError>> for FetchOutcome {
    fn from(result: Result<Value, FetchError>) -> Self {
        match result.and_then(FetchOutcome::from_json) {
            Ok(outcome) => outcome,
            Err(error) => FetchOutcome::from_error(&error),
        }
    }
}
