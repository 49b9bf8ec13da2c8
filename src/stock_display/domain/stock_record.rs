use serde::Deserialize;
use serde_json::Value;

/// One vehicle as served by the dealer stock endpoint.
///
/// The upstream schema is loose: any field may be missing, and scalar
/// fields arrive as strings or numbers depending on the feed. Fields are
/// therefore kept as raw JSON values and converted to text on display.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockRecord {
    #[serde(default)]
    pub make: Option<Value>,
    #[serde(default)]
    pub model: Option<Value>,
    #[serde(default)]
    pub transmission: Option<Value>,
    #[serde(default)]
    pub body_type: Option<Value>,
    #[serde(default)]
    pub colour: Option<Value>,
    #[serde(default)]
    pub odometer: Option<Value>,
    #[serde(default)]
    pub size: Option<Value>,
    #[serde(default)]
    pub size_option: Option<Value>,
    #[serde(default)]
    pub stock_number: Option<Value>,
    #[serde(default)]
    pub images: Option<Value>,
}

impl StockRecord {
    /// Converts an arbitrary array element into a record.
    /// Anything that is not an object yields an empty record.
    pub fn from_value(value: Value) -> Self {
        if value.is_object() {
            serde_json::from_value(value).unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// First entry of `images` when it is a non-empty string
    pub fn first_image(&self) -> Option<&str> {
        self.images
            .as_ref()
            .and_then(Value::as_array)
            .and_then(|images| images.first())
            .and_then(Value::as_str)
            .filter(|src| !src.is_empty())
    }
}

/// Text form of a scalar field; `None` for missing, null or structured values
pub fn field_text(field: Option<&Value>) -> Option<String> {
    match field? {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
