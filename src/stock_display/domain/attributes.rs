use std::collections::BTreeMap;

/// Identifier attribute of the dealer variant
pub const DEALER_ID: &str = "dealer-id";
/// Identifier attribute of the endpoint variant
pub const ENDPOINT: &str = "endpoint";
/// Base URL attribute of the endpoint variant
pub const BASE_URL: &str = "base-url";
/// Presentation attribute controlling the primary colour
pub const PRIMARY_COL: &str = "primary-col";

/// Attribute set of one element instance.
///
/// Attributes are the element's only persisted state. Names are stored as
/// given; values are kept verbatim, including empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    values: BTreeMap<String, String>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter, convenient for tests and wiring
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.set(name, value);
        self
    }

    /// Sets an attribute, returning the previous value if any
    pub fn set(&mut self, name: &str, value: &str) -> Option<String> {
        self.values.insert(name.to_string(), value.to_string())
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.values.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Returns the value only when it is present and not blank
    pub fn get_non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|value| !value.trim().is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
