use crate::stock_display::domain::attributes::{BASE_URL, DEALER_ID, ENDPOINT, PRIMARY_COL};
use crate::stock_display::domain::Attributes;
use std::collections::BTreeMap;

/// Query parameters the host page copies onto the element
pub const FORWARDED_PARAMS: &[&str] = &[DEALER_ID, ENDPOINT, BASE_URL, PRIMARY_COL];

/// QueryParamsReader - inbound adapter for page-URL style configuration
///
/// Reads `key=value&key=value` query strings the way the hosting page's
/// bootstrap script does and turns them into element attributes.
pub struct QueryParamsReader;

impl QueryParamsReader {
    /// Parses a query string into a parameter map.
    ///
    /// A leading `?` is ignored, pairs without `=` or with an empty key are
    /// skipped, keys and values are percent-decoded (`+` stays literal) and
    /// later duplicates win.
    pub fn parse(query: &str) -> BTreeMap<String, String> {
        query
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .filter(|(key, _)| !key.is_empty())
            .map(|(key, value)| (decode(key), decode(value)))
            .collect()
    }

    /// Attributes forwarded from `query`: known keys with non-empty values only
    pub fn attributes(query: &str) -> Attributes {
        let params = Self::parse(query);
        FORWARDED_PARAMS
            .iter()
            .filter_map(|name| {
                params
                    .get(*name)
                    .filter(|value| !value.is_empty())
                    .map(|value| (*name, value.as_str()))
            })
            .fold(Attributes::new(), |attrs, (name, value)| {
                attrs.with(name, value)
            })
    }
}

/// Percent-decodes, keeping the raw text when the result is not UTF-8
fn decode(component: &str) -> String {
    urlencoding::decode(component)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| component.to_string())
}
