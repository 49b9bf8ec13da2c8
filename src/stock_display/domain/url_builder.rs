use super::attributes::{Attributes, BASE_URL, DEALER_ID, ENDPOINT};
use crate::shared::error::FetchError;

/// Public bucket the dealer stock feeds are published to
pub const DEFAULT_BASE_URL: &str = "https://s3.ap-southeast-2.amazonaws.com/stock.publish";
/// Prefix of the per-dealer directory
pub const DEFAULT_PATH_PREFIX: &str = "dealer_";
/// File name of the stock feed inside a dealer directory
pub const DEFAULT_FILE_NAME: &str = "stock.json";

/// Which attribute convention selects the remote resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentifierMode {
    /// `dealer-id` attribute, fixed base URL, `dealer_<id>/stock.json`
    #[default]
    Dealer,
    /// `base-url` + `endpoint` attributes, joined verbatim
    Endpoint,
}

impl IdentifierMode {
    /// Attributes whose change requires a refetch
    pub fn identifier_attributes(&self) -> &'static [&'static str] {
        match self {
            IdentifierMode::Dealer => &[DEALER_ID],
            IdentifierMode::Endpoint => &[ENDPOINT, BASE_URL],
        }
    }

    /// Message rendered when the element is attached without an identifier
    pub fn missing_identifier_message(&self) -> &'static str {
        match self {
            IdentifierMode::Dealer => "Dealer ID not provided.",
            IdentifierMode::Endpoint => "Base URL or endpoint not provided.",
        }
    }
}

impl std::str::FromStr for IdentifierMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dealer" | "dealer-id" => Ok(IdentifierMode::Dealer),
            "endpoint" => Ok(IdentifierMode::Endpoint),
            _ => Err(format!(
                "Invalid mode: {}. Please specify 'dealer' or 'endpoint'",
                s
            )),
        }
    }
}

impl std::fmt::Display for IdentifierMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdentifierMode::Dealer => write!(f, "dealer"),
            IdentifierMode::Endpoint => write!(f, "endpoint"),
        }
    }
}

/// Static part of the URL scheme; attributes supply the rest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlConfig {
    pub mode: IdentifierMode,
    /// Base URL; in endpoint mode only a fallback for the `base-url` attribute
    pub base_url: Option<String>,
    /// Prepended to the dealer id (dealer mode only)
    pub path_prefix: String,
    /// Appended as the last path segment when set
    pub file_name: Option<String>,
}

impl UrlConfig {
    pub fn dealer() -> Self {
        Self {
            mode: IdentifierMode::Dealer,
            base_url: Some(DEFAULT_BASE_URL.to_string()),
            path_prefix: DEFAULT_PATH_PREFIX.to_string(),
            file_name: Some(DEFAULT_FILE_NAME.to_string()),
        }
    }

    pub fn endpoint() -> Self {
        Self {
            mode: IdentifierMode::Endpoint,
            base_url: None,
            path_prefix: String::new(),
            file_name: None,
        }
    }

    pub fn for_mode(mode: IdentifierMode) -> Self {
        match mode {
            IdentifierMode::Dealer => Self::dealer(),
            IdentifierMode::Endpoint => Self::endpoint(),
        }
    }
}

impl Default for UrlConfig {
    fn default() -> Self {
        Self::dealer()
    }
}

/// Derives the feed URL from the static config and the element's attributes.
///
/// Pure: no I/O, same inputs always give the same URL or the same error.
pub fn build_url(config: &UrlConfig, attrs: &Attributes) -> Result<String, FetchError> {
    let missing = || FetchError::MissingIdentifier {
        message: config.mode.missing_identifier_message().to_string(),
    };

    let mut url = match config.mode {
        IdentifierMode::Dealer => {
            let dealer_id = attrs.get_non_empty(DEALER_ID).ok_or_else(missing)?;
            validate_dealer_id(dealer_id)?;
            let base = config
                .base_url
                .as_deref()
                .filter(|base| !base.trim().is_empty())
                .ok_or_else(missing)?;

            format!(
                "{}/{}{}",
                base.trim_end_matches('/'),
                config.path_prefix,
                urlencoding::encode(dealer_id)
            )
        }
        IdentifierMode::Endpoint => {
            let base = attrs
                .get_non_empty(BASE_URL)
                .or_else(|| {
                    config
                        .base_url
                        .as_deref()
                        .filter(|base| !base.trim().is_empty())
                })
                .ok_or_else(missing)?;
            let endpoint = attrs.get_non_empty(ENDPOINT).ok_or_else(missing)?;
            validate_endpoint(endpoint)?;

            format!(
                "{}/{}",
                base.trim_end_matches('/'),
                endpoint.trim_start_matches('/')
            )
        }
    };

    if let Some(file_name) = config.file_name.as_deref().filter(|name| !name.is_empty()) {
        url.push('/');
        url.push_str(file_name.trim_start_matches('/'));
    }

    Ok(url)
}

/// A dealer id must stay a single path segment
fn validate_dealer_id(dealer_id: &str) -> Result<(), FetchError> {
    if dealer_id.contains('/') || dealer_id.contains('\\') {
        return Err(FetchError::InvalidIdentifier {
            reason: format!("{} contains path separators", DEALER_ID),
        });
    }

    if dealer_id.contains("..") {
        return Err(FetchError::InvalidIdentifier {
            reason: format!("{} contains '..'", DEALER_ID),
        });
    }

    if dealer_id.contains('#') || dealer_id.contains('?') || dealer_id.contains('@') {
        return Err(FetchError::InvalidIdentifier {
            reason: format!("{} contains URL-unsafe characters", DEALER_ID),
        });
    }

    Ok(())
}

/// Endpoints may span several segments but must not climb out of the base
fn validate_endpoint(endpoint: &str) -> Result<(), FetchError> {
    if endpoint.contains('\\') || endpoint.split('/').any(|segment| segment == "..") {
        return Err(FetchError::InvalidIdentifier {
            reason: format!("{} must not traverse above the base URL", ENDPOINT),
        });
    }
    Ok(())
}
