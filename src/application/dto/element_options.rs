use crate::stock_display::domain::UrlConfig;
use crate::stock_display::services::card_builder::PLACEHOLDER_IMAGE;

/// Stylesheet shipped next to the component
pub const DEFAULT_STYLESHEET: &str = "./wc-stock-fetcher/wc-stock-fetcher.css";

/// ElementOptions - construction-time settings of a stock fetcher element
///
/// Everything here is fixed for the element's lifetime; attributes are the
/// only state that changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementOptions {
    /// URL scheme and identifier convention
    pub url_config: UrlConfig,
    /// Image used for records without photos
    pub placeholder_image: String,
    /// External stylesheet reference, attached once at construction
    pub stylesheet: Option<String>,
}

impl ElementOptions {
    pub fn new(url_config: UrlConfig) -> Self {
        Self {
            url_config,
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
            stylesheet: Some(DEFAULT_STYLESHEET.to_string()),
        }
    }

    pub fn with_stylesheet(mut self, stylesheet: Option<String>) -> Self {
        self.stylesheet = stylesheet;
        self
    }

    pub fn with_placeholder_image(mut self, placeholder_image: impl Into<String>) -> Self {
        self.placeholder_image = placeholder_image.into();
        self
    }
}

impl Default for ElementOptions {
    fn default() -> Self {
        Self::new(UrlConfig::default())
    }
}
