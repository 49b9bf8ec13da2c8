use crate::stock_display::domain::stock_record::field_text;
use crate::stock_display::domain::{FetchOutcome, StockRecord};

/// Image shown for records without photos
pub const PLACEHOLDER_IMAGE: &str =
    "https://placehold.co/250x167/e1e1e1/bebebe?text=No%20Image&font=lato";

/// Text shown for any missing field
pub const NOT_AVAILABLE: &str = "N/A";

/// One labelled line of a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureView {
    pub label: &'static str,
    pub value: String,
}

/// Display-ready card for one stock record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockCardView {
    pub heading: String,
    pub image_src: String,
    pub image_alt: String,
    pub features: Vec<FeatureView>,
}

/// What the render target should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderModel {
    StockList { cards: Vec<StockCardView> },
    Message(String),
}

impl RenderModel {
    pub fn item_count(&self) -> Option<usize> {
        match self {
            RenderModel::StockList { cards } => Some(cards.len()),
            RenderModel::Message(_) => None,
        }
    }
}

/// Maps fetch outcomes to view models, defaulting every gap
#[derive(Debug, Clone)]
pub struct CardBuilder {
    placeholder_image: String,
}

impl CardBuilder {
    pub fn new() -> Self {
        Self {
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
        }
    }

    pub fn with_placeholder(placeholder_image: impl Into<String>) -> Self {
        Self {
            placeholder_image: placeholder_image.into(),
        }
    }

    pub fn build(&self, outcome: &FetchOutcome) -> RenderModel {
        match outcome {
            FetchOutcome::Records(records) => RenderModel::StockList {
                cards: records.iter().map(|record| self.build_card(record)).collect(),
            },
            FetchOutcome::Message(message) => RenderModel::Message(message.clone()),
        }
    }

    pub fn build_card(&self, record: &StockRecord) -> StockCardView {
        let make = or_na(field_text(record.make.as_ref()));
        let model = or_na(field_text(record.model.as_ref()));

        let features = vec![
            feature("Transmission", record.transmission.as_ref()),
            feature("Body Type", record.body_type.as_ref()),
            feature("Color", record.colour.as_ref()),
            feature("Kilometres", record.odometer.as_ref()),
            FeatureView {
                label: "Engine",
                value: engine_text(record),
            },
            feature("Stock №", record.stock_number.as_ref()),
        ];

        StockCardView {
            heading: format!("{} - {}", make, model),
            image_src: record
                .first_image()
                .unwrap_or(self.placeholder_image.as_str())
                .to_string(),
            image_alt: format!("{} {}", make, model),
            features,
        }
    }
}

impl Default for CardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn or_na(text: Option<String>) -> String {
    text.unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn feature(label: &'static str, field: Option<&serde_json::Value>) -> FeatureView {
    FeatureView {
        label,
        value: or_na(field_text(field)),
    }
}

/// `size sizeOption`; a single N/A when both halves are missing
fn engine_text(record: &StockRecord) -> String {
    let size = field_text(record.size.as_ref());
    let option = field_text(record.size_option.as_ref());
    match (size, option) {
        (None, None) => NOT_AVAILABLE.to_string(),
        (size, option) => format!("{} {}", or_na(size), or_na(option)),
    }
}
