pub mod card_builder;
pub mod html_renderer;

pub use card_builder::{CardBuilder, FeatureView, RenderModel, StockCardView};
pub use html_renderer::HtmlRenderer;
