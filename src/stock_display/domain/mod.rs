pub mod attributes;
pub mod element_state;
pub mod fetch_outcome;
pub mod generation;
pub mod markup;
pub mod reaction;
pub mod stock_record;
pub mod url_builder;

pub use attributes::Attributes;
pub use element_state::ElementState;
pub use fetch_outcome::FetchOutcome;
pub use generation::GenerationCounter;
pub use markup::{Element, Node};
pub use reaction::{AttributeReaction, ReactionTable};
pub use stock_record::StockRecord;
pub use url_builder::{build_url, IdentifierMode, UrlConfig};
