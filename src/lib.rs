//! stock-fetcher - render a dealer's stock feed as an isolated HTML fragment
//!
//! A headless stock fetcher element: given a dealer id (or an endpoint),
//! it fetches a JSON stock feed and renders it into a render target,
//! keeping the rendered content in step with its attributes.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`stock_display`): attributes, stock records, URL
//!   construction, markup, view models and rendering; no I/O
//! - **Application Layer** (`application`): the `StockFetcherElement` use case
//! - **Ports** (`ports`): lifecycle, stock source, render target, reporting
//! - **Adapters** (`adapters`): reqwest source, in-memory fragment, console, files
//! - **Shared** (`shared`): error types and the `Result` alias
//!
//! # Example
//!
//! ```no_run
//! use stock_fetcher::prelude::*;
//!
//! # async fn example() -> Result<()> {
//! let fragment = InMemoryFragment::new();
//! let element = StockFetcherElement::new(
//!     HttpStockSource::new()?,
//!     fragment.clone(),
//!     StderrProgressReporter::new(),
//!     ElementOptions::default(),
//! );
//!
//! element.set_attribute("dealer-id", "2343").await;
//! element.set_attribute("primary-col", "#c00").await;
//! element.connected().await;
//!
//! println!("{}", fragment.to_html());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod shared;
pub mod stock_display;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::inbound::QueryParamsReader;
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::network::{HttpStockSource, DEFAULT_TIMEOUT_SECS};
    pub use crate::adapters::outbound::render::InMemoryFragment;
    pub use crate::application::dto::ElementOptions;
    pub use crate::application::factories::{PresenterFactory, PresenterType};
    pub use crate::application::use_cases::{StockFetcherElement, PRIMARY_COLOR_VARIABLE};
    pub use crate::ports::inbound::ElementLifecyclePort;
    pub use crate::ports::outbound::{OutputPresenter, ProgressReporter, RenderTarget, StockSource};
    pub use crate::shared::error::FetchError;
    pub use crate::shared::Result;
    pub use crate::stock_display::domain::{
        build_url, Attributes, ElementState, FetchOutcome, IdentifierMode, Node, StockRecord,
        UrlConfig,
    };
    pub use crate::stock_display::services::{CardBuilder, HtmlRenderer, RenderModel};
}
