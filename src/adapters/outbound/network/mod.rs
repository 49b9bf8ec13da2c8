/// Network adapters for fetching remote stock feeds
mod http_stock_source;

pub use http_stock_source::{HttpStockSource, DEFAULT_TIMEOUT_SECS};
