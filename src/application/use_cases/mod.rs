/// Use cases - application orchestration
mod stock_fetcher_element;

pub use stock_fetcher_element::{StockFetcherElement, PRIMARY_COLOR_VARIABLE};
