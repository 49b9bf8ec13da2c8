/// Inbound adapters - translate host input into element attributes
mod query_params;

pub use query_params::{QueryParamsReader, FORWARDED_PARAMS};
