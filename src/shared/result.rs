/// Result alias used by application plumbing (config, output, wiring).
/// Fetch-render failures use `FetchError` instead and never escape the element.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
