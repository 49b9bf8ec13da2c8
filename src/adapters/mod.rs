/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the ports: how attributes arrive, how the
/// feed is fetched, where the fragment is rendered and presented.
pub mod inbound;
pub mod outbound;
