/// Application layer - the element use case and its wiring helpers
///
/// This layer orchestrates the pure stock display core and reaches the
/// outside world only through ports.
pub mod dto;
pub mod factories;
pub mod use_cases;
