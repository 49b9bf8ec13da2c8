/// Stock display core - domain model and pure services
///
/// Nothing in this module performs I/O: URL construction, outcome
/// interpretation, view models and markup are all deterministic.
pub mod domain;
pub mod services;
