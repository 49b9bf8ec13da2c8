/// Data Transfer Objects for application layer
///
/// DTOs carry construction-time settings from the host into the element,
/// keeping the domain layer free of wiring concerns.
mod element_options;

pub use element_options::{ElementOptions, DEFAULT_STYLESHEET};
