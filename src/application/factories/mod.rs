/// Factories selecting infrastructure adapters for the application
mod presenter_factory;

pub use presenter_factory::{PresenterFactory, PresenterType};
