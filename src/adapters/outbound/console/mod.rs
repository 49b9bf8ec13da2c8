/// Console adapters for diagnostics
mod progress_reporter;

pub use progress_reporter::StderrProgressReporter;
