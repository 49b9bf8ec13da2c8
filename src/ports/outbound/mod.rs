/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the element uses to interact
/// with the outside world (network, render surface, console, output).
pub mod output_presenter;
pub mod progress_reporter;
pub mod render_target;
pub mod stock_source;

pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use render_target::RenderTarget;
pub use stock_source::StockSource;
