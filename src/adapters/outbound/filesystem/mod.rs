/// Filesystem adapters for presenting the rendered fragment
mod file_writer;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
