/// ProgressReporter port for ephemeral diagnostics
///
/// Diagnostics never go to the rendered output; implementations decide
/// where they end up (stderr, a capture buffer, nowhere).
pub trait ProgressReporter: Send + Sync {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Signals that a request is outstanding
    ///
    /// # Arguments
    /// * `message` - Description of what is being waited on
    fn begin_wait(&self, message: &str);

    /// Signals that the outstanding request completed
    fn end_wait(&self);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
