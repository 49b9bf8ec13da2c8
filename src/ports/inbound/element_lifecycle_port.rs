use crate::stock_display::domain::ElementState;
use async_trait::async_trait;

/// ElementLifecyclePort - Inbound port mirroring a custom element's callbacks
///
/// None of these methods return errors: every failure of the
/// fetch-render cycle is rendered as a message instead.
#[async_trait]
pub trait ElementLifecyclePort: Send + Sync {
    /// The element became part of the document
    async fn connected(&self);

    /// An attribute was set by the host
    ///
    /// # Arguments
    /// * `name` - Attribute name, e.g. `dealer-id`
    /// * `value` - New value (possibly empty)
    async fn set_attribute(&self, name: &str, value: &str);

    /// An attribute was removed by the host; never refetches
    fn remove_attribute(&self, name: &str);

    /// Current lifecycle state
    fn state(&self) -> ElementState;
}
