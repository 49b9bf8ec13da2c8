use crate::stock_display::domain::Node;

/// RenderTarget port for the element's isolated output surface
///
/// The element never sees how content is isolated or displayed; it only
/// replaces the content wholesale and sets style variables.
pub trait RenderTarget: Send + Sync {
    /// Replaces all rendered content with `nodes`
    ///
    /// The stylesheet reference attached at construction is not content
    /// and must survive every call.
    fn replace_content(&self, nodes: Vec<Node>);

    /// Attaches the external stylesheet reference
    fn attach_stylesheet(&self, href: &str);

    /// Sets a custom style property (e.g. `--primaryCol`) on the host
    fn set_style_variable(&self, name: &str, value: &str);
}
