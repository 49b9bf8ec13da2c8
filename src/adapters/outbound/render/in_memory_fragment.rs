use crate::ports::outbound::RenderTarget;
use crate::stock_display::domain::markup::nodes_to_html;
use crate::stock_display::domain::{Element, Node};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct FragmentState {
    stylesheet: Option<String>,
    style_variables: BTreeMap<String, String>,
    content: Vec<Node>,
    replacements: usize,
}

/// InMemoryFragment adapter - a headless isolated subtree
///
/// Implements the RenderTarget port. Clones share the same fragment, so
/// the host can keep a handle while the element owns another.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFragment {
    inner: Arc<Mutex<FragmentState>>,
}

impl InMemoryFragment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializes the whole fragment: stylesheet, host style, content
    pub fn to_html(&self) -> String {
        let state = self.lock();
        let mut nodes: Vec<Node> = Vec::new();

        if let Some(href) = &state.stylesheet {
            nodes.push(
                Element::new("link")
                    .attr("rel", "stylesheet")
                    .attr("href", href)
                    .into(),
            );
        }

        if !state.style_variables.is_empty() {
            let declarations: Vec<String> = state
                .style_variables
                .iter()
                .map(|(name, value)| format!("{}: {};", name, value))
                .collect();
            nodes.push(
                Element::new("style")
                    .text(&format!(":host {{ {} }}", declarations.join(" ")))
                    .into(),
            );
        }

        let mut html = nodes_to_html(&nodes);
        html.push_str(&nodes_to_html(&state.content));
        html
    }

    /// Serialized content only, without stylesheet or host style
    pub fn content_html(&self) -> String {
        nodes_to_html(&self.lock().content)
    }

    pub fn content(&self) -> Vec<Node> {
        self.lock().content.clone()
    }

    pub fn stylesheet(&self) -> Option<String> {
        self.lock().stylesheet.clone()
    }

    pub fn style_variable(&self, name: &str) -> Option<String> {
        self.lock().style_variables.get(name).cloned()
    }

    /// Number of `replace_content` calls so far
    pub fn replacement_count(&self) -> usize {
        self.lock().replacements
    }

    fn lock(&self) -> MutexGuard<'_, FragmentState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl RenderTarget for InMemoryFragment {
    fn replace_content(&self, nodes: Vec<Node>) {
        let mut state = self.lock();
        state.content = nodes;
        state.replacements += 1;
    }

    fn attach_stylesheet(&self, href: &str) {
        self.lock().stylesheet = Some(href.to_string());
    }

    fn set_style_variable(&self, name: &str, value: &str) {
        self.lock()
            .style_variables
            .insert(name.to_string(), value.to_string());
    }
}
