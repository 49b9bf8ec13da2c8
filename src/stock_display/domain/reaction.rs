use super::attributes::PRIMARY_COL;
use super::url_builder::IdentifierMode;
use std::collections::HashMap;

/// What an attribute change makes the element do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeReaction {
    /// Rebuild the URL, fetch and render
    Refetch,
    /// Update the presentation variable only
    Restyle,
}

/// Explicit mapping from observed attribute name to its reaction.
///
/// Attributes missing from the table are stored but never acted upon.
#[derive(Debug, Clone)]
pub struct ReactionTable {
    reactions: HashMap<&'static str, AttributeReaction>,
}

impl ReactionTable {
    pub fn for_mode(mode: IdentifierMode) -> Self {
        let mut reactions = HashMap::new();
        for name in mode.identifier_attributes() {
            reactions.insert(*name, AttributeReaction::Refetch);
        }
        reactions.insert(PRIMARY_COL, AttributeReaction::Restyle);
        Self { reactions }
    }

    pub fn reaction_for(&self, name: &str) -> Option<AttributeReaction> {
        self.reactions.get(name).copied()
    }

    /// Observed attribute names, sorted
    pub fn observed_attributes(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.reactions.keys().copied().collect();
        names.sort_unstable();
        names
    }
}
