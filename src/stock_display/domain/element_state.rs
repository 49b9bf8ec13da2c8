/// Lifecycle state of a stock fetcher element
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ElementState {
    /// Constructed, not yet attached or no fetch issued
    #[default]
    Idle,
    /// A fetch stamped with `generation` is outstanding
    Loading { generation: u64 },
    /// Last render showed a stock list
    Rendered { item_count: usize },
    /// Last render showed a message
    Failed { message: String },
}

impl std::fmt::Display for ElementState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElementState::Idle => write!(f, "idle"),
            ElementState::Loading { generation } => write!(f, "loading (#{})", generation),
            ElementState::Rendered { item_count } => write!(f, "rendered ({} items)", item_count),
            ElementState::Failed { message } => write!(f, "failed: {}", message),
        }
    }
}
