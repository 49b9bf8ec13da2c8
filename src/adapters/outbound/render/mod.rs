/// Render target adapters
mod in_memory_fragment;

pub use in_memory_fragment::InMemoryFragment;
