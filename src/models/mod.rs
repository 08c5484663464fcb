//! Graph data model and loading.

mod graph;
mod loader;

pub use graph::{GraphData, GraphLink, GraphNode};
pub use loader::{load_graph, load_or_empty};
