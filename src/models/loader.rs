//! Loading graph data from storage.

use std::path::Path;

use super::GraphData;
use crate::error::AppError;

/// Read and validate a graph document from `path`.
pub fn load_graph(path: &Path) -> Result<GraphData, AppError> {
    let content = std::fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let data = GraphData::from_json_str(&content)?;
    tracing::info!(
        "Loaded graph from {}: {} nodes, {} links",
        path.display(),
        data.nodes.len(),
        data.links.len()
    );
    Ok(data)
}

/// Load the graph, falling back to an empty one when the source is
/// unavailable or malformed. The failure is logged, never fatal.
pub fn load_or_empty(path: &Path) -> GraphData {
    match load_graph(path) {
        Ok(data) => data,
        Err(e) => {
            tracing::error!("Error fetching graph data: {}", e);
            GraphData::default()
        }
    }
}
