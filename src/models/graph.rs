//! Graph data model: nodes with fixed 3D positions and the links between them.

use std::collections::HashSet;

use bevy::math::Vec3;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::AppError;

/// A node in the graph.
///
/// Any keys beyond the known ones (e.g. `description`, `group`) are kept in
/// `attributes` for labeling and colouring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Unique, stable identifier.
    pub id: String,
    /// Optional display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Free-form attributes.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl GraphNode {
    /// Create a node with no name or attributes.
    pub fn new(id: impl Into<String>, x: f32, y: f32, z: f32) -> Self {
        Self {
            id: id.into(),
            name: None,
            x,
            y,
            z,
            attributes: Map::new(),
        }
    }

    /// Position in world space.
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Display label: the name if present, otherwise the id.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    /// Case-insensitive exact match against the id or the name.
    ///
    /// `query` is expected to be lowercased already.
    fn matches_lowercase(&self, query: &str) -> bool {
        self.id.to_lowercase() == query
            || self
                .name
                .as_ref()
                .is_some_and(|name| name.to_lowercase() == query)
    }
}

/// A link between two nodes, by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphLink {
    /// Source node ID.
    pub source: String,
    /// Target node ID.
    pub target: String,
    /// Free-form attributes.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl GraphLink {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            attributes: Map::new(),
        }
    }
}

/// The complete graph document: `{ "nodes": [...], "links": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
    #[serde(default)]
    pub nodes: Vec<GraphNode>,
    #[serde(default)]
    pub links: Vec<GraphLink>,
}

impl GraphData {
    /// Parse and validate a JSON graph document.
    pub fn from_json_str(content: &str) -> Result<Self, AppError> {
        let data: GraphData = serde_json::from_str(content)?;
        data.validated()
    }

    /// Reject duplicate node ids and drop links whose endpoints are unknown.
    pub fn validated(mut self) -> Result<Self, AppError> {
        let mut ids = HashSet::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if !ids.insert(node.id.as_str()) {
                return Err(AppError::DuplicateNode(node.id.clone()));
            }
        }

        let before = self.links.len();
        self.links.retain(|link| {
            let known = ids.contains(link.source.as_str()) && ids.contains(link.target.as_str());
            if !known {
                tracing::warn!(
                    "Dropping link {} -> {}: unknown endpoint",
                    link.source,
                    link.target
                );
            }
            known
        });
        if self.links.len() < before {
            tracing::warn!("Dropped {} dangling link(s)", before - self.links.len());
        }

        Ok(self)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node with this exact id.
    pub fn get(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Search lookup: the first node whose id or name equals the trimmed
    /// query, ignoring case. Blank queries match nothing.
    pub fn find(&self, query: &str) -> Option<&GraphNode> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        let query = query.to_lowercase();
        self.nodes.iter().find(|n| n.matches_lowercase(&query))
    }
}
