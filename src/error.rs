//! Application error types.

use std::path::PathBuf;

use thiserror::Error;

/// Application-level errors for orbitgraph.
#[derive(Error, Debug)]
pub enum AppError {
    // Graph data errors
    #[error("Failed to read graph data from {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed graph data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate node id: {0}")]
    DuplicateNode(String),

    // Config errors
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("Invalid configuration: {field} {reason}")]
    InvalidConfig { field: &'static str, reason: String },
}
