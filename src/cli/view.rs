//! View subcommand - open the 3D viewer.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;
use crate::models::load_or_empty;
use crate::visualization::run_visualizer;

/// Open the viewer on a graph file.
#[derive(Parser)]
pub struct ViewCommand {
    /// Path to the JSON graph file. Defaults to `graph.source` from config.
    pub input: Option<PathBuf>,
}

impl ViewCommand {
    /// Run the view command.
    ///
    /// A missing or malformed file is logged and the viewer opens on an
    /// empty scene; the camera still orbits.
    pub fn run(self, config: Config) -> color_eyre::Result<()> {
        let path = self.input.unwrap_or_else(|| config.graph.source.clone());
        let graph = load_or_empty(&path);

        tracing::info!("Opening viewer with {} nodes", graph.nodes.len());
        run_visualizer(graph, config);
        Ok(())
    }
}
