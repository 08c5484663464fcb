//! CLI module for orbitgraph.
//!
//! Subcommands:
//! - `view`: Open the 3D viewer on a graph file
//! - `inspect`: Summarize a graph file and resolve searches without a window

mod inspect;
mod view;

use clap::{Parser, Subcommand};

pub use inspect::InspectCommand;
pub use view::ViewCommand;

use crate::config::Config;

/// orbitgraph - orbiting 3D graph viewer
#[derive(Parser)]
#[command(name = "orbitgraph")]
#[command(about = "3D graph viewer with an idle orbit camera and click-to-focus")]
#[command(version)]
pub struct App {
    /// Run in verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Open the viewer on a JSON graph file
    View(ViewCommand),

    /// Print a summary of a JSON graph file
    Inspect(InspectCommand),
}

impl App {
    /// Run the CLI application.
    pub fn run(self) -> color_eyre::Result<()> {
        let config = Config::load()?;
        tracing::debug!("Loaded configuration: {:?}", config);

        match self.command {
            Command::View(cmd) => cmd.run(config),
            Command::Inspect(cmd) => cmd.run(config),
        }
    }
}
