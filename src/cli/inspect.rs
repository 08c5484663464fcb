//! Inspect subcommand - summarize a graph file without opening a window.

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::Parser;
use serde_json::json;

use crate::camera::focus_pose;
use crate::config::Config;
use crate::models::{load_graph, GraphData};

/// Print node and link counts, and optionally resolve a search query.
#[derive(Parser)]
pub struct InspectCommand {
    /// Path to the JSON graph file. Defaults to `graph.source` from config.
    pub input: Option<PathBuf>,

    /// Resolve a search query (node id or name, case-insensitive).
    #[arg(short, long)]
    pub find: Option<String>,

    /// Print the summary as JSON.
    #[arg(long)]
    pub json: bool,
}

impl InspectCommand {
    /// Run the inspect command. Unlike `view`, unreadable data is an error.
    pub fn run(self, config: Config) -> color_eyre::Result<()> {
        let path = self.input.clone().unwrap_or_else(|| config.graph.source.clone());
        let graph = load_graph(&path)?;

        print!("{}", self.report(&graph, &config)?);
        Ok(())
    }

    /// Build the summary text.
    pub fn report(&self, graph: &GraphData, config: &Config) -> color_eyre::Result<String> {
        let found = self.find.as_deref().map(|query| (query, graph.find(query)));
        let standoff = config.focus.standoff;

        if self.json {
            let search = found.map(|(query, node)| {
                json!({
                    "query": query,
                    "match": node.map(|n| {
                        let pose = focus_pose(n.position(), standoff);
                        json!({
                            "id": n.id,
                            "label": n.label(),
                            "position": [n.x, n.y, n.z],
                            "focus": {
                                "position": pose.position.to_array(),
                                "target": pose.target.to_array(),
                            },
                        })
                    }),
                })
            });
            let summary = json!({
                "nodes": graph.nodes.len(),
                "links": graph.links.len(),
                "search": search,
            });
            return Ok(format!("{}\n", serde_json::to_string_pretty(&summary)?));
        }

        let mut out = String::new();
        writeln!(out, "Nodes: {}", graph.nodes.len())?;
        writeln!(out, "Links: {}", graph.links.len())?;

        match found {
            Some((_, Some(node))) => {
                let pose = focus_pose(node.position(), standoff);
                writeln!(
                    out,
                    "Match: {} ({}) at [{}, {}, {}]",
                    node.id,
                    node.label(),
                    node.x,
                    node.y,
                    node.z
                )?;
                writeln!(
                    out,
                    "Focus camera: position {:?}, target {:?}",
                    pose.position.to_array(),
                    pose.target.to_array()
                )?;
            }
            Some((query, None)) => writeln!(out, "No node matches {:?}", query.trim())?,
            None => {}
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GraphLink, GraphNode};

    fn graph() -> GraphData {
        let mut a = GraphNode::new("A", 50.0, 0.0, 0.0);
        a.name = Some("Alpha".to_string());
        GraphData {
            nodes: vec![a, GraphNode::new("B", 0.0, 0.0, 0.0)],
            links: vec![GraphLink::new("A", "B")],
        }
    }

    fn command(find: Option<&str>, json: bool) -> InspectCommand {
        InspectCommand {
            input: None,
            find: find.map(str::to_string),
            json,
        }
    }

    #[test]
    fn test_report_counts() {
        let report = command(None, false)
            .report(&graph(), &Config::default())
            .unwrap();
        assert_eq!(report, "Nodes: 2\nLinks: 1\n");
    }

    #[test]
    fn test_report_match() {
        let report = command(Some("alpha"), false)
            .report(&graph(), &Config::default())
            .unwrap();
        assert!(report.contains("Match: A (Alpha) at [50, 0, 0]"));
        assert!(report.contains("position [90.0, 0.0, 0.0]"));
        assert!(report.contains("target [50.0, 0.0, 0.0]"));
    }

    #[test]
    fn test_report_miss() {
        let report = command(Some(" zulu "), false)
            .report(&graph(), &Config::default())
            .unwrap();
        assert!(report.contains("No node matches \"zulu\""));
    }

    #[test]
    fn test_report_json() {
        let report = command(Some("B"), true)
            .report(&graph(), &Config::default())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();

        assert_eq!(value["nodes"], 2);
        assert_eq!(value["search"]["match"]["id"], "B");
        // Origin node parks the camera along +Z
        assert_eq!(
            value["search"]["match"]["focus"]["position"],
            json!([0.0, 0.0, 40.0])
        );
    }
}
