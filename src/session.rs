//! Runs parsed shell commands against a [`GraphService`] and turns results
//! into printable responses.

use crate::command::Command;
use graphlite_core::{Edge, Result};
use graphlite_storage::GraphService;

pub const WELCOME_MESSAGE: &str = "Welcome to GraphLite!";
pub const HELP_PROMPT: &str = "Type 'HELP' for available commands or 'EXIT' to quit.";
pub const GOODBYE_MESSAGE: &str = "Goodbye!";
pub const PROMPT: &str = "GraphLite> ";

pub const HELP_TEXT: &str = "
GraphLite - Lightweight Graph Store

Graph Management:
  CREATE GRAPH <alias> [DIRECTED] [WEIGHTED]  - Create a new graph
  LIST GRAPHS                                 - List all graphs
  DESCRIBE GRAPH <alias>                      - Show graph properties
  LOAD GRAPH <filename>                       - Load graph from file
  SAVE GRAPH <alias> <filename>               - Save graph to file

Node Operations:
  ADD NODE <graph_alias> <node_name>          - Add a node to graph
  DEL NODE <graph_alias> <node_name>          - Delete a node from graph
  LIST NODES <graph_alias>                    - List all nodes in graph

Edge Operations:
  ADD EDGE <graph_alias> <node1> <node2> [weight]  - Add an edge
  DEL EDGE <graph_alias> <node1> <node2> [weight]  - Delete an edge
  LIST EDGES <graph_alias> [node1] [node2]         - List edges

Utility:
  HELP                                        - Show this help
  CLEAR                                       - Clear screen
  EXIT                                        - Save and exit

Examples:
  CREATE GRAPH social DIRECTED
  ADD NODE social alice
  ADD EDGE social alice bob 5
  LIST NODES social
";

/// What a command produced, for the shell to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Success(String),
    /// A heading followed by indented detail lines.
    Info(String, Vec<String>),
    Text(&'static str),
    Clear,
    Exit,
}

#[derive(Debug)]
pub struct Session {
    service: GraphService,
}

impl Session {
    pub fn new(service: GraphService) -> Self {
        Self { service }
    }

    #[inline]
    pub fn service(&self) -> &GraphService {
        &self.service
    }

    pub fn execute(&mut self, command: Command) -> Result<Response> {
        let response = match command {
            Command::CreateGraph {
                alias,
                directed,
                weighted,
            } => {
                self.service.create_graph(&alias, directed, weighted)?;
                Response::Success(format!(
                    "Created graph '{alias}' (directed: {directed}, weighted: {weighted})"
                ))
            }
            Command::AddNode { alias, node } => {
                self.service.add_node(&alias, &node)?;
                Response::Success(format!("Added node '{node}' to graph '{alias}'"))
            }
            Command::AddEdge {
                alias,
                source,
                destination,
                weight,
            } => {
                self.service.create_edge(&alias, &source, &destination, weight)?;
                Response::Success(format!(
                    "Added edge from '{source}' to '{destination}'{} in graph '{alias}'",
                    weight_text(weight)
                ))
            }
            Command::DelNode { alias, node } => {
                self.service.remove_node(&alias, &node)?;
                Response::Success(format!("Removed node '{node}' from graph '{alias}'"))
            }
            Command::DelEdge {
                alias,
                source,
                destination,
                weight,
            } => {
                self.service.remove_edge(&alias, &source, &destination, weight)?;
                Response::Success(format!(
                    "Removed edge from '{source}' to '{destination}'{} in graph '{alias}'",
                    weight_text(weight)
                ))
            }
            Command::ListGraphs => {
                let graphs = self.service.list_graphs();
                if graphs.is_empty() {
                    Response::Info("No graphs exist".to_string(), Vec::new())
                } else {
                    Response::Info("Available graphs:".to_string(), graphs)
                }
            }
            Command::ListNodes { alias } => {
                let nodes = self.service.list_nodes(&alias)?;
                if nodes.is_empty() {
                    Response::Info(format!("No nodes in graph '{alias}'"), Vec::new())
                } else {
                    Response::Info(format!("Nodes in graph '{alias}':"), nodes)
                }
            }
            Command::ListEdges { alias, node1, node2 } => {
                let edges = self
                    .service
                    .list_edges(&alias, node1.as_deref(), node2.as_deref())?;
                if edges.is_empty() {
                    Response::Info(format!("No edges found in graph '{alias}'"), Vec::new())
                } else {
                    Response::Info(
                        format!("Edges in graph '{alias}':"),
                        edges.iter().map(Edge::to_string).collect(),
                    )
                }
            }
            Command::DescribeGraph { alias } => {
                let description = self.service.describe_graph(&alias)?;
                Response::Info(
                    format!("Graph: {}", description.alias),
                    vec![
                        format!("Directed: {}", description.is_directed),
                        format!("Weighted: {}", description.is_weighted),
                        format!("Nodes: {}", description.node_count),
                        format!("Edges: {}", description.edge_count),
                    ],
                )
            }
            Command::LoadGraph { filename } => {
                let alias = self.service.load_graph(&filename)?;
                Response::Success(format!("Loaded graph '{alias}' from '{filename}'"))
            }
            Command::SaveGraph { alias, filename } => {
                self.service.save_graph(&alias, &filename)?;
                Response::Success(format!("Saved graph '{alias}' to '{filename}'"))
            }
            Command::Help => Response::Text(HELP_TEXT),
            Command::Clear => Response::Clear,
            Command::Exit => Response::Exit,
        };
        Ok(response)
    }

    /// Flush every graph to the store. Returns how many were saved.
    pub fn shutdown(self) -> Result<usize> {
        self.service.shutdown()
    }
}

fn weight_text(weight: Option<i64>) -> String {
    weight.map(|w| format!(" with weight {w}")).unwrap_or_default()
}
