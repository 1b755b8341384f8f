//! Plain structural form of a graph, as written to and read from storage.

use crate::node::Node;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub alias: String,
    pub is_directed: bool,
    pub is_weighted: bool,
    pub nodes: Vec<Node>,
    pub edges: Vec<EdgeDocument>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeDocument {
    pub source: Endpoint,
    pub destination: Endpoint,
    pub weight: i64,
}

/// An edge endpoint. Written as a bare name; older files may carry the full
/// `{"name": ...}` node object instead, so both are accepted on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Endpoint {
    Name(String),
    Node(Node),
}

impl Endpoint {
    #[inline]
    pub fn name(&self) -> &str {
        match self {
            Endpoint::Name(name) => name,
            Endpoint::Node(node) => node.name(),
        }
    }
}

impl From<&Node> for Endpoint {
    fn from(node: &Node) -> Self {
        Endpoint::Name(node.name.clone())
    }
}
