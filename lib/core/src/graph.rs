use crate::document::{EdgeDocument, Endpoint, GraphDocument};
use crate::edge::{Edge, DEFAULT_WEIGHT};
use crate::node::Node;
use crate::{Error, Result};
use ahash::{AHashMap, AHashSet};
use std::hash::{Hash, Hasher};

/// Summary of a graph's shape, as reported by `DESCRIBE GRAPH`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphDescription {
    pub alias: String,
    pub is_directed: bool,
    pub is_weighted: bool,
    pub node_count: usize,
    pub edge_count: usize,
}

/// A named graph of nodes and edges.
///
/// Edges are kept twice: once in the flat edge set and once in the adjacency
/// slot of every node they can be walked from. Undirected edges are stored
/// as added in the edge set; the source slot holds that record and the
/// destination slot holds its reverse. A self-loop's reverse is itself, so it
/// occupies its slot once.
#[derive(Debug, Clone)]
pub struct Graph {
    alias: String,
    is_directed: bool,
    is_weighted: bool,
    nodes: AHashSet<Node>,
    edges: AHashSet<Edge>,
    adjacency: AHashMap<String, AHashSet<Edge>>,
}

impl Graph {
    #[must_use]
    pub fn new(alias: impl Into<String>, is_directed: bool, is_weighted: bool) -> Self {
        Self {
            alias: alias.into(),
            is_directed,
            is_weighted,
            nodes: AHashSet::new(),
            edges: AHashSet::new(),
            adjacency: AHashMap::new(),
        }
    }

    #[inline]
    pub fn alias(&self) -> &str {
        &self.alias
    }

    #[inline]
    pub fn is_directed(&self) -> bool {
        self.is_directed
    }

    #[inline]
    pub fn is_weighted(&self) -> bool {
        self.is_weighted
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn has_node(&self, name: &str) -> bool {
        self.adjacency.contains_key(name)
    }

    /// Whether an edge with this identity is stored. Undirected graphs also
    /// match the reversed edge.
    pub fn has_edge(&self, source: &str, destination: &str, weight: i64) -> bool {
        let target = Edge::new(Node::new(source), Node::new(destination), weight);
        self.find_edge(&target).is_some()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Node names in sorted order.
    pub fn node_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.nodes.iter().map(|n| n.name.clone()).collect();
        names.sort();
        names
    }

    /// Every stored edge in sorted order.
    pub fn sorted_edges(&self) -> Vec<Edge> {
        let mut edges: Vec<Edge> = self.edges.iter().cloned().collect();
        edges.sort();
        edges
    }

    pub fn describe(&self) -> GraphDescription {
        GraphDescription {
            alias: self.alias.clone(),
            is_directed: self.is_directed,
            is_weighted: self.is_weighted,
            node_count: self.node_count(),
            edge_count: self.edge_count(),
        }
    }

    pub fn add_node(&mut self, name: &str) -> Result<()> {
        if self.has_node(name) {
            return Err(Error::NodeExists(name.to_string()));
        }
        self.nodes.insert(Node::new(name));
        self.adjacency.insert(name.to_string(), AHashSet::new());
        Ok(())
    }

    /// Add an edge and return it as stored (with the weight resolved).
    pub fn add_edge(&mut self, source: &str, destination: &str, weight: Option<i64>) -> Result<Edge> {
        let edge = self.resolve_edge(source, destination, weight)?;
        if self.find_edge(&edge).is_some() {
            return Err(Error::EdgeExists {
                from: source.to_string(),
                to: destination.to_string(),
            });
        }

        self.index_edge(&edge);
        self.edges.insert(edge.clone());
        Ok(edge)
    }

    /// Remove an edge and return the stored record that was dropped.
    pub fn remove_edge(&mut self, source: &str, destination: &str, weight: Option<i64>) -> Result<Edge> {
        let target = self.resolve_edge(source, destination, weight)?;
        let stored = self
            .find_edge(&target)
            .cloned()
            .ok_or_else(|| Error::EdgeNotFound {
                from: source.to_string(),
                to: destination.to_string(),
            })?;

        self.edges.remove(&stored);
        self.unindex_edge(&stored);
        Ok(stored)
    }

    /// Remove a node together with every edge touching it, including edges
    /// that point into it from other nodes' slots. Returns how many edges
    /// were dropped.
    pub fn remove_node(&mut self, name: &str) -> Result<usize> {
        self.require_node(name)?;

        let before = self.edges.len();
        self.edges.retain(|edge| !edge.touches(name));
        self.adjacency.remove(name);
        for slot in self.adjacency.values_mut() {
            slot.retain(|edge| !edge.touches(name));
        }
        self.nodes.remove(&Node::new(name));

        Ok(before - self.edges.len())
    }

    /// Edges in `from`'s slot that lead to `to`.
    pub fn list_edges(&self, from: &str, to: &str) -> Result<Vec<Edge>> {
        let slot = self.slot(from)?;
        self.require_node(to)?;

        let mut edges: Vec<Edge> = slot
            .iter()
            .filter(|edge| edge.destination.name == to)
            .cloned()
            .collect();
        edges.sort();
        Ok(edges)
    }

    /// Every edge that can be walked from `name`.
    pub fn list_edges_for_node(&self, name: &str) -> Result<Vec<Edge>> {
        let mut edges: Vec<Edge> = self.slot(name)?.iter().cloned().collect();
        edges.sort();
        Ok(edges)
    }

    /// Structural form for persistence. Nodes and edges are written sorted so
    /// repeated saves of the same graph produce the same file.
    pub fn dump(&self) -> GraphDocument {
        let mut nodes: Vec<Node> = self.nodes.iter().cloned().collect();
        nodes.sort();

        GraphDocument {
            alias: self.alias.clone(),
            is_directed: self.is_directed,
            is_weighted: self.is_weighted,
            nodes,
            edges: self
                .sorted_edges()
                .iter()
                .map(|edge| EdgeDocument {
                    source: Endpoint::from(&edge.source),
                    destination: Endpoint::from(&edge.destination),
                    weight: edge.weight,
                })
                .collect(),
        }
    }

    /// Rebuild a graph by replaying its nodes, then its edges, in document
    /// order. The first failing insertion aborts the rebuild.
    pub fn load(document: GraphDocument) -> Result<Self> {
        let mut graph = Graph::new(document.alias, document.is_directed, document.is_weighted);
        for node in &document.nodes {
            graph.add_node(node.name())?;
        }
        for edge in &document.edges {
            graph.add_edge(edge.source.name(), edge.destination.name(), Some(edge.weight))?;
        }
        Ok(graph)
    }

    fn require_node(&self, name: &str) -> Result<()> {
        if self.has_node(name) {
            Ok(())
        } else {
            Err(Error::NodeNotFound(name.to_string()))
        }
    }

    fn slot(&self, name: &str) -> Result<&AHashSet<Edge>> {
        self.adjacency
            .get(name)
            .ok_or_else(|| Error::NodeNotFound(name.to_string()))
    }

    /// Check both endpoints, apply the weight rule and build the edge.
    fn resolve_edge(&self, source: &str, destination: &str, weight: Option<i64>) -> Result<Edge> {
        self.require_node(source)?;
        self.require_node(destination)?;

        let weight = if self.is_weighted {
            weight.ok_or(Error::MissingWeight)?
        } else {
            DEFAULT_WEIGHT
        };
        Ok(Edge::new(Node::new(source), Node::new(destination), weight))
    }

    fn find_edge(&self, edge: &Edge) -> Option<&Edge> {
        self.edges.get(edge).or_else(|| {
            if self.is_directed {
                None
            } else {
                self.edges.get(&edge.reversed())
            }
        })
    }

    fn index_edge(&mut self, edge: &Edge) {
        if let Some(slot) = self.adjacency.get_mut(&edge.source.name) {
            slot.insert(edge.clone());
        }
        if !self.is_directed {
            if let Some(slot) = self.adjacency.get_mut(&edge.destination.name) {
                slot.insert(edge.reversed());
            }
        }
    }

    fn unindex_edge(&mut self, edge: &Edge) {
        if let Some(slot) = self.adjacency.get_mut(&edge.source.name) {
            slot.remove(edge);
        }
        if !self.is_directed {
            if let Some(slot) = self.adjacency.get_mut(&edge.destination.name) {
                slot.remove(&edge.reversed());
            }
        }
    }
}

impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.alias == other.alias
    }
}

impl Eq for Graph {}

impl Hash for Graph {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.alias.hash(state);
    }
}
