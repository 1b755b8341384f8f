use crate::{codec, file};
use graphlite_core::{Edge, Error, Graph, GraphDescription, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Owns every graph in the process, keyed by alias, and the store file they
/// are flushed to.
///
/// Graphs are only reachable through borrows of the repository, so no caller
/// can hold on to a graph across a later removal or reload.
#[derive(Debug)]
pub struct GraphRepository {
    graphs: HashMap<String, Graph>,
    store_path: PathBuf,
}

impl GraphRepository {
    /// An empty repository backed by `store_path`. Nothing is read.
    pub fn new<P: AsRef<Path>>(store_path: P) -> Self {
        Self {
            graphs: HashMap::new(),
            store_path: store_path.as_ref().to_path_buf(),
        }
    }

    /// A repository hydrated from `store_path`. A store that cannot be
    /// decoded is logged and ignored, leaving the repository empty.
    pub fn open<P: AsRef<Path>>(store_path: P) -> Self {
        let mut repository = Self::new(store_path);
        match repository.load() {
            Ok(count) => debug!(count, path = %repository.store_path.display(), "graph store loaded"),
            Err(e) => warn!(path = %repository.store_path.display(), error = %e, "discarding unreadable graph store"),
        }
        repository
    }

    /// Replace the in-memory graphs with the contents of the store file.
    /// On error the current graphs are kept.
    pub fn load(&mut self) -> Result<usize> {
        let value = file::read_json(&self.store_path);
        let graphs = codec::json_to_collection(&value)?;
        self.graphs = graphs
            .into_iter()
            .map(|graph| (graph.alias().to_string(), graph))
            .collect();
        Ok(self.graphs.len())
    }

    #[inline]
    #[must_use]
    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.graphs.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graphs.is_empty()
    }

    /// Create an empty graph, replacing any graph already under `alias`.
    pub fn create_graph(&mut self, alias: &str, is_directed: bool, is_weighted: bool) {
        self.graphs
            .insert(alias.to_string(), Graph::new(alias, is_directed, is_weighted));
    }

    pub fn get_graph(&self, alias: &str) -> Result<&Graph> {
        self.graphs
            .get(alias)
            .ok_or_else(|| Error::GraphNotFound(alias.to_string()))
    }

    fn get_graph_mut(&mut self, alias: &str) -> Result<&mut Graph> {
        self.graphs
            .get_mut(alias)
            .ok_or_else(|| Error::GraphNotFound(alias.to_string()))
    }

    #[inline]
    #[must_use]
    pub fn graph_exists(&self, alias: &str) -> bool {
        self.graphs.contains_key(alias)
    }

    /// False when either the graph or the node is unknown.
    #[must_use]
    pub fn node_exists(&self, alias: &str, name: &str) -> bool {
        self.graphs.get(alias).is_some_and(|graph| graph.has_node(name))
    }

    #[must_use]
    pub fn is_weighted(&self, alias: &str) -> bool {
        self.graphs.get(alias).is_some_and(Graph::is_weighted)
    }

    #[must_use]
    pub fn is_directed(&self, alias: &str) -> bool {
        self.graphs.get(alias).is_some_and(Graph::is_directed)
    }

    /// Aliases in sorted order.
    #[must_use]
    pub fn list_graphs(&self) -> Vec<String> {
        let mut aliases: Vec<String> = self.graphs.keys().cloned().collect();
        aliases.sort();
        aliases
    }

    pub fn add_node(&mut self, alias: &str, name: &str) -> Result<()> {
        self.get_graph_mut(alias)?.add_node(name)
    }

    pub fn create_edge(&mut self, alias: &str, source: &str, destination: &str, weight: Option<i64>) -> Result<Edge> {
        self.get_graph_mut(alias)?.add_edge(source, destination, weight)
    }

    pub fn remove_edge(&mut self, alias: &str, source: &str, destination: &str, weight: Option<i64>) -> Result<Edge> {
        self.get_graph_mut(alias)?.remove_edge(source, destination, weight)
    }

    pub fn remove_node(&mut self, alias: &str, name: &str) -> Result<usize> {
        self.get_graph_mut(alias)?.remove_node(name)
    }

    pub fn list_nodes(&self, alias: &str) -> Result<Vec<String>> {
        Ok(self.get_graph(alias)?.node_names())
    }

    /// List edges of a graph.
    ///
    /// With no node every edge is returned; with one node, the edges in that
    /// node's slot; with both, the edges from `node1` to `node2`.
    pub fn list_edges(&self, alias: &str, node1: Option<&str>, node2: Option<&str>) -> Result<Vec<Edge>> {
        let graph = self.get_graph(alias)?;
        match (node1, node2) {
            (None, None) => Ok(graph.sorted_edges()),
            (Some(from), Some(to)) => graph.list_edges(from, to),
            (Some(name), None) | (None, Some(name)) => graph.list_edges_for_node(name),
        }
    }

    pub fn describe_graph(&self, alias: &str) -> Result<GraphDescription> {
        Ok(self.get_graph(alias)?.describe())
    }

    /// Load a single-graph file and store it under its embedded alias,
    /// replacing any graph with the same alias. Returns that alias.
    pub fn load_graph<P: AsRef<Path>>(&mut self, filename: P) -> Result<String> {
        let value = file::read_json(filename.as_ref());
        let graph = codec::json_to_graph(&value)?;
        let alias = graph.alias().to_string();
        self.graphs.insert(alias.clone(), graph);
        Ok(alias)
    }

    /// Write one graph to its own file.
    pub fn save_graph<P: AsRef<Path>>(&self, alias: &str, filename: P) -> Result<()> {
        let value = codec::graph_to_json(self.get_graph(alias)?)?;
        file::write_json(filename, &value)
    }

    /// Flush every graph to the store file. Returns how many were written.
    pub fn save_all_graphs(&self) -> Result<usize> {
        let value = codec::collection_to_json(self.graphs.values())?;
        file::write_json(&self.store_path, &value)?;
        info!(count = self.graphs.len(), path = %self.store_path.display(), "graph store saved");
        Ok(self.graphs.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphlite_core::ErrorKind;

    fn repository() -> GraphRepository {
        GraphRepository::new("unused.json")
    }

    #[test]
    fn test_create_graph_overwrites() {
        let mut repo = repository();
        repo.create_graph("g", true, false);
        repo.add_node("g", "a").unwrap();

        repo.create_graph("g", false, true);
        let graph = repo.get_graph("g").unwrap();
        assert_eq!(graph.node_count(), 0);
        assert!(!graph.is_directed());
        assert!(graph.is_weighted());
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn test_unknown_alias() {
        let mut repo = repository();

        assert!(matches!(repo.get_graph("nope"), Err(Error::GraphNotFound(_))));
        assert_eq!(repo.add_node("nope", "a").unwrap_err().kind(), ErrorKind::NotFound);
        assert_eq!(repo.create_edge("nope", "a", "b", None).unwrap_err().kind(), ErrorKind::NotFound);
        assert_eq!(repo.remove_node("nope", "a").unwrap_err().kind(), ErrorKind::NotFound);
        assert_eq!(repo.list_nodes("nope").unwrap_err().kind(), ErrorKind::NotFound);
        assert_eq!(repo.describe_graph("nope").unwrap_err().kind(), ErrorKind::NotFound);
        assert!(!repo.node_exists("nope", "a"));
        assert!(!repo.is_weighted("nope"));
        assert!(!repo.is_directed("nope"));
    }

    #[test]
    fn test_graph_errors_propagate_unchanged() {
        let mut repo = repository();
        repo.create_graph("g", true, true);
        repo.add_node("g", "a").unwrap();

        assert!(matches!(repo.add_node("g", "a"), Err(Error::NodeExists(ref n)) if n == "a"));
        assert!(matches!(repo.create_edge("g", "a", "b", Some(1)), Err(Error::NodeNotFound(ref n)) if n == "b"));
        repo.add_node("g", "b").unwrap();
        assert!(matches!(repo.create_edge("g", "a", "b", None), Err(Error::MissingWeight)));
    }

    #[test]
    fn test_list_edges_modes() {
        let mut repo = repository();
        repo.create_graph("g", true, true);
        for name in ["a", "b", "c"] {
            repo.add_node("g", name).unwrap();
        }
        repo.create_edge("g", "a", "b", Some(1)).unwrap();
        repo.create_edge("g", "a", "c", Some(2)).unwrap();
        repo.create_edge("g", "b", "c", Some(3)).unwrap();

        assert_eq!(repo.list_edges("g", None, None).unwrap().len(), 3);
        assert_eq!(repo.list_edges("g", Some("a"), None).unwrap().len(), 2);
        assert_eq!(repo.list_edges("g", None, Some("b")).unwrap().len(), 1);
        let between = repo.list_edges("g", Some("a"), Some("c")).unwrap();
        assert_eq!(between.len(), 1);
        assert_eq!(between[0].weight, 2);
    }

    #[test]
    fn test_list_graphs_sorted() {
        let mut repo = repository();
        repo.create_graph("zeta", false, false);
        repo.create_graph("alpha", false, false);
        assert_eq!(repo.list_graphs(), vec!["alpha".to_string(), "zeta".to_string()]);
    }

    #[test]
    fn test_describe_graph() {
        let mut repo = repository();
        repo.create_graph("g", false, false);
        repo.add_node("g", "a").unwrap();
        repo.add_node("g", "b").unwrap();
        repo.create_edge("g", "a", "b", None).unwrap();

        let description = repo.describe_graph("g").unwrap();
        assert_eq!(description.alias, "g");
        assert!(!description.is_directed);
        assert!(!description.is_weighted);
        assert_eq!(description.node_count, 2);
        assert_eq!(description.edge_count, 1);
    }
}
