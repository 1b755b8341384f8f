use crate::repository::GraphRepository;
use graphlite_core::{Edge, Error, Graph, GraphDescription, Result};
use std::path::Path;

/// Policy layer over [`GraphRepository`].
///
/// Rejects duplicate aliases on create and creates missing endpoint nodes
/// when an edge is added. Everything else passes straight through.
#[derive(Debug)]
pub struct GraphService {
    repository: GraphRepository,
}

impl GraphService {
    pub fn new(repository: GraphRepository) -> Self {
        Self { repository }
    }

    #[inline]
    pub fn repository(&self) -> &GraphRepository {
        &self.repository
    }

    pub fn into_repository(self) -> GraphRepository {
        self.repository
    }

    pub fn create_graph(&mut self, alias: &str, is_directed: bool, is_weighted: bool) -> Result<()> {
        if self.repository.graph_exists(alias) {
            return Err(Error::GraphExists(alias.to_string()));
        }
        self.repository.create_graph(alias, is_directed, is_weighted);
        Ok(())
    }

    /// Add an edge, creating either endpoint if the graph does not have it
    /// yet. The weight requirement is checked before any node is created.
    pub fn create_edge(&mut self, alias: &str, source: &str, destination: &str, weight: Option<i64>) -> Result<Edge> {
        if !self.repository.graph_exists(alias) {
            return Err(Error::GraphNotFound(alias.to_string()));
        }
        if self.repository.is_weighted(alias) && weight.is_none() {
            return Err(Error::MissingWeight);
        }

        for name in [source, destination] {
            if !self.repository.node_exists(alias, name) {
                self.repository.add_node(alias, name)?;
            }
        }

        self.repository.create_edge(alias, source, destination, weight)
    }

    pub fn remove_edge(&mut self, alias: &str, source: &str, destination: &str, weight: Option<i64>) -> Result<Edge> {
        self.repository.remove_edge(alias, source, destination, weight)
    }

    pub fn add_node(&mut self, alias: &str, name: &str) -> Result<()> {
        self.repository.add_node(alias, name)
    }

    pub fn remove_node(&mut self, alias: &str, name: &str) -> Result<usize> {
        self.repository.remove_node(alias, name)
    }

    pub fn get_graph(&self, alias: &str) -> Result<&Graph> {
        self.repository.get_graph(alias)
    }

    pub fn list_graphs(&self) -> Vec<String> {
        self.repository.list_graphs()
    }

    pub fn describe_graph(&self, alias: &str) -> Result<GraphDescription> {
        self.repository.describe_graph(alias)
    }

    pub fn list_nodes(&self, alias: &str) -> Result<Vec<String>> {
        self.repository.list_nodes(alias)
    }

    pub fn list_edges(&self, alias: &str, node1: Option<&str>, node2: Option<&str>) -> Result<Vec<Edge>> {
        self.repository.list_edges(alias, node1, node2)
    }

    pub fn node_exists(&self, alias: &str, name: &str) -> bool {
        self.repository.node_exists(alias, name)
    }

    pub fn load_graph<P: AsRef<Path>>(&mut self, filename: P) -> Result<String> {
        self.repository.load_graph(filename)
    }

    pub fn save_graph<P: AsRef<Path>>(&self, alias: &str, filename: P) -> Result<()> {
        self.repository.save_graph(alias, filename)
    }

    pub fn save_all_graphs(&self) -> Result<usize> {
        self.repository.save_all_graphs()
    }

    /// Final flush before exit. An empty repository writes nothing.
    pub fn shutdown(self) -> Result<usize> {
        if self.repository.is_empty() {
            return Ok(0);
        }
        self.repository.save_all_graphs()
    }
}
