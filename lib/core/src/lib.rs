//! # GraphLite Core
//!
//! Core data structures for the GraphLite named-graph store.
//!
//! - [`Node`] - A named vertex
//! - [`Edge`] - A weighted connection between two nodes
//! - [`Graph`] - Nodes, edges and a per-node adjacency index, with
//!   directed/undirected and weighted/unweighted semantics
//! - [`GraphDocument`] - The structural form a graph is persisted as
//!
//! ## Example
//!
//! ```rust
//! use graphlite_core::Graph;
//!
//! let mut graph = Graph::new("social", false, true);
//! graph.add_node("alice").unwrap();
//! graph.add_node("bob").unwrap();
//! graph.add_edge("alice", "bob", Some(5)).unwrap();
//!
//! // Undirected: the edge can be walked from either end.
//! assert_eq!(graph.list_edges_for_node("bob").unwrap().len(), 1);
//! ```

pub mod document;
pub mod edge;
pub mod error;
pub mod graph;
pub mod node;

pub use document::{EdgeDocument, Endpoint, GraphDocument};
pub use edge::{Edge, DEFAULT_WEIGHT};
pub use error::{Error, ErrorKind, Result};
pub use graph::{Graph, GraphDescription};
pub use node::Node;
