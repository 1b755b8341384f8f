//! # GraphLite
//!
//! A lightweight, in-process store of named graphs with JSON persistence.
//!
//! Each graph is directed or undirected, weighted or unweighted, and keeps a
//! per-node adjacency index alongside its edge set so a node's edges can be
//! listed without scanning the whole graph.
//!
//! ## Quick Start
//!
//! ### As a Shell
//!
//! ```bash
//! graphlite --store ./graphs.json
//! GraphLite> CREATE GRAPH social DIRECTED WEIGHTED
//! GraphLite> ADD EDGE social alice bob 5
//! GraphLite> LIST EDGES social alice
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use graphlite::prelude::*;
//!
//! let mut service = GraphService::new(GraphRepository::open("graphs.json"));
//! service.create_graph("social", false, true).unwrap();
//!
//! // Missing endpoints are created on the fly.
//! service.create_edge("social", "alice", "bob", Some(5)).unwrap();
//! assert_eq!(service.list_edges("social", Some("bob"), None).unwrap().len(), 1);
//!
//! service.save_all_graphs().unwrap();
//! ```
//!
//! ## Crate Structure
//!
//! - `graphlite-core` - Node, Edge and Graph with their invariants
//! - `graphlite-storage` - JSON codec, store file I/O, repository and service

pub mod command;
pub mod session;
pub mod shell;

// Re-export core types
pub use graphlite_core::{
    Edge, Error, ErrorKind, Graph, GraphDescription, GraphDocument, Node, Result,
};

// Re-export storage
pub use graphlite_storage::{codec, file, GraphRepository, GraphService};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Edge, Error, ErrorKind, Graph, GraphDescription, GraphRepository, GraphService, Node,
        Result,
    };
}
