//! # GraphLite Storage
//!
//! Persistence and ownership layer for GraphLite:
//!
//! - [`codec`] - graph and collection JSON encoding with field validation
//! - [`file`] - JSON file reading with an empty-store fallback, atomic writes
//! - [`GraphRepository`] - the alias to graph mapping and its store file
//! - [`GraphService`] - duplicate checks and endpoint auto-creation on top

pub mod codec;
pub mod file;
pub mod repository;
pub mod service;

pub use repository::GraphRepository;
pub use service::GraphService;
