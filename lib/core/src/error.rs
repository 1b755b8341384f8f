use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Graph {0} already exists")]
    GraphExists(String),

    #[error("Graph {0} does not exist")]
    GraphNotFound(String),

    #[error("Node {0} already exists")]
    NodeExists(String),

    #[error("Node {0} does not exist")]
    NodeNotFound(String),

    #[error("Edge from {from} to {to} already exists")]
    EdgeExists { from: String, to: String },

    #[error("Edge from {from} to {to} does not exist")]
    EdgeNotFound { from: String, to: String },

    #[error("Weight is required for weighted graph")]
    MissingWeight,

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Coarse classification of an [`Error`], for callers that only care about
/// which bucket a failure falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    AlreadyExists,
    NotFound,
    MissingWeight,
    MalformedInput,
    Storage,
}

impl Error {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::GraphExists(_) | Error::NodeExists(_) | Error::EdgeExists { .. } => {
                ErrorKind::AlreadyExists
            }
            Error::GraphNotFound(_) | Error::NodeNotFound(_) | Error::EdgeNotFound { .. } => {
                ErrorKind::NotFound
            }
            Error::MissingWeight => ErrorKind::MissingWeight,
            Error::MalformedInput(_) => ErrorKind::MalformedInput,
            Error::Io(_) | Error::Serialization(_) => ErrorKind::Storage,
        }
    }

    /// Prefix a malformed-input message with where it was found.
    #[must_use]
    pub fn in_context(self, context: &str) -> Self {
        match self {
            Error::MalformedInput(msg) => Error::MalformedInput(format!("{context}: {msg}")),
            other => other,
        }
    }
}
