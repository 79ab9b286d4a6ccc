//! Recoverable error types for the fasrank core.
//!
//! Hot-path graph operations treat bad indices as programming errors and
//! panic. The types here cover the boundaries where data arrives from the
//! outside world: edge-list parsing, bounds-checked insertion, and solver
//! configuration.

use std::path::PathBuf;

/// Errors raised by bounds-checked graph mutation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// An edge endpoint is not a vertex of the graph.
    #[error("vertex {vertex} out of range for graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: usize, vertex_count: usize },

    /// The requested vertex count is above [`AdjacencyGraph::MAX_VERTICES`].
    ///
    /// [`AdjacencyGraph::MAX_VERTICES`]: crate::graph::AdjacencyGraph::MAX_VERTICES
    #[error("vertex count {count} exceeds the limit of {limit}")]
    TooManyVertices { count: usize, limit: usize },
}

/// Errors raised while parsing an edge-list file.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The input had no vertex-count header.
    #[error("missing vertex count header")]
    MissingHeader,

    /// The header was present but not a non-negative integer.
    #[error("invalid vertex count {0:?}")]
    InvalidHeader(String),

    /// A body line did not match `from to` / `from,to`.
    #[error("line {line}: expected `from to` or `from,to`, got {content:?}")]
    Malformed { line: usize, content: String },

    /// The header asked for too many vertices, or a body line referenced a
    /// vertex outside `[0, N)`.
    #[error("line {line}: {source}")]
    Graph {
        line: usize,
        #[source]
        source: GraphError,
    },

    /// The file could not be read.
    #[error("failed to read edge list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised when a solver configuration is out of its valid domain.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("damping factor must lie strictly between 0 and 1, got {0}")]
    Damping(f64),

    #[error("tolerance must be finite and non-negative, got {0}")]
    Tolerance(f64),

    #[error("max_iter must be at least 1")]
    MaxIter,
}
