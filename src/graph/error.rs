//! Graph construction and query errors.

use thiserror::Error;

/// Errors raised while building a graph or starting a shortest-path run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Graph has no vertices")]
    EmptyGraph,

    #[error("Vertex id {0} is not part of the graph")]
    UnknownVertex(usize),

    #[error("Vertex not found: {0}")]
    VertexNotFound(String),

    #[error("Duplicate vertex name: {0}")]
    DuplicateVertex(String),

    #[error("Vertex name must not be empty")]
    EmptyName,

    #[error("Vertex {0} cannot be its own neighbor")]
    SelfLoop(String),

    #[error("Edge {from} -> {to} already exists")]
    DuplicateEdge { from: String, to: String },

    #[error("Edge {from} -> {to} must have a positive weight")]
    ZeroWeight { from: String, to: String },
}
