//! Errors raised while collecting a graph.

use thiserror::Error;

use crate::graph::{ConfigError, GraphError};

/// Input collection errors.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input ended before the graph was complete")]
    UnexpectedEof,

    #[error("Invalid graph file: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("Invalid limits: {0}")]
    Config(#[from] ConfigError),

    #[error("Graph has {count} vertices, expected {min}..={max}")]
    VertexCount { count: usize, min: usize, max: usize },

    #[error("Vertex {vertex} lists {count} neighbors, expected 1..={max}")]
    NeighborCount {
        vertex: String,
        count: usize,
        max: usize,
    },

    #[error("Vertex {vertex} lists neighbor {neighbor} more than once")]
    DuplicateNeighbor { vertex: String, neighbor: String },

    #[error("Weight {weight} for {from} -> {to} is outside {min}..={max}")]
    WeightOutOfRange {
        from: String,
        to: String,
        weight: u32,
        min: u32,
        max: u32,
    },

    #[error("Edge {from} -> {to} already has weight {existing}, got {requested}")]
    ConflictingWeight {
        from: String,
        to: String,
        existing: u32,
        requested: u32,
    },
}

/// Result type for input collection.
pub type InputResult<T> = Result<T, InputError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_types() {
        let err = InputError::VertexCount {
            count: 2,
            min: 3,
            max: 50,
        };
        assert_eq!(err.to_string(), "Graph has 2 vertices, expected 3..=50");

        let err: InputError = GraphError::VertexNotFound("Q".to_string()).into();
        assert!(err.to_string().contains("Vertex not found: Q"));
    }
}
