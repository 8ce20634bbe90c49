//! Weighted undirected graphs and single-source shortest paths.
//!
//! This module provides:
//! - **Model**: an arena of named vertices with ordered, weighted adjacency
//! - **SSSP**: Dijkstra's algorithm producing per-vertex distances and predecessors
//!
//! # Example
//!
//! ```
//! use dijkstra_paths::graph::{compute_from_first, GraphBuilder};
//!
//! let mut builder = GraphBuilder::new();
//! let a = builder.add_vertex("A").unwrap();
//! let b = builder.add_vertex("B").unwrap();
//! let c = builder.add_vertex("C").unwrap();
//! builder.connect(a, b, 1).unwrap();
//! builder.connect(b, c, 2).unwrap();
//! builder.connect(a, c, 5).unwrap();
//! let graph = builder.build();
//!
//! let paths = compute_from_first(&graph).unwrap();
//! assert_eq!(paths.distance(c), Some(3));
//! assert_eq!(paths.path_to(c).unwrap().names(&graph), vec!["A", "B", "C"]);
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod sssp;

// Re-exports
pub use config::{ConfigError, GraphLimits};
pub use error::GraphError;
pub use model::{Edge, Graph, GraphBuilder, Vertex, VertexId};
pub use sssp::{
    compute_from_first, compute_shortest_paths, GraphPath, ShortestPaths, VertexState,
    INFINITE_DISTANCE,
};
