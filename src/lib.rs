//! dijkstra-paths: single-source shortest paths over weighted undirected graphs.
//!
//! A graph is collected interactively or loaded from a JSON file, then
//! Dijkstra's algorithm computes the distance and predecessor of every
//! vertex from the source, and the report module prints the paths.

pub mod graph;
pub mod input;
pub mod report;

// Re-export main types
pub use graph::{
    compute_from_first, compute_shortest_paths, Graph, GraphBuilder, GraphError, GraphLimits,
    GraphPath, ShortestPaths, VertexId, INFINITE_DISTANCE,
};
pub use input::{load_graph_file, GraphPrompter, InputError};
pub use report::{adjacency_matrix, build_report, path_report, render_paths, PathLine, PathReport};
