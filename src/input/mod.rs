//! Graph collection.
//!
//! Two collaborators produce a [`Graph`](crate::graph::Graph):
//! - **Prompter**: interactive questions over any `BufRead`/`Write` pair
//! - **Graph files**: JSON documents listing vertices and their neighbors
//!
//! Both apply [`GraphLimits`](crate::graph::GraphLimits) and mirror every
//! edge so the resulting graph is undirected.
//!
//! # Example
//!
//! ```ignore
//! use dijkstra_paths::graph::GraphLimits;
//! use dijkstra_paths::input::load_graph_file;
//!
//! let graph = load_graph_file("graph.json", &GraphLimits::from_env())?;
//! ```

pub mod error;
pub mod file;
pub mod prompt;

// Re-exports
pub use error::{InputError, InputResult};
pub use file::{load_graph_file, parse_graph, GraphFile, NeighborEntry, VertexEntry};
pub use prompt::GraphPrompter;
