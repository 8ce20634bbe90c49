//! JSON graph files.
//!
//! ```json
//! {
//!   "vertices": [
//!     { "name": "A", "neighbors": [ { "name": "B", "weight": 1 } ] },
//!     { "name": "B", "neighbors": [ { "name": "A", "weight": 1 } ] }
//!   ]
//! }
//! ```
//!
//! Every edge is mirrored. A neighbor entry that repeats an edge already
//! created from the other side must carry the same weight.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::graph::{Graph, GraphBuilder, GraphError, GraphLimits};

use super::error::{InputError, InputResult};

/// A neighbor reference inside a graph file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighborEntry {
    pub name: String,
    pub weight: u32,
}

/// A vertex with the neighbors entered for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexEntry {
    pub name: String,
    #[serde(default)]
    pub neighbors: Vec<NeighborEntry>,
}

/// Serialized graph description. The first vertex is the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphFile {
    pub vertices: Vec<VertexEntry>,
}

impl GraphFile {
    /// Parses a graph description from JSON text.
    pub fn from_json(text: &str) -> InputResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Builds the graph, applying `limits`.
    pub fn into_graph(self, limits: &GraphLimits) -> InputResult<Graph> {
        limits.validate()?;

        let count = self.vertices.len();
        if !limits.vertex_count_in_range(count) {
            return Err(InputError::VertexCount {
                count,
                min: limits.min_vertices,
                max: limits.max_vertices,
            });
        }

        // Names are trimmed the same way console answers are.
        let mut builder = GraphBuilder::new();
        for entry in &self.vertices {
            builder.add_vertex(entry.name.trim())?;
        }

        for entry in &self.vertices {
            let name = entry.name.trim();
            let vertex = builder
                .vertex_id(name)
                .ok_or_else(|| GraphError::VertexNotFound(name.to_string()))?;

            let max_neighbors = count - 1;
            if entry.neighbors.is_empty() || entry.neighbors.len() > max_neighbors {
                return Err(InputError::NeighborCount {
                    vertex: name.to_string(),
                    count: entry.neighbors.len(),
                    max: max_neighbors,
                });
            }

            let mut listed = HashSet::new();
            for neighbor in &entry.neighbors {
                let neighbor_name = neighbor.name.trim();
                let target = builder
                    .vertex_id(neighbor_name)
                    .ok_or_else(|| GraphError::VertexNotFound(neighbor_name.to_string()))?;

                if target == vertex {
                    return Err(GraphError::SelfLoop(name.to_string()).into());
                }
                if !listed.insert(target) {
                    return Err(InputError::DuplicateNeighbor {
                        vertex: name.to_string(),
                        neighbor: neighbor_name.to_string(),
                    });
                }

                if let Some(existing) = builder.weight(vertex, target) {
                    if existing != neighbor.weight {
                        return Err(InputError::ConflictingWeight {
                            from: name.to_string(),
                            to: neighbor_name.to_string(),
                            existing,
                            requested: neighbor.weight,
                        });
                    }
                    continue;
                }

                if !limits.weight_in_range(neighbor.weight) {
                    return Err(InputError::WeightOutOfRange {
                        from: name.to_string(),
                        to: neighbor_name.to_string(),
                        weight: neighbor.weight,
                        min: limits.min_weight,
                        max: limits.max_weight,
                    });
                }

                builder.connect(vertex, target, neighbor.weight)?;
                debug!(
                    "Connected {} <-> {} ({})",
                    name, neighbor_name, neighbor.weight
                );
            }
        }

        Ok(builder.build())
    }
}

/// Parses and builds a graph from JSON text.
pub fn parse_graph(text: &str, limits: &GraphLimits) -> InputResult<Graph> {
    GraphFile::from_json(text)?.into_graph(limits)
}

/// Reads and builds a graph from a JSON file.
pub fn load_graph_file(path: impl AsRef<Path>, limits: &GraphLimits) -> InputResult<Graph> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let graph = parse_graph(&text, limits)?;

    info!(
        "Loaded graph with {} vertices and {} edges from {}",
        graph.len(),
        graph.edge_count(),
        path.display()
    );
    Ok(graph)
}
