//! Single Source Shortest Path (SSSP) computation with Dijkstra's algorithm.
//!
//! The engine never mutates the graph. Every run produces a fresh
//! [`ShortestPaths`] record holding, per vertex, the best known distance
//! from the source and the predecessor through which it was reached.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, trace};

use super::error::GraphError;
use super::model::{Graph, VertexId};

/// Distance assigned to vertices that cannot be reached from the source.
pub const INFINITE_DISTANCE: u64 = u64::MAX;

/// Entry in the priority queue for Dijkstra's algorithm.
///
/// The same vertex may be queued several times; entries for vertices that
/// are already settled are skipped when popped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DijkstraEntry {
    distance: u64,
    sequence: u64,
    vertex: VertexId,
}

impl Ord for DijkstraEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap; equal distances pop in insertion order
        other
            .distance
            .cmp(&self.distance)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for DijkstraEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Distance and predecessor of a single vertex after a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VertexState {
    /// Best distance from the source, or [`INFINITE_DISTANCE`].
    pub distance: u64,
    /// Vertex through which `distance` was first reached.
    pub predecessor: Option<VertexId>,
}

impl VertexState {
    fn unreached() -> Self {
        Self {
            distance: INFINITE_DISTANCE,
            predecessor: None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.distance != INFINITE_DISTANCE
    }
}

/// A path through the graph, from the source to a target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphPath {
    /// Vertices from source to target, both inclusive.
    pub vertices: Vec<VertexId>,
    /// Sum of edge weights along the path.
    pub distance: u64,
}

impl GraphPath {
    /// Number of edges on the path.
    pub fn hop_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    pub fn source(&self) -> Option<VertexId> {
        self.vertices.first().copied()
    }

    pub fn target(&self) -> Option<VertexId> {
        self.vertices.last().copied()
    }

    /// Vertex names along the path.
    pub fn names<'g>(&self, graph: &'g Graph) -> Vec<&'g str> {
        self.vertices.iter().map(|&id| graph.name(id)).collect()
    }
}

/// Result of a shortest-path run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    source: VertexId,
    states: Vec<VertexState>,
    /// Number of vertices whose distance was finalized.
    pub settled_count: usize,
}

impl ShortestPaths {
    /// Source vertex of the run.
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Per-vertex state, if `id` is part of the graph.
    pub fn state(&self, id: VertexId) -> Option<&VertexState> {
        self.states.get(id.0)
    }

    /// Per-vertex states indexed by vertex id.
    pub fn states(&self) -> &[VertexState] {
        &self.states
    }

    /// Shortest distance to `id`, `None` when unreachable.
    pub fn distance(&self, id: VertexId) -> Option<u64> {
        self.state(id)
            .filter(|s| s.is_reachable())
            .map(|s| s.distance)
    }

    pub fn predecessor(&self, id: VertexId) -> Option<VertexId> {
        self.state(id).and_then(|s| s.predecessor)
    }

    pub fn is_reachable(&self, id: VertexId) -> bool {
        self.distance(id).is_some()
    }

    /// Number of vertices reachable from the source, the source included.
    pub fn reachable_count(&self) -> usize {
        self.states.iter().filter(|s| s.is_reachable()).count()
    }

    /// Reconstructs the path from the source to `target`.
    ///
    /// Returns `None` for unreachable or unknown vertices. The source's own
    /// path is the single-vertex path with distance 0.
    pub fn path_to(&self, target: VertexId) -> Option<GraphPath> {
        let distance = self.distance(target)?;

        let mut vertices = vec![target];
        let mut current = target;

        // A predecessor chain never revisits a vertex, so it is at most
        // `states.len()` long.
        while let Some(pred) = self.predecessor(current) {
            if vertices.len() > self.states.len() {
                return None;
            }
            vertices.push(pred);
            current = pred;
        }

        if current != self.source {
            return None;
        }

        vertices.reverse();
        Some(GraphPath { vertices, distance })
    }

    /// Reachable vertices ordered by distance, nearest first.
    pub fn k_nearest(&self, k: usize) -> Vec<(VertexId, u64)> {
        let mut sorted: Vec<(VertexId, u64)> = self
            .states
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_reachable())
            .map(|(i, s)| (VertexId(i), s.distance))
            .collect();

        sorted.sort_by_key(|&(id, dist)| (dist, id));
        sorted.into_iter().take(k).collect()
    }
}

/// Computes shortest paths from `source` to every vertex of `graph`.
///
/// Fails fast with [`GraphError::EmptyGraph`] on an empty graph and with
/// [`GraphError::UnknownVertex`] when `source` is not part of it.
pub fn compute_shortest_paths(
    graph: &Graph,
    source: VertexId,
) -> Result<ShortestPaths, GraphError> {
    if graph.is_empty() {
        return Err(GraphError::EmptyGraph);
    }
    if !graph.contains(source) {
        return Err(GraphError::UnknownVertex(source.0));
    }

    let start = Instant::now();
    debug!(
        "Computing shortest paths from '{}' over {} vertices",
        graph.name(source),
        graph.len()
    );

    let mut states = vec![VertexState::unreached(); graph.len()];
    let mut settled = vec![false; graph.len()];
    let mut settled_count = 0;
    let mut heap = BinaryHeap::new();
    let mut sequence = 0u64;

    states[source.0].distance = 0;
    heap.push(DijkstraEntry {
        distance: 0,
        sequence,
        vertex: source,
    });

    while let Some(DijkstraEntry { vertex: u, .. }) = heap.pop() {
        // Stale entry for a vertex already finalized
        if settled[u.0] {
            continue;
        }
        settled[u.0] = true;
        settled_count += 1;

        let base = states[u.0].distance;
        trace!("Settled '{}' at distance {}", graph.name(u), base);

        for edge in graph.neighbors(u) {
            let v = edge.to;
            if settled[v.0] {
                continue;
            }

            let new_distance = base.saturating_add(u64::from(edge.weight));
            if new_distance < states[v.0].distance {
                states[v.0] = VertexState {
                    distance: new_distance,
                    predecessor: Some(u),
                };
                sequence += 1;
                heap.push(DijkstraEntry {
                    distance: new_distance,
                    sequence,
                    vertex: v,
                });
            }
        }
    }

    let elapsed: Duration = start.elapsed();
    debug!(
        "Settled {} of {} vertices in {:?}",
        settled_count,
        graph.len(),
        elapsed
    );

    Ok(ShortestPaths {
        source,
        states,
        settled_count,
    })
}

/// Computes shortest paths from the graph's designated source.
pub fn compute_from_first(graph: &Graph) -> Result<ShortestPaths, GraphError> {
    let source = graph.source().ok_or(GraphError::EmptyGraph)?;
    compute_shortest_paths(graph, source)
}
