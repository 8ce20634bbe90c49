//! Undirected weighted graph stored as an arena of vertices.
//!
//! Vertices are addressed by [`VertexId`], a stable index into the arena.
//! Adjacency is kept per vertex as an ordered list of `(neighbor, weight)`
//! pairs, in the order the edges were added.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::error::GraphError;

/// Stable index of a vertex inside a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId(pub usize);

impl VertexId {
    /// Position of the vertex in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A weighted edge to a neighboring vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub to: VertexId,
    pub weight: u32,
}

/// A named vertex with its outgoing edges.
#[derive(Debug, Clone)]
pub struct Vertex {
    name: String,
    neighbors: Vec<Edge>,
}

impl Vertex {
    fn new(name: String) -> Self {
        Self {
            name,
            neighbors: Vec::new(),
        }
    }

    /// Unique vertex name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Outgoing edges in insertion order.
    pub fn neighbors(&self) -> &[Edge] {
        &self.neighbors
    }

    /// Weight of the edge to `neighbor`, if any.
    pub fn weight_to(&self, neighbor: VertexId) -> Option<u32> {
        self.neighbors
            .iter()
            .find(|e| e.to == neighbor)
            .map(|e| e.weight)
    }
}

/// Immutable graph produced by [`GraphBuilder::build`].
///
/// The first vertex is the designated source by convention.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    index: HashMap<String, VertexId>,
}

impl Graph {
    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Whether `id` addresses a vertex of this graph.
    pub fn contains(&self, id: VertexId) -> bool {
        id.0 < self.vertices.len()
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.0)
    }

    /// Name of a vertex. Panics on an id from another graph.
    pub fn name(&self, id: VertexId) -> &str {
        self.vertices[id.0].name()
    }

    /// Looks up a vertex by name.
    pub fn vertex_id(&self, name: &str) -> Option<VertexId> {
        self.index.get(name).copied()
    }

    /// Outgoing edges of a vertex. Empty for unknown ids.
    pub fn neighbors(&self, id: VertexId) -> &[Edge] {
        self.vertices
            .get(id.0)
            .map(|v| v.neighbors())
            .unwrap_or(&[])
    }

    /// Weight of the edge `from -> to`, if present.
    pub fn weight(&self, from: VertexId, to: VertexId) -> Option<u32> {
        self.vertex(from).and_then(|v| v.weight_to(to))
    }

    /// Vertices with their ids, in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex)> {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (VertexId(i), v))
    }

    /// The designated source: the first vertex added.
    pub fn source(&self) -> Option<VertexId> {
        if self.vertices.is_empty() {
            None
        } else {
            Some(VertexId(0))
        }
    }

    /// Number of edges, counting a symmetric pair once.
    pub fn edge_count(&self) -> usize {
        let mut count = 0;
        for (id, vertex) in self.vertices() {
            for edge in vertex.neighbors() {
                let mirrored = self.weight(edge.to, id).is_some();
                if !mirrored || id < edge.to {
                    count += 1;
                }
            }
        }
        count
    }
}

/// Builder for [`Graph`] values.
///
/// Enforces unique non-empty names, no self-loops, no duplicate ordered
/// edges and positive weights.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    graph: Graph,
}

impl GraphBuilder {
    /// Creates an empty graph builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex and returns its id.
    pub fn add_vertex(&mut self, name: impl Into<String>) -> Result<VertexId, GraphError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(GraphError::EmptyName);
        }
        if self.graph.index.contains_key(&name) {
            return Err(GraphError::DuplicateVertex(name));
        }

        let id = VertexId(self.graph.vertices.len());
        self.graph.index.insert(name.clone(), id);
        self.graph.vertices.push(Vertex::new(name));
        Ok(id)
    }

    /// Adds a directed edge `from -> to`.
    pub fn add_edge(
        &mut self,
        from: VertexId,
        to: VertexId,
        weight: u32,
    ) -> Result<(), GraphError> {
        self.check_edge(from, to, weight)?;
        self.graph.vertices[from.0]
            .neighbors
            .push(Edge { to, weight });
        Ok(())
    }

    /// Connects `a` and `b` in both directions and returns the weight used.
    ///
    /// If `b -> a` already exists its weight is reused for `a -> b` and
    /// `weight` is ignored. Otherwise both directions get `weight`.
    pub fn connect(&mut self, a: VertexId, b: VertexId, weight: u32) -> Result<u32, GraphError> {
        let existing = self.graph.weight(b, a);
        let weight = existing.unwrap_or(weight);
        self.add_edge(a, b, weight)?;
        if existing.is_none() {
            self.add_edge(b, a, weight)?;
        }
        Ok(weight)
    }

    /// Looks up a vertex already added to the builder.
    pub fn vertex_id(&self, name: &str) -> Option<VertexId> {
        self.graph.vertex_id(name)
    }

    /// Weight of an edge already added to the builder.
    pub fn weight(&self, from: VertexId, to: VertexId) -> Option<u32> {
        self.graph.weight(from, to)
    }

    pub fn name(&self, id: VertexId) -> &str {
        self.graph.name(id)
    }

    pub fn len(&self) -> usize {
        self.graph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// Freezes the graph.
    pub fn build(self) -> Graph {
        self.graph
    }

    fn check_edge(&self, from: VertexId, to: VertexId, weight: u32) -> Result<(), GraphError> {
        for id in [from, to] {
            if !self.graph.contains(id) {
                return Err(GraphError::UnknownVertex(id.0));
            }
        }
        if from == to {
            return Err(GraphError::SelfLoop(self.graph.name(from).to_string()));
        }
        if self.graph.weight(from, to).is_some() {
            return Err(GraphError::DuplicateEdge {
                from: self.graph.name(from).to_string(),
                to: self.graph.name(to).to_string(),
            });
        }
        if weight == 0 {
            return Err(GraphError::ZeroWeight {
                from: self.graph.name(from).to_string(),
                to: self.graph.name(to).to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> (Graph, [VertexId; 3]) {
        let mut builder = GraphBuilder::new();
        let a = builder.add_vertex("A").unwrap();
        let b = builder.add_vertex("B").unwrap();
        let c = builder.add_vertex("C").unwrap();
        builder.connect(a, b, 1).unwrap();
        builder.connect(b, c, 2).unwrap();
        builder.connect(a, c, 5).unwrap();
        (builder.build(), [a, b, c])
    }

    #[test]
    fn test_graph_builder() {
        let (graph, [a, b, c]) = triangle();

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.source(), Some(a));
        assert_eq!(graph.vertex_id("C"), Some(c));
        assert_eq!(graph.weight(a, b), Some(1));
        assert_eq!(graph.weight(b, a), Some(1));
        assert_eq!(graph.weight(c, a), Some(5));
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn test_neighbors_keep_insertion_order() {
        let (graph, [a, b, c]) = triangle();

        let order: Vec<VertexId> = graph.neighbors(a).iter().map(|e| e.to).collect();
        assert_eq!(order, vec![b, c]);

        let order: Vec<VertexId> = graph.neighbors(b).iter().map(|e| e.to).collect();
        assert_eq!(order, vec![a, c]);
    }

    #[test]
    fn test_connect_reuses_existing_back_edge() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_vertex("A").unwrap();
        let b = builder.add_vertex("B").unwrap();

        builder.add_edge(b, a, 7).unwrap();
        let used = builder.connect(a, b, 42).unwrap();

        assert_eq!(used, 7);
        let graph = builder.build();
        assert_eq!(graph.weight(a, b), Some(7));
        assert_eq!(graph.neighbors(b).len(), 1);
    }

    #[test]
    fn test_rejects_duplicate_vertex() {
        let mut builder = GraphBuilder::new();
        builder.add_vertex("A").unwrap();

        assert_eq!(
            builder.add_vertex("A"),
            Err(GraphError::DuplicateVertex("A".to_string()))
        );
        assert_eq!(builder.add_vertex("  "), Err(GraphError::EmptyName));
    }

    #[test]
    fn test_rejects_invalid_edges() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_vertex("A").unwrap();
        let b = builder.add_vertex("B").unwrap();

        assert_eq!(
            builder.add_edge(a, a, 1),
            Err(GraphError::SelfLoop("A".to_string()))
        );
        assert!(matches!(
            builder.add_edge(a, b, 0),
            Err(GraphError::ZeroWeight { .. })
        ));
        assert_eq!(
            builder.add_edge(a, VertexId(9), 1),
            Err(GraphError::UnknownVertex(9))
        );

        builder.connect(a, b, 3).unwrap();
        assert!(matches!(
            builder.connect(a, b, 3),
            Err(GraphError::DuplicateEdge { .. })
        ));
    }

    #[test]
    fn test_directed_edge_counts_once() {
        let mut builder = GraphBuilder::new();
        let a = builder.add_vertex("A").unwrap();
        let b = builder.add_vertex("B").unwrap();
        builder.add_edge(b, a, 2).unwrap();

        let graph = builder.build();
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.neighbors(a).is_empty());
    }

    #[test]
    fn test_unknown_vertex_queries() {
        let (graph, _) = triangle();

        assert!(graph.vertex(VertexId(10)).is_none());
        assert!(graph.neighbors(VertexId(10)).is_empty());
        assert_eq!(graph.vertex_id("Z"), None);
        assert!(Graph::default().source().is_none());
    }
}
