//! Text and JSON rendering of graphs and shortest-path results.

use std::fmt;

use serde::Serialize;

use crate::graph::{Graph, ShortestPaths};

/// One reachable vertex with its path from the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathLine {
    /// Target vertex name.
    pub target: String,
    /// Vertex names from source to target.
    pub vertices: Vec<String>,
    /// Total path weight.
    pub distance: u64,
}

impl fmt::Display for PathLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : {}", self.vertices.join(" -> "), self.distance)
    }
}

/// Full report for one run, as written by `--json`.
#[derive(Debug, Clone, Serialize)]
pub struct PathReport {
    pub source: String,
    pub paths: Vec<PathLine>,
    pub unreachable: Vec<String>,
}

/// Paths to every reachable vertex, in graph order.
///
/// Unreachable vertices have no line.
pub fn path_report(graph: &Graph, paths: &ShortestPaths) -> Vec<PathLine> {
    graph
        .vertices()
        .filter_map(|(id, vertex)| {
            paths.path_to(id).map(|path| PathLine {
                target: vertex.name().to_string(),
                vertices: path.names(graph).into_iter().map(String::from).collect(),
                distance: path.distance,
            })
        })
        .collect()
}

/// Builds the serializable report for one run.
pub fn build_report(graph: &Graph, paths: &ShortestPaths) -> PathReport {
    let unreachable = graph
        .vertices()
        .filter(|&(id, _)| !paths.is_reachable(id))
        .map(|(_, v)| v.name().to_string())
        .collect();

    PathReport {
        source: graph.name(paths.source()).to_string(),
        paths: path_report(graph, paths),
        unreachable,
    }
}

/// Renders the list of shortest paths as printed by the CLI.
pub fn render_paths(graph: &Graph, paths: &ShortestPaths) -> String {
    let mut out = format!(
        "Shortest paths from vertex {} to all other vertices:\n\n",
        graph.name(paths.source())
    );
    for line in path_report(graph, paths) {
        out.push_str(&line.to_string());
        out.push('\n');
    }
    out
}

/// Renders the adjacency matrix.
///
/// The first row and column hold vertex names, the corner holds `\` and
/// missing edges are shown as `0`.
pub fn adjacency_matrix(graph: &Graph) -> String {
    let mut out = String::from(" \\ ");
    for (_, vertex) in graph.vertices() {
        out.push_str(vertex.name());
        out.push(' ');
    }
    out.push('\n');

    for (row, vertex) in graph.vertices() {
        out.push(' ');
        out.push_str(vertex.name());
        out.push(' ');
        for (column, _) in graph.vertices() {
            let cell = graph.weight(row, column).unwrap_or(0);
            out.push_str(&cell.to_string());
            out.push(' ');
        }
        out.push('\n');
    }
    out
}
