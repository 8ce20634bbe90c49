use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use dotenv::dotenv;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dijkstra_paths::graph::{compute_shortest_paths, Graph, GraphLimits, VertexId};
use dijkstra_paths::input::{load_graph_file, GraphPrompter};
use dijkstra_paths::report::{adjacency_matrix, build_report, render_paths};

/// Shortest paths from one vertex to every other vertex of a weighted graph.
#[derive(Parser, Debug)]
#[command(name = "dijkstra-paths", version, about)]
struct Args {
    /// JSON graph file; the graph is entered interactively when omitted
    #[arg(short, long)]
    graph: Option<PathBuf>,

    /// Source vertex name (defaults to the first vertex)
    #[arg(short, long)]
    source: Option<String>,

    /// Print the adjacency matrix before the paths
    #[arg(short, long)]
    matrix: bool,

    /// Print the paths as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dijkstra_paths=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    let limits = GraphLimits::from_env();
    limits.validate().context("Invalid graph limits")?;

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    run(&args, limits, stdin.lock(), &mut stdout)
}

/// Loads or collects the graph, computes the paths and writes the output.
fn run<R: BufRead, W: Write>(
    args: &Args,
    limits: GraphLimits,
    input: R,
    out: &mut W,
) -> Result<()> {
    let graph = match &args.graph {
        Some(path) => load_graph_file(path, &limits)
            .with_context(|| format!("Failed to load graph from {}", path.display()))?,
        None => GraphPrompter::new(input, &mut *out, limits)
            .collect_graph()
            .context("Failed to collect the graph")?,
    };

    let source = resolve_source(&graph, args.source.as_deref())?;
    info!(
        "Graph ready: {} vertices, {} edges, source '{}'",
        graph.len(),
        graph.edge_count(),
        graph.name(source)
    );

    let paths = compute_shortest_paths(&graph, source)?;
    info!(
        "{} of {} vertices reachable from '{}'",
        paths.reachable_count(),
        graph.len(),
        graph.name(source)
    );
    let unreachable = graph.len() - paths.reachable_count();
    if unreachable > 0 {
        warn!(
            "{} vertices are unreachable from '{}'",
            unreachable,
            graph.name(source)
        );
    }

    if args.matrix {
        writeln!(out, "Adjacency matrix\n")?;
        writeln!(out, "{}", adjacency_matrix(&graph))?;
    }

    if args.json {
        let report = build_report(&graph, &paths);
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        write!(out, "{}", render_paths(&graph, &paths))?;
    }

    Ok(())
}

/// Picks the named source vertex, or the first vertex when none is named.
fn resolve_source(graph: &Graph, name: Option<&str>) -> Result<VertexId> {
    match name {
        Some(name) => graph
            .vertex_id(name.trim())
            .with_context(|| format!("Source vertex '{}' not found", name)),
        None => graph.source().context("Graph has no vertices"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const CITIES: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/graphs/cities.json");

    fn run_with(argv: &[&str], input: &str) -> Result<String> {
        let args = Args::try_parse_from(argv.iter().copied())?;
        let mut out = Vec::new();
        run(
            &args,
            GraphLimits::default(),
            Cursor::new(input.as_bytes().to_vec()),
            &mut out,
        )?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from(["dijkstra-paths", "-g", "g.json", "-s", "B", "--json"])
            .unwrap();
        assert_eq!(args.graph, Some(PathBuf::from("g.json")));
        assert_eq!(args.source.as_deref(), Some("B"));
        assert!(args.json);
        assert!(!args.matrix);
    }

    #[test]
    fn test_source_option_selects_vertex() {
        let text = run_with(&["dijkstra-paths", "--graph", CITIES, "--source", "Krakow"], "")
            .unwrap();

        assert!(text.starts_with("Shortest paths from vertex Krakow"));
        assert!(text.contains("Krakow -> Wroclaw -> Poznan : 455\n"));
        assert!(text.contains("Krakow -> Warsaw -> Gdansk : 635\n"));
    }

    #[test]
    fn test_unknown_source_is_an_error() {
        let err = run_with(&["dijkstra-paths", "--graph", CITIES, "--source", "Berlin"], "")
            .unwrap_err();
        assert!(err.to_string().contains("Source vertex 'Berlin' not found"));
    }

    #[test]
    fn test_json_output() {
        let text = run_with(
            &["dijkstra-paths", "--graph", CITIES, "-s", "Lodz", "--json"],
            "",
        )
        .unwrap();
        let report: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(report["source"], "Lodz");
        assert_eq!(report["unreachable"], serde_json::json!([]));
        let paths = report["paths"].as_array().unwrap();
        assert_eq!(paths.len(), 6);

        let poznan = paths.iter().find(|p| p["target"] == "Poznan").unwrap();
        assert_eq!(poznan["distance"], 405);
        assert_eq!(
            poznan["vertices"],
            serde_json::json!(["Lodz", "Wroclaw", "Poznan"])
        );
    }

    #[test]
    fn test_interactive_graph_with_matrix() {
        let script = "3\nA\nB\nC\n1\nB\n4\n1\nA\n1\nA\n7\n";
        let text = run_with(&["dijkstra-paths", "--matrix"], script).unwrap();

        assert!(text.contains("Enter the name of the source vertex"));
        assert!(text.contains("Adjacency matrix"));
        assert!(text.contains("A -> B : 4\n"));
        assert!(text.contains("A -> C : 7\n"));
    }

    #[test]
    fn test_unreachable_vertices_reported() {
        let script = "4\nA\nB\nC\nD\n1\nB\n2\n1\nA\n1\nD\n3\n1\nC\n";
        let text = run_with(&["dijkstra-paths", "--json"], script).unwrap();
        let json = &text[text.find('{').unwrap()..];
        let report: serde_json::Value = serde_json::from_str(json).unwrap();

        assert_eq!(report["source"], "A");
        assert_eq!(report["unreachable"], serde_json::json!(["C", "D"]));
        assert_eq!(report["paths"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_resolve_source_defaults_to_first_vertex() {
        let graph = load_graph_file(CITIES, &GraphLimits::default()).unwrap();

        let source = resolve_source(&graph, None).unwrap();
        assert_eq!(graph.name(source), "Warsaw");
        let source = resolve_source(&graph, Some(" Gdansk ")).unwrap();
        assert_eq!(graph.name(source), "Gdansk");
        assert!(resolve_source(&Graph::default(), None).is_err());
    }
}
