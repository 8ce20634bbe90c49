/// Builds a small road network in code and prints its shortest paths.
///
/// Run with `cargo run --example basic_usage`.
use dijkstra_paths::graph::{compute_from_first, GraphBuilder};
use dijkstra_paths::report::{adjacency_matrix, render_paths};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let mut builder = GraphBuilder::new();
    let depot = builder.add_vertex("Depot")?;
    let north = builder.add_vertex("North")?;
    let south = builder.add_vertex("South")?;
    let harbor = builder.add_vertex("Harbor")?;
    builder.add_vertex("Island")?;

    builder.connect(depot, north, 4)?;
    builder.connect(depot, south, 1)?;
    builder.connect(south, north, 2)?;
    builder.connect(north, harbor, 5)?;
    builder.connect(south, harbor, 8)?;
    let graph = builder.build();

    println!("{}", adjacency_matrix(&graph));

    let paths = compute_from_first(&graph)?;
    print!("{}", render_paths(&graph, &paths));

    let unreachable = graph.len() - paths.reachable_count();
    println!("\n{} vertex(es) unreachable", unreachable);

    Ok(())
}
