//! Interactive graph collection over a line-based console.
//!
//! Invalid answers never abort the session: the question is repeated until
//! an acceptable answer is given. Only I/O failures and end of input are
//! reported as errors.

use std::collections::HashSet;
use std::fmt::Display;
use std::io::{BufRead, Write};

use tracing::debug;

use crate::graph::{Graph, GraphBuilder, GraphError, GraphLimits, VertexId};

use super::error::{InputError, InputResult};

const SEPARATOR: &str = "----------------------------------------------------------------------";

/// Collects a graph by asking questions on `output` and reading answers
/// from `input`.
pub struct GraphPrompter<R, W> {
    input: R,
    output: W,
    limits: GraphLimits,
}

impl<R: BufRead, W: Write> GraphPrompter<R, W> {
    /// Creates a prompter with the given limits.
    pub fn new(input: R, output: W, limits: GraphLimits) -> Self {
        Self {
            input,
            output,
            limits,
        }
    }

    /// Gives back the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the whole question flow and returns the finished graph.
    pub fn collect_graph(&mut self) -> InputResult<Graph> {
        self.limits.validate()?;

        writeln!(
            self.output,
            "The first vertex entered is the source; shortest paths are computed from it."
        )?;
        writeln!(self.output, "{}", SEPARATOR)?;

        let count = self.ask_number_in_range(
            "Enter the number of vertices in the graph",
            self.limits.min_vertices,
            self.limits.max_vertices,
        )?;

        let mut builder = GraphBuilder::new();
        let vertices = self.ask_vertex_names(&mut builder, count)?;

        for &vertex in &vertices {
            self.ask_neighbors(&mut builder, vertex, count)?;
        }

        let graph = builder.build();
        debug!(
            "Collected graph with {} vertices and {} edges",
            graph.len(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Repeats `message` until a number within `low..=high` is entered.
    pub fn ask_number_in_range<T>(&mut self, message: &str, low: T, high: T) -> InputResult<T>
    where
        T: std::str::FromStr + PartialOrd + Display + Copy,
    {
        loop {
            write!(self.output, "{} (range {}-{}): ", message, low, high)?;
            self.output.flush()?;

            let answer = self.read_line()?;
            match answer.parse::<T>() {
                Ok(value) if value >= low && value <= high => return Ok(value),
                _ => debug!("Rejected answer '{}' for range {}-{}", answer, low, high),
            }
        }
    }

    fn ask_vertex_names(
        &mut self,
        builder: &mut GraphBuilder,
        count: usize,
    ) -> InputResult<Vec<VertexId>> {
        writeln!(self.output)?;
        let mut vertices = Vec::with_capacity(count);

        for i in 0..count {
            loop {
                if i == 0 {
                    write!(self.output, "Enter the name of the source vertex: ")?;
                } else {
                    write!(self.output, "Enter the name of vertex {}: ", i + 1)?;
                }
                self.output.flush()?;

                let name = self.read_line()?;
                match builder.add_vertex(name) {
                    Ok(id) => {
                        vertices.push(id);
                        break;
                    }
                    Err(GraphError::EmptyName) => {
                        writeln!(self.output, "The vertex name cannot be empty.")?;
                    }
                    Err(GraphError::DuplicateVertex(name)) => {
                        writeln!(self.output, "A vertex named {} already exists.", name)?;
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        }

        writeln!(self.output)?;
        Ok(vertices)
    }

    fn ask_neighbors(
        &mut self,
        builder: &mut GraphBuilder,
        vertex: VertexId,
        count: usize,
    ) -> InputResult<()> {
        let name = builder.name(vertex).to_string();
        writeln!(self.output, "{}", SEPARATOR)?;

        let neighbors = self.ask_number_in_range(
            &format!("Enter the number of vertices adjacent to {}", name),
            1,
            count - 1,
        )?;

        let mut listed = HashSet::new();
        for j in 0..neighbors {
            let target = self.ask_neighbor_name(builder, vertex, &listed, j + 1, neighbors)?;
            listed.insert(target);

            if let Some(existing) = builder.weight(vertex, target) {
                writeln!(
                    self.output,
                    "These vertices are already connected. \
                     Kept the return edge with the same distance ({}).",
                    existing
                )?;
            } else {
                let weight = self.ask_number_in_range(
                    &format!("Enter the distance from {} to {}", name, builder.name(target)),
                    self.limits.min_weight,
                    self.limits.max_weight,
                )?;
                builder.connect(vertex, target, weight)?;
            }
            writeln!(self.output)?;
        }

        Ok(())
    }

    fn ask_neighbor_name(
        &mut self,
        builder: &GraphBuilder,
        vertex: VertexId,
        listed: &HashSet<VertexId>,
        position: usize,
        total: usize,
    ) -> InputResult<VertexId> {
        loop {
            write!(
                self.output,
                "Enter the name of the adjacent vertex ({} of {}): ",
                position, total
            )?;
            self.output.flush()?;

            let answer = self.read_line()?;
            match builder.vertex_id(&answer) {
                None => writeln!(self.output, "No vertex with that name was found.")?,
                Some(id) if id == vertex => {
                    writeln!(self.output, "A vertex cannot be adjacent to itself.")?
                }
                Some(id) if listed.contains(&id) => {
                    writeln!(self.output, "That vertex was already listed.")?
                }
                Some(id) => return Ok(id),
            }
        }
    }

    fn read_line(&mut self) -> InputResult<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(InputError::UnexpectedEof);
        }
        Ok(line.trim().to_string())
    }
}
