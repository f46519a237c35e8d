//! Textual views derived from a graph: matrix cells, adjacency-list lines, density line.

use crate::codec::{display_weight, format_weight};
use crate::graph::GraphModel;

/// Matrix cell for a missing edge in a weighted graph.
pub const NO_EDGE: &str = "INF";

/// Header row: `#` followed by the vertex ids.
pub fn matrix_header(graph: &GraphModel) -> Vec<String> {
	std::iter::once("#".to_owned())
		.chain(graph.vertices().map(str::to_owned))
		.collect()
}

/// One row per vertex, led by the vertex id. Weighted graphs show [`NO_EDGE`] where no
/// edge exists; unweighted graphs show `0`/`1`.
pub fn matrix_rows(graph: &GraphModel) -> Vec<Vec<String>> {
	let vertices: Vec<&str> = graph.vertices().collect();
	graph
		.adjacency_matrix()
		.into_iter()
		.zip(&vertices)
		.map(|(row, u)| {
			let mut cells = vec![(*u).to_owned()];
			cells.extend(row.into_iter().zip(&vertices).map(|(value, v)| {
				if !graph.is_weighted() {
					return format_weight(value);
				}
				match graph.weight(u, v) {
					Some(w) => format_weight(w),
					None => NO_EDGE.to_owned(),
				}
			}));
			cells
		})
		.collect()
}

/// `id <arrow> n1, n2` per vertex, `∅` when isolated. Weighted graphs annotate each neighbor
/// with its weight.
pub fn adjacency_lines(graph: &GraphModel, arrow: &str) -> Vec<String> {
	graph
		.adjacency_list()
		.into_iter()
		.map(|(id, neighbors)| {
			if neighbors.is_empty() {
				return format!("{id} {arrow} ∅");
			}
			let shown: Vec<String> = neighbors
				.into_iter()
				.map(|n| match graph.weight(id, n) {
					Some(w) if graph.is_weighted() => format!("{n} ({})", display_weight(w)),
					_ => n.to_owned(),
				})
				.collect();
			format!("{id} {arrow} {}", shown.join(", "))
		})
		.collect()
}

pub fn density_line(graph: &GraphModel, threshold: f64) -> String {
	format!(
		"Density: {:.3} ({})",
		graph.density(),
		graph.density_label(threshold)
	)
}

/// Everything the side panels display, computed in one pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DerivedViews {
	pub header: Vec<String>,
	pub rows: Vec<Vec<String>>,
	pub adjacency: Vec<String>,
	pub density: String,
}

impl DerivedViews {
	pub fn of(graph: &GraphModel, density_threshold: f64) -> Self {
		Self {
			header: matrix_header(graph),
			rows: matrix_rows(graph),
			adjacency: adjacency_lines(graph, "→"),
			density: density_line(graph, density_threshold),
		}
	}
}
