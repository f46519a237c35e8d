//! The structured load format and the human-readable export report.
//!
//! ```text
//! <vertex-count>      informational only
//! <0|1>               0 = undirected, 1 = directed
//! <u> <v> [<w>]       edges; a lone <u> declares an isolated vertex
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use super::FormatError;
use super::edit::{WEIGHTED_EDGE_DEFAULT, parse_weight};
use super::format::format_weight;
use crate::graph::{GraphError, GraphModel};
use crate::views::{adjacency_lines, matrix_header, matrix_rows};

/// Parse load-format text. Weight mode is detected from the edge lines.
pub fn read_graph(text: &str) -> Result<GraphModel, FormatError> {
	let mut lines = text
		.lines()
		.enumerate()
		.map(|(idx, raw)| (idx + 1, raw.trim()))
		.filter(|(_, raw)| !raw.is_empty());

	let Some((count_line, count)) = lines.next() else {
		return Err(FormatError::Empty);
	};
	let Some((flag_line, flag)) = lines.next() else {
		return Err(FormatError::MissingHeader);
	};
	count.parse::<usize>().map_err(|_| FormatError::VertexCount {
		line: count_line,
		value: count.to_owned(),
	})?;
	let directed = match flag {
		"0" => false,
		"1" => true,
		other => {
			return Err(FormatError::DirectedFlag {
				line: flag_line,
				value: other.to_owned(),
			});
		}
	};

	let mut vertices = BTreeSet::new();
	let mut edges = Vec::new();
	let mut weighted = false;
	for (line, raw) in lines {
		let toks: Vec<&str> = raw.split_whitespace().collect();
		match toks.as_slice() {
			[id] => {
				vertices.insert((*id).to_owned());
			}
			[u, v] => {
				vertices.insert((*u).to_owned());
				vertices.insert((*v).to_owned());
				edges.push(((*u).to_owned(), (*v).to_owned(), WEIGHTED_EDGE_DEFAULT));
			}
			[u, v, w] => {
				let w = parse_weight(w, line)?;
				weighted = true;
				vertices.insert((*u).to_owned());
				vertices.insert((*v).to_owned());
				edges.push(((*u).to_owned(), (*v).to_owned(), w));
			}
			[] => {}
			found => {
				return Err(FormatError::EdgeShape {
					line,
					found: found.len(),
				});
			}
		}
	}

	let mut graph = GraphModel::new(directed, weighted);
	graph.load_from_edges(vertices, edges.into_iter().map(|(u, v, w)| (u, v, Some(w))));
	Ok(graph)
}

/// Write a graph in load format, re-readable by [`read_graph`].
pub fn to_load_text(graph: &GraphModel) -> String {
	let mut lines = vec![
		graph.vertex_count().to_string(),
		if graph.is_directed() { "1" } else { "0" }.to_owned(),
	];
	for (u, v, w) in graph.edges() {
		if graph.is_weighted() {
			lines.push(format!("{u} {v} {}", format_weight(w)));
		} else {
			lines.push(format!("{u} {v}"));
		}
	}
	lines.extend(
		graph
			.vertices()
			.filter(|id| graph.is_isolated(id))
			.map(str::to_owned),
	);
	lines.join("\n")
}

/// Human-readable report: counts, vertex list, edge list, adjacency matrix and list.
/// Not meant to be read back.
pub fn export_report(graph: &GraphModel) -> String {
	let vertices: Vec<&str> = graph.vertices().collect();
	let mut out = vec![
		format!("Vertex count: {}", vertices.len()),
		format!(
			"Vertices: {}",
			if vertices.is_empty() {
				"∅".to_owned()
			} else {
				vertices.join(", ")
			}
		),
		String::new(),
		"Edges:".to_owned(),
	];

	let mut edge_lines: Vec<String> = graph
		.edges()
		.map(|(u, v, w)| {
			let (u, v) = if !graph.is_directed() && v < u { (v, u) } else { (u, v) };
			if graph.is_weighted() {
				format!("{u} {v} {}", format_weight(w))
			} else {
				format!("{u} {v}")
			}
		})
		.collect();
	if edge_lines.is_empty() {
		edge_lines.push("∅".to_owned());
	}
	out.extend(edge_lines);

	out.push(String::new());
	out.push("Adjacency matrix:".to_owned());
	if vertices.is_empty() {
		out.push("∅".to_owned());
	} else {
		out.push(matrix_header(graph).join("\t"));
		out.extend(matrix_rows(graph).into_iter().map(|row| row.join("\t")));
	}

	out.push(String::new());
	out.push("Adjacency list:".to_owned());
	if vertices.is_empty() {
		out.push("∅".to_owned());
	} else {
		out.extend(adjacency_lines(graph, "->"));
	}
	out.join("\n")
}

pub fn read_graph_from_path(path: impl AsRef<Path>) -> Result<GraphModel, GraphError> {
	let path = path.as_ref();
	let text = fs::read_to_string(path).map_err(|source| GraphError::Io {
		path: path.to_path_buf(),
		source,
	})?;
	Ok(read_graph(&text)?)
}

pub fn export_report_to_path(graph: &GraphModel, path: impl AsRef<Path>) -> Result<(), GraphError> {
	let path = path.as_ref();
	fs::write(path, export_report(graph)).map_err(|source| GraphError::Io {
		path: path.to_path_buf(),
		source,
	})
}
