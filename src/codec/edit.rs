//! The free-text edge list typed into the editor: one `u v [w]` edge or one `u` vertex
//! declaration per line, blank lines ignored.

use std::collections::BTreeSet;

use super::FormatError;
use super::format::format_weight;
use crate::graph::{GraphModel, VertexId};

/// Weight given to a `u v` line when the graph is weighted.
pub const WEIGHTED_EDGE_DEFAULT: f64 = 1.0;

/// One parsed edge line.
pub type EdgeTriple = (VertexId, VertexId, f64);

/// A fully validated edit text, ready to become a graph.
#[derive(Clone, Debug, PartialEq)]
pub struct EditParse {
	/// Every declared vertex, sorted.
	pub vertices: Vec<VertexId>,
	/// Edge lines in input order.
	pub edges: Vec<EdgeTriple>,
	/// Weight mode the edges were parsed under.
	pub weighted: bool,
}

impl EditParse {
	pub fn into_graph(self, directed: bool) -> GraphModel {
		let mut graph = GraphModel::new(directed, self.weighted);
		graph.load_from_edges(
			self.vertices,
			self.edges.into_iter().map(|(u, v, w)| (u, v, Some(w))),
		);
		graph
	}
}

fn tokens(line: &str) -> Vec<&str> {
	line.split_whitespace().collect()
}

pub(crate) fn parse_weight(token: &str, line: usize) -> Result<f64, FormatError> {
	token.parse::<f64>().map_err(|_| FormatError::InvalidWeight {
		line,
		token: token.to_owned(),
	})
}

/// Vertex ids declared by the text: the first two tokens of edge lines and the token of
/// single-token lines.
pub fn extract_vertices(text: &str) -> BTreeSet<VertexId> {
	let mut vertices = BTreeSet::new();
	for line in text.lines() {
		vertices.extend(tokens(line).into_iter().take(2).map(str::to_owned));
	}
	vertices
}

/// Parse edge lines under a fixed weight mode.
pub fn parse_edges(text: &str, weighted: bool) -> Result<Vec<EdgeTriple>, FormatError> {
	let mut edges = Vec::new();
	for (idx, raw) in text.lines().enumerate() {
		let line = idx + 1;
		let toks = tokens(raw);
		let (u, v, w) = match (toks.as_slice(), weighted) {
			([] | [_], _) => continue,
			([u, v], true) => (*u, *v, WEIGHTED_EDGE_DEFAULT),
			([u, v], false) => (*u, *v, 1.0),
			([u, v, w], true) => (*u, *v, parse_weight(w, line)?),
			(found, true) => {
				return Err(FormatError::EdgeShape {
					line,
					found: found.len(),
				});
			}
			(_, false) => return Err(FormatError::UnexpectedWeight { line }),
		};
		edges.push((u.to_owned(), v.to_owned(), w));
	}
	Ok(edges)
}

/// Whether any line carries a third token. Fails on the first third token that is not a number.
pub fn detect_weighted(text: &str) -> Result<bool, FormatError> {
	let mut weighted = false;
	for (idx, raw) in text.lines().enumerate() {
		if let Some(token) = tokens(raw).get(2) {
			parse_weight(token, idx + 1)?;
			weighted = true;
		}
	}
	Ok(weighted)
}

/// Live-edit parse: the weight mode is detected from the text itself.
pub fn parse_live(text: &str) -> Result<EditParse, FormatError> {
	let weighted = detect_weighted(text)?;
	let edges = parse_edges(text, weighted)?;
	Ok(EditParse {
		vertices: extract_vertices(text).into_iter().collect(),
		edges,
		weighted,
	})
}

/// Explicit apply: parse under the caller's weight mode and require at least one vertex.
pub fn parse_strict(text: &str, weighted: bool) -> Result<EditParse, FormatError> {
	let vertices = extract_vertices(text);
	if vertices.is_empty() {
		return Err(FormatError::NoVertices);
	}
	let edges = parse_edges(text, weighted)?;
	Ok(EditParse {
		vertices: vertices.into_iter().collect(),
		edges,
		weighted,
	})
}

/// Regenerate edit text from a graph: edges in stored order, then isolated vertices.
pub fn to_edit_text(graph: &GraphModel) -> String {
	let mut lines: Vec<String> = graph
		.edges()
		.map(|(u, v, w)| {
			if graph.is_weighted() {
				format!("{u} {v} {}", format_weight(w))
			} else {
				format!("{u} {v}")
			}
		})
		.collect();
	lines.extend(
		graph
			.vertices()
			.filter(|id| graph.is_isolated(id))
			.map(str::to_owned),
	);
	lines.join("\n")
}
