//! Highlighted vertices and edges, plus the text form shown in the highlight fields.
//!
//! Vertices are written as comma-separated ids, edges as semicolon-separated `u-v` tokens.
//! Parsing is forgiving: unknown ids and malformed tokens are dropped.

use std::collections::BTreeSet;

use crate::graph::{GraphModel, VertexId};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HighlightState {
	vertices: BTreeSet<VertexId>,
	edges: BTreeSet<(VertexId, VertexId)>,
}

impl HighlightState {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn vertices(&self) -> impl Iterator<Item = &str> {
		self.vertices.iter().map(String::as_str)
	}

	pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> {
		self.edges.iter().map(|(u, v)| (u.as_str(), v.as_str()))
	}

	pub fn is_empty(&self) -> bool {
		self.vertices.is_empty() && self.edges.is_empty()
	}

	pub fn is_vertex_highlighted(&self, id: &str) -> bool {
		self.vertices.contains(id)
	}

	/// Undirected graphs treat `(u, v)` and `(v, u)` as the same edge.
	pub fn is_edge_highlighted(&self, u: &str, v: &str, directed: bool) -> bool {
		self.stored_edge(u, v, directed).is_some()
	}

	/// Flip a vertex highlight; returns whether it is now highlighted.
	pub fn toggle_vertex(&mut self, id: &str) -> bool {
		if self.vertices.remove(id) {
			return false;
		}
		self.vertices.insert(id.to_owned())
	}

	/// Flip an edge highlight; returns whether it is now highlighted. A new highlight is
	/// stored in the orientation given.
	pub fn toggle_edge(&mut self, u: &str, v: &str, directed: bool) -> bool {
		if let Some(key) = self.stored_edge(u, v, directed) {
			self.edges.remove(&key);
			return false;
		}
		self.edges.insert((u.to_owned(), v.to_owned()))
	}

	/// Drop the vertex and every edge highlight touching it.
	pub fn remove_vertex(&mut self, id: &str) {
		self.vertices.remove(id);
		self.edges.retain(|(u, v)| u != id && v != id);
	}

	pub fn remove_edge(&mut self, u: &str, v: &str, directed: bool) {
		if let Some(key) = self.stored_edge(u, v, directed) {
			self.edges.remove(&key);
		}
	}

	/// Drop entries whose vertices are no longer in `graph`.
	pub fn retain_present(&mut self, graph: &GraphModel) {
		self.vertices.retain(|id| graph.contains_vertex(id));
		self.edges
			.retain(|(u, v)| graph.contains_vertex(u) && graph.contains_vertex(v));
	}

	/// Keep one orientation per unordered pair, once the graph has become undirected.
	pub fn merge_reversed(&mut self) {
		for (u, v) in std::mem::take(&mut self.edges) {
			if !self.edges.contains(&(v.clone(), u.clone())) {
				self.edges.insert((u, v));
			}
		}
	}

	pub fn clear(&mut self) {
		self.vertices.clear();
		self.edges.clear();
	}

	/// Sorted ids joined with `,`.
	pub fn serialize_vertices(&self) -> String {
		self.vertices().collect::<Vec<_>>().join(",")
	}

	/// Sorted `u-v` tokens joined with `;`. Pairs whose ids contain `-` are written `u v`.
	pub fn serialize_edges(&self) -> String {
		self.edges()
			.map(|(u, v)| {
				if u.contains('-') || v.contains('-') {
					format!("{u} {v}")
				} else {
					format!("{u}-{v}")
				}
			})
			.collect::<Vec<_>>()
			.join(";")
	}

	/// Rebuild from the two text fields, keeping only ids present in `graph`.
	///
	/// Vertex text splits on `,` or `;`. Edge tokens split on `;` (or `,`) and use either
	/// `u-v` or `u v`.
	pub fn parse_from_text(vertex_text: &str, edge_text: &str, graph: &GraphModel) -> Self {
		let vertices = vertex_text
			.split([',', ';'])
			.map(str::trim)
			.filter(|id| !id.is_empty() && graph.contains_vertex(id))
			.map(str::to_owned)
			.collect();

		let edges = edge_text
			.split([';', ','])
			.map(str::trim)
			.filter(|token| !token.is_empty())
			.filter_map(parse_edge_token)
			.filter(|(u, v)| graph.contains_vertex(u) && graph.contains_vertex(v))
			.map(|(u, v)| (u.to_owned(), v.to_owned()))
			.collect();

		let mut parsed = Self { vertices, edges };
		if !graph.is_directed() {
			parsed.merge_reversed();
		}
		parsed
	}

	fn stored_edge(&self, u: &str, v: &str, directed: bool) -> Option<(VertexId, VertexId)> {
		let forward = (u.to_owned(), v.to_owned());
		if self.edges.contains(&forward) {
			return Some(forward);
		}
		if directed {
			return None;
		}
		let reverse = (v.to_owned(), u.to_owned());
		self.edges.contains(&reverse).then_some(reverse)
	}
}

/// `u v` and `u - v` split on whitespace, so ids may contain `-`; a bare `u-v` splits at the
/// first `-`.
fn parse_edge_token(token: &str) -> Option<(&str, &str)> {
	let parts: Vec<&str> = token.split_whitespace().collect();
	let (u, v) = match parts.as_slice() {
		[u, v] | [u, "-", v] => (*u, *v),
		[single] => single.split_once('-')?,
		_ => return None,
	};
	(!u.is_empty() && !v.is_empty()).then_some((u, v))
}
