use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use indexmap::{Equivalent, IndexMap, IndexSet};

/// Opaque vertex identifier. Equality is exact string match.
pub type VertexId = String;

/// Default threshold for [`GraphModel::density_label`].
pub const DEFAULT_DENSITY_THRESHOLD: f64 = 0.5;

/// Borrowed lookup key for the edge store, hashing like `(VertexId, VertexId)`.
struct PairRef<'a>(&'a str, &'a str);

impl Hash for PairRef<'_> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.0.hash(state);
		self.1.hash(state);
	}
}

impl Equivalent<(VertexId, VertexId)> for PairRef<'_> {
	fn equivalent(&self, key: &(VertexId, VertexId)) -> bool {
		self.0 == key.0 && self.1 == key.1
	}
}

/// Two-bucket density classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DensityLabel {
	Dense,
	Sparse,
}

impl fmt::Display for DensityLabel {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			DensityLabel::Dense => f.write_str("dense"),
			DensityLabel::Sparse => f.write_str("sparse"),
		}
	}
}

/// Vertex set plus weighted edges.
///
/// Edges live in a single insertion-ordered store. An undirected edge is stored once, in the
/// orientation it was first added, and every lookup matches either orientation; per-vertex
/// adjacency is derived on demand.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphModel {
	directed: bool,
	weighted: bool,
	vertices: IndexSet<VertexId>,
	edges: IndexMap<(VertexId, VertexId), f64>,
}

impl GraphModel {
	pub fn new(directed: bool, weighted: bool) -> Self {
		Self {
			directed,
			weighted,
			..Self::default()
		}
	}

	pub fn is_directed(&self) -> bool {
		self.directed
	}

	pub fn is_weighted(&self) -> bool {
		self.weighted
	}

	/// Switch edge interpretation.
	///
	/// Going undirected → directed keeps each edge in its stored orientation, so the implicit
	/// reverse direction disappears. Going directed → undirected merges `u→v` / `v→u` pairs:
	/// the earlier orientation is kept and the later weight wins.
	pub fn set_directed(&mut self, directed: bool) {
		if self.directed == directed {
			return;
		}
		self.directed = directed;
		if !directed {
			let edges = std::mem::take(&mut self.edges);
			for ((u, v), w) in edges {
				self.store_edge(u, v, w);
			}
		}
	}

	/// Switch weight mode. Dropping weights resets every edge to unit weight.
	pub fn set_weighted(&mut self, weighted: bool) {
		self.weighted = weighted;
		if !weighted {
			self.edges.values_mut().for_each(|w| *w = 1.0);
		}
	}

	pub fn vertices(&self) -> impl Iterator<Item = &str> {
		self.vertices.iter().map(String::as_str)
	}

	pub fn vertex_count(&self) -> usize {
		self.vertices.len()
	}

	pub fn contains_vertex(&self, id: &str) -> bool {
		self.vertices.contains(id)
	}

	/// Returns `false` when the vertex already existed.
	pub fn add_vertex(&mut self, id: &str) -> bool {
		if self.vertices.contains(id) {
			return false;
		}
		self.vertices.insert(id.to_owned())
	}

	/// Removes the vertex and every incident edge. Returns `false` when absent.
	pub fn remove_vertex(&mut self, id: &str) -> bool {
		if !self.vertices.shift_remove(id) {
			return false;
		}
		self.edges.retain(|(u, v), _| u != id && v != id);
		true
	}

	/// Adds `u→v` (or `{u,v}`), creating missing endpoints and overwriting any prior weight.
	/// Unweighted graphs store unit weight regardless of `weight`.
	pub fn add_edge(&mut self, u: &str, v: &str, weight: f64) {
		self.add_vertex(u);
		self.add_vertex(v);
		let w = if self.weighted { weight } else { 1.0 };
		self.store_edge(u.to_owned(), v.to_owned(), w);
	}

	/// Returns `false` when no such edge exists.
	pub fn remove_edge(&mut self, u: &str, v: &str) -> bool {
		match self.slot(u, v) {
			Some(i) => self.edges.shift_remove_index(i).is_some(),
			None => false,
		}
	}

	/// Replace all state with `vertices` and then `edges`, in input order.
	/// A missing weight defaults to `1.0`.
	pub fn load_from_edges<V, S, E>(&mut self, vertices: V, edges: E)
	where
		V: IntoIterator,
		V::Item: AsRef<str>,
		S: AsRef<str>,
		E: IntoIterator<Item = (S, S, Option<f64>)>,
	{
		self.vertices.clear();
		self.edges.clear();
		for id in vertices {
			self.add_vertex(id.as_ref());
		}
		for (u, v, w) in edges {
			self.add_edge(u.as_ref(), v.as_ref(), w.unwrap_or(1.0));
		}
	}

	pub fn weight(&self, u: &str, v: &str) -> Option<f64> {
		self.slot(u, v).map(|i| self.edges[i])
	}

	pub fn has_edge(&self, u: &str, v: &str) -> bool {
		self.slot(u, v).is_some()
	}

	/// Every stored edge once, in insertion order and stored orientation.
	pub fn edges(&self) -> impl Iterator<Item = (&str, &str, f64)> {
		self.edges
			.iter()
			.map(|((u, v), w)| (u.as_str(), v.as_str(), *w))
	}

	/// Neighbors of `id` in edge insertion order. Undirected graphs report both endpoints.
	pub fn neighbors<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a str> + 'a {
		let directed = self.directed;
		self.edges.keys().filter_map(move |(u, v)| {
			if u == id {
				Some(v.as_str())
			} else if !directed && v == id {
				Some(u.as_str())
			} else {
				None
			}
		})
	}

	/// True when no edge touches `id` in either direction.
	pub fn is_isolated(&self, id: &str) -> bool {
		!self.edges.keys().any(|(u, v)| u == id || v == id)
	}

	/// N×N matrix in vertex order: the weight where an edge exists, else `0.0`.
	pub fn adjacency_matrix(&self) -> Vec<Vec<f64>> {
		let n = self.vertices.len();
		let mut matrix = vec![vec![0.0; n]; n];
		for ((u, v), w) in &self.edges {
			let (Some(i), Some(j)) = (self.vertices.get_index_of(u), self.vertices.get_index_of(v))
			else {
				continue;
			};
			matrix[i][j] = *w;
			if !self.directed {
				matrix[j][i] = *w;
			}
		}
		matrix
	}

	/// Per vertex (in vertex order) the list of neighbor ids.
	pub fn adjacency_list(&self) -> Vec<(&str, Vec<&str>)> {
		let mut lists: HashMap<&str, Vec<&str>> = HashMap::with_capacity(self.vertices.len());
		for (u, v) in self.edges.keys() {
			lists.entry(u.as_str()).or_default().push(v.as_str());
			if !self.directed && u != v {
				lists.entry(v.as_str()).or_default().push(u.as_str());
			}
		}
		self.vertices()
			.map(|id| (id, lists.remove(id).unwrap_or_default()))
			.collect()
	}

	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}

	pub fn density(&self) -> f64 {
		let n = self.vertices.len();
		if n <= 1 {
			return 0.0;
		}
		let mut max_edges = (n * (n - 1)) as f64;
		if !self.directed {
			max_edges /= 2.0;
		}
		if max_edges == 0.0 {
			return 0.0;
		}
		self.edge_count() as f64 / max_edges
	}

	pub fn density_label(&self, threshold: f64) -> DensityLabel {
		if self.density() >= threshold {
			DensityLabel::Dense
		} else {
			DensityLabel::Sparse
		}
	}

	fn slot(&self, u: &str, v: &str) -> Option<usize> {
		self.edges.get_index_of(&PairRef(u, v)).or_else(|| {
			if self.directed {
				None
			} else {
				self.edges.get_index_of(&PairRef(v, u))
			}
		})
	}

	fn store_edge(&mut self, u: VertexId, v: VertexId, w: f64) {
		match self.slot(&u, &v) {
			Some(i) => self.edges[i] = w,
			None => {
				self.edges.insert((u, v), w);
			}
		}
	}
}
