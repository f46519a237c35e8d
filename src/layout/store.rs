use std::collections::{BTreeSet, HashMap};

use log::debug;

use super::LayoutEngine;
use crate::geometry::Point;
use crate::graph::{GraphModel, VertexId};

/// Data-space vertex positions, recomputed only when the vertex-id set changes so that
/// manual drags survive redraws.
#[derive(Clone, Debug, Default)]
pub struct LayoutStore {
	positions: HashMap<VertexId, Point>,
	computed_for: BTreeSet<VertexId>,
	generation: u64,
}

impl LayoutStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn position(&self, id: &str) -> Option<Point> {
		self.positions.get(id).copied()
	}

	/// Move a known vertex. Unknown ids and non-finite points are ignored.
	pub fn set_position(&mut self, id: &str, at: Point) -> bool {
		if !at.is_finite() {
			return false;
		}
		match self.positions.get_mut(id) {
			Some(slot) => {
				*slot = at;
				true
			}
			None => false,
		}
	}

	pub fn len(&self) -> usize {
		self.positions.len()
	}

	pub fn is_empty(&self) -> bool {
		self.positions.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, Point)> {
		self.positions.iter().map(|(id, p)| (id.as_str(), *p))
	}

	/// Bumped on every recomputation; views use it to re-fit the camera.
	pub fn generation(&self) -> u64 {
		self.generation
	}

	/// Whether the stored positions were computed for exactly this vertex set.
	pub fn is_current(&self, graph: &GraphModel) -> bool {
		self.computed_for.len() == graph.vertex_count()
			&& graph.vertices().all(|id| self.computed_for.contains(id))
	}

	/// Recompute through `engine` if the vertex set changed. Returns whether it did.
	pub fn sync(&mut self, graph: &GraphModel, engine: &mut dyn LayoutEngine) -> bool {
		if self.is_current(graph) {
			return false;
		}
		let vertices: Vec<&str> = graph.vertices().collect();
		let edges: Vec<(&str, &str)> = graph.edges().map(|(u, v, _)| (u, v)).collect();
		let mut computed = engine.compute(&vertices, &edges);
		computed.retain(|id, p| graph.contains_vertex(id) && p.is_finite());

		debug!(
			"layout recomputed for {} vertices ({} positioned)",
			vertices.len(),
			computed.len()
		);
		self.positions = computed;
		self.computed_for = vertices.into_iter().map(str::to_owned).collect();
		self.generation += 1;
		true
	}

	/// Forget every position; the next [`sync`](Self::sync) recomputes.
	pub fn invalidate(&mut self) {
		self.positions.clear();
		self.computed_for.clear();
	}

	/// Axis-aligned bounds of all positions as `(min, max)`.
	pub fn bounds(&self) -> Option<(Point, Point)> {
		self.positions.values().fold(None, |acc, p| {
			Some(match acc {
				None => (*p, *p),
				Some((lo, hi)) => (
					Point::new(lo.x.min(p.x), lo.y.min(p.y)),
					Point::new(hi.x.max(p.x), hi.y.max(p.y)),
				),
			})
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	/// Places vertex `i` at `(i, 0)` and counts calls.
	#[derive(Default)]
	struct LineEngine {
		calls: usize,
	}

	impl LayoutEngine for LineEngine {
		fn compute(&mut self, vertices: &[&str], _: &[(&str, &str)]) -> HashMap<VertexId, Point> {
			self.calls += 1;
			vertices
				.iter()
				.enumerate()
				.map(|(i, id)| ((*id).to_owned(), Point::new(i as f64, 0.0)))
				.collect()
		}
	}

	fn graph(vertices: &[&str]) -> GraphModel {
		let mut g = GraphModel::default();
		g.load_from_edges(vertices, std::iter::empty::<(&str, &str, Option<f64>)>());
		g
	}

	#[test]
	fn unchanged_vertex_set_keeps_dragged_positions() {
		let mut store = LayoutStore::new();
		let mut engine = LineEngine::default();
		let mut g = graph(&["a", "b"]);

		assert!(store.sync(&g, &mut engine));
		assert!(store.set_position("a", Point::new(5.0, 5.0)));

		g.add_edge("a", "b", 1.0);
		assert!(!store.sync(&g, &mut engine));
		assert_eq!(store.position("a"), Some(Point::new(5.0, 5.0)));
		assert_eq!(engine.calls, 1);
	}

	#[test]
	fn changed_vertex_set_recomputes_and_drops_stale() {
		let mut store = LayoutStore::new();
		let mut engine = LineEngine::default();
		store.sync(&graph(&["a", "b"]), &mut engine);
		let generation = store.generation();

		assert!(store.sync(&graph(&["b", "c"]), &mut engine));
		assert_eq!(store.position("a"), None);
		assert_eq!(store.position("c"), Some(Point::new(1.0, 0.0)));
		assert_eq!(store.generation(), generation + 1);
	}

	#[test]
	fn unknown_or_non_finite_moves_are_ignored() {
		let mut store = LayoutStore::new();
		store.sync(&graph(&["a"]), &mut LineEngine::default());
		assert!(!store.set_position("zz", Point::new(1.0, 1.0)));
		assert!(!store.set_position("a", Point::new(f64::NAN, 1.0)));
		assert_eq!(store.position("a"), Some(Point::new(0.0, 0.0)));
	}

	#[test]
	fn bounds_cover_all_points() {
		let mut store = LayoutStore::new();
		store.sync(&graph(&["a", "b", "c"]), &mut LineEngine::default());
		assert_eq!(
			store.bounds(),
			Some((Point::new(0.0, 0.0), Point::new(2.0, 0.0)))
		);
	}
}
