use std::collections::HashMap;
use std::f32::consts::PI;

use force_graph::{EdgeData, ForceGraph, NodeData};

use super::LayoutEngine;
use crate::config::LayoutConfig;
use crate::geometry::Point;
use crate::graph::VertexId;

#[derive(Clone, Debug, Default)]
struct LayoutNode {
	id: VertexId,
}

/// Force-directed placement: vertices are seeded on a circle and the simulation is run for
/// a fixed number of steps. Deterministic for a given input.
#[derive(Clone, Debug, Default)]
pub struct ForceLayout {
	config: LayoutConfig,
}

impl ForceLayout {
	pub fn new(config: LayoutConfig) -> Self {
		Self { config }
	}
}

impl LayoutEngine for ForceLayout {
	fn compute(&mut self, vertices: &[&str], edges: &[(&str, &str)]) -> HashMap<VertexId, Point> {
		let mut graph: ForceGraph<LayoutNode, ()> = ForceGraph::new(self.config.parameters());
		let mut id_to_idx = HashMap::with_capacity(vertices.len());

		for (i, id) in vertices.iter().enumerate() {
			let angle = (i as f32) * 2.0 * PI / vertices.len() as f32;
			let idx = graph.add_node(NodeData {
				x: self.config.spread * angle.cos(),
				y: self.config.spread * angle.sin(),
				mass: self.config.mass,
				is_anchor: false,
				user_data: LayoutNode {
					id: (*id).to_owned(),
				},
			});
			id_to_idx.insert(*id, idx);
		}

		for (u, v) in edges {
			// self-loops have no length to relax
			if u == v {
				continue;
			}
			if let (Some(&src), Some(&tgt)) = (id_to_idx.get(u), id_to_idx.get(v)) {
				graph.add_edge(src, tgt, EdgeData::default());
			}
		}

		for _ in 0..self.config.iterations {
			graph.update(self.config.step);
		}

		let mut positions = HashMap::with_capacity(vertices.len());
		graph.visit_nodes(|node| {
			positions.insert(
				node.data.user_data.id.clone(),
				Point::new(node.x() as f64, node.y() as f64),
			);
		});
		positions
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn every_vertex_gets_a_finite_position() {
		let mut engine = ForceLayout::default();
		let positions = engine.compute(&["a", "b", "c", "d"], &[("a", "b"), ("b", "c"), ("c", "c")]);
		assert_eq!(positions.len(), 4);
		assert!(positions.values().all(|p| p.is_finite()));
	}

	#[test]
	fn empty_input_is_empty_output() {
		assert!(ForceLayout::default().compute(&[], &[]).is_empty());
	}
}
