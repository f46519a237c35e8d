//! Built-in sample graphs.

use crate::graph::GraphModel;

/// Zachary's karate club: 34 members, 78 friendships.
pub const KARATE_CLUB_VERTICES: usize = 34;

#[rustfmt::skip]
const KARATE_CLUB_EDGES: [(u8, u8); 78] = [
	(0, 1), (0, 2), (0, 3), (0, 4), (0, 5), (0, 6), (0, 7), (0, 8),
	(0, 10), (0, 11), (0, 12), (0, 13), (0, 17), (0, 19), (0, 21), (0, 31),
	(1, 2), (1, 3), (1, 7), (1, 13), (1, 17), (1, 19), (1, 21), (1, 30),
	(2, 3), (2, 7), (2, 8), (2, 9), (2, 13), (2, 27), (2, 28), (2, 32),
	(3, 7), (3, 12), (3, 13),
	(4, 6), (4, 10),
	(5, 6), (5, 10), (5, 16),
	(6, 16),
	(8, 30), (8, 32), (8, 33),
	(9, 33),
	(13, 33),
	(14, 32), (14, 33),
	(15, 32), (15, 33),
	(18, 32), (18, 33),
	(19, 33),
	(20, 32), (20, 33),
	(22, 32), (22, 33),
	(23, 25), (23, 27), (23, 29), (23, 32), (23, 33),
	(24, 25), (24, 27), (24, 31),
	(25, 31),
	(26, 29), (26, 33),
	(27, 33),
	(28, 31), (28, 33),
	(29, 32), (29, 33),
	(30, 32), (30, 33),
	(31, 32), (31, 33),
	(32, 33),
];

/// The karate club as an unweighted graph with vertices `"0"` to `"33"` in numeric order.
pub fn karate_club(directed: bool) -> GraphModel {
	let mut graph = GraphModel::new(directed, false);
	graph.load_from_edges(
		(0..KARATE_CLUB_VERTICES).map(|i| i.to_string()),
		KARATE_CLUB_EDGES
			.iter()
			.map(|(u, v)| (u.to_string(), v.to_string(), None)),
	);
	graph
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn karate_club_shape() {
		let g = karate_club(false);
		assert_eq!(g.vertex_count(), 34);
		assert_eq!(g.edge_count(), 78);
		assert!(g.vertices().all(|id| !g.is_isolated(id)));
		assert_eq!(g.neighbors("33").count(), 17);
		assert_eq!(g.vertices().next(), Some("0"));
	}

	#[test]
	fn directed_variant_keeps_every_edge() {
		let g = karate_club(true);
		assert_eq!(g.edge_count(), 78);
		assert!(g.has_edge("0", "1"));
		assert!(!g.has_edge("1", "0"));
	}
}
