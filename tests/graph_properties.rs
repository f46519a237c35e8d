use graph_sketch::codec::{read_graph, to_load_text};
use graph_sketch::graph::GraphModel;
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
	AddVertex { name: u8 },
	RemoveVertex { idx: u16 },
	AddEdge { a: u16, b: u16, weight: i8 },
	RemoveEdge { idx: u16 },
	SetDirected(bool),
	SetWeighted(bool),
}

fn op_strategy() -> impl Strategy<Value = Op> {
	prop_oneof![
		(0u8..12).prop_map(|name| Op::AddVertex { name }),
		any::<u16>().prop_map(|idx| Op::RemoveVertex { idx }),
		(any::<u16>(), any::<u16>(), any::<i8>()).prop_map(|(a, b, weight)| Op::AddEdge {
			a,
			b,
			weight,
		}),
		any::<u16>().prop_map(|idx| Op::RemoveEdge { idx }),
		any::<bool>().prop_map(Op::SetDirected),
		any::<bool>().prop_map(Op::SetWeighted),
	]
}

fn sequence_strategy() -> impl Strategy<Value = Vec<Op>> {
	prop::collection::vec(op_strategy(), 5..40)
}

fn pick<T: Clone>(items: &[T], idx: u16) -> Option<T> {
	(!items.is_empty()).then(|| items[idx as usize % items.len()].clone())
}

fn apply_op(g: &mut GraphModel, op: Op) {
	let vertices: Vec<String> = g.vertices().map(str::to_owned).collect();
	let edges: Vec<(String, String)> = g
		.edges()
		.map(|(u, v, _)| (u.to_owned(), v.to_owned()))
		.collect();
	match op {
		Op::AddVertex { name } => {
			g.add_vertex(&format!("v{name}"));
		}
		Op::RemoveVertex { idx } => {
			if let Some(id) = pick(&vertices, idx) {
				g.remove_vertex(&id);
			}
		}
		Op::AddEdge { a, b, weight } => {
			// endpoints past the current vertex set create new vertices
			let name = |i: u16| pick(&vertices, i).unwrap_or_else(|| format!("n{}", i % 5));
			g.add_edge(&name(a), &name(b), f64::from(weight));
		}
		Op::RemoveEdge { idx } => {
			if let Some((u, v)) = pick(&edges, idx) {
				g.remove_edge(&u, &v);
			}
		}
		Op::SetDirected(directed) => g.set_directed(directed),
		Op::SetWeighted(weighted) => g.set_weighted(weighted),
	}
}

fn assert_invariants(g: &GraphModel) {
	let n = g.vertex_count();
	let matrix = g.adjacency_matrix();
	assert_eq!(matrix.len(), n);

	for (u, v, w) in g.edges() {
		assert!(g.contains_vertex(u), "edge {u}-{v} missing vertex {u}");
		assert!(g.contains_vertex(v), "edge {u}-{v} missing vertex {v}");
		if !g.is_weighted() {
			assert_eq!(w, 1.0, "unweighted edge {u}-{v} carries {w}");
		}
		if !g.is_directed() {
			assert_eq!(g.weight(u, v), g.weight(v, u), "asymmetric {u}-{v}");
		}
	}

	if !g.is_directed() {
		for (i, row) in matrix.iter().enumerate() {
			assert_eq!(row.len(), n);
			for (j, cell) in row.iter().enumerate() {
				assert_eq!(*cell, matrix[j][i], "matrix not symmetric at ({i}, {j})");
			}
		}
		// each unordered pair stored once
		let mut pairs: Vec<(&str, &str)> = g
			.edges()
			.map(|(u, v, _)| if u <= v { (u, v) } else { (v, u) })
			.collect();
		let total = pairs.len();
		pairs.sort_unstable();
		pairs.dedup();
		assert_eq!(pairs.len(), total, "duplicate undirected pair");
	}

	assert_eq!(g.edge_count(), g.edges().count());
	for (id, neighbors) in g.adjacency_list() {
		assert!(neighbors.iter().all(|n| g.contains_vertex(n)), "{id} lists a removed neighbor");
	}
}

proptest! {
	#![proptest_config(ProptestConfig { cases: 2_000, .. ProptestConfig::default() })]
	#[test]
	fn mutation_sequences_keep_invariants(
		seq in sequence_strategy(),
		directed in any::<bool>(),
		weighted in any::<bool>(),
	) {
		let mut g = GraphModel::new(directed, weighted);
		for op in seq {
			apply_op(&mut g, op);
			assert_invariants(&g);
		}
	}

	#[test]
	fn removed_vertex_leaves_no_trace(seq in sequence_strategy(), idx in any::<u16>()) {
		let mut g = GraphModel::new(false, true);
		for op in seq {
			apply_op(&mut g, op);
		}
		let vertices: Vec<String> = g.vertices().map(str::to_owned).collect();
		prop_assume!(!vertices.is_empty());
		let gone = vertices[idx as usize % vertices.len()].clone();

		prop_assert!(g.remove_vertex(&gone));
		prop_assert_eq!(g.adjacency_matrix().len(), vertices.len() - 1);
		prop_assert!(g.vertices().all(|id| id != gone));
		prop_assert!(g.edges().all(|(u, v, _)| u != gone && v != gone));
		for (_, neighbors) in g.adjacency_list() {
			prop_assert!(!neighbors.contains(&gone.as_str()));
		}
	}

	#[test]
	fn load_format_round_trips(seq in sequence_strategy(), directed in any::<bool>()) {
		let mut g = GraphModel::new(directed, true);
		for op in seq {
			apply_op(&mut g, op);
		}
		let back = read_graph(&to_load_text(&g)).unwrap();

		prop_assert_eq!(back.is_directed(), g.is_directed());
		prop_assert_eq!(back.vertex_count(), g.vertex_count());
		prop_assert_eq!(back.edge_count(), g.edge_count());
		for (u, v, w) in g.edges() {
			prop_assert_eq!(back.weight(u, v), Some(w));
		}
		if g.edge_count() > 0 {
			prop_assert_eq!(back.is_weighted(), g.is_weighted());
		}
	}
}
