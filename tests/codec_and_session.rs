use std::collections::HashMap;
use std::fs;

use graph_sketch::codec::{self, FormatError};
use graph_sketch::config::{InteractionConfig, ViewConfig};
use graph_sketch::geometry::Point;
use graph_sketch::graph::{DensityLabel, GraphError, GraphModel, VertexId};
use graph_sketch::layout::LayoutEngine;
use graph_sketch::session::Session;

struct Origin;

impl LayoutEngine for Origin {
	fn compute(&mut self, vertices: &[&str], _: &[(&str, &str)]) -> HashMap<VertexId, Point> {
		vertices
			.iter()
			.map(|id| ((*id).to_owned(), Point::default()))
			.collect()
	}
}

fn session() -> Session {
	Session::new(
		Box::new(Origin),
		InteractionConfig::default(),
		ViewConfig::default(),
	)
}

#[test]
fn live_parse_promotes_to_weighted() {
	let parsed = codec::parse_live("A B 3.5\nB C\n").unwrap();
	let g = parsed.into_graph(false);
	assert!(g.is_weighted());
	assert_eq!(g.weight("A", "B"), Some(3.5));
	assert_eq!(g.weight("C", "B"), Some(codec::WEIGHTED_EDGE_DEFAULT));
}

#[test]
fn live_parse_reports_bad_weight_line() {
	let err = codec::parse_live("A B 3.5\nB C x\n").unwrap_err();
	assert_eq!(err.line(), Some(2));
	assert!(matches!(err, FormatError::InvalidWeight { ref token, .. } if token == "x"));
}

#[test]
fn density_edges() {
	assert_eq!(GraphModel::default().density(), 0.0);

	let mut single = GraphModel::default();
	single.add_vertex("only");
	assert_eq!(single.density(), 0.0);

	let mut complete = GraphModel::new(false, false);
	let ids = ["a", "b", "c", "d", "e"];
	for (i, u) in ids.iter().enumerate() {
		for v in &ids[i + 1..] {
			complete.add_edge(u, v, 1.0);
		}
	}
	assert_eq!(complete.density(), 1.0);
	assert_eq!(complete.density_label(0.5), DensityLabel::Dense);
}

#[test]
fn export_then_import_restores_the_graph() {
	let mut s = session();
	s.auto_update("x y 2\ny z 0.5\nlonely");
	s.set_options(true, true);
	let saved = s.export_load_text();
	let before = s.graph().clone();

	let mut other = session();
	other.import_text(&saved).unwrap();
	assert!(other.is_directed());
	assert_eq!(other.graph().vertex_count(), before.vertex_count());
	for (u, v, w) in before.edges() {
		assert_eq!(other.graph().weight(u, v), Some(w));
	}
	assert!(other.graph().is_isolated("lonely"));
}

#[test]
fn report_and_file_round_trip() {
	let dir = std::env::temp_dir().join(format!("graph-sketch-{}", std::process::id()));
	fs::create_dir_all(&dir).unwrap();
	let report_path = dir.join("report.txt");
	let graph_path = dir.join("graph.txt");

	let mut s = session();
	s.load_sample();
	s.export_to_path(&report_path).unwrap();
	let report = fs::read_to_string(&report_path).unwrap();
	assert!(report.starts_with("Vertex count: 34\n"));
	assert!(report.contains("Adjacency list:\n0 -> 1, 2, 3"));

	fs::write(&graph_path, s.export_load_text()).unwrap();
	let mut other = session();
	other.import_path(&graph_path).unwrap();
	assert_eq!(other.graph().edge_count(), 78);

	fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn unreadable_import_keeps_graph_and_reports_path() {
	let mut s = session();
	s.auto_update("a b");
	let err = s.import_path("/no/such/graph.txt").unwrap_err();
	assert!(matches!(err, GraphError::Io { .. }));
	assert!(s.last_error().is_some_and(|m| m.contains("/no/such/graph.txt")));
	assert!(s.graph().has_edge("a", "b"));
}

#[test]
fn views_follow_weight_mode() {
	let mut s = session();
	s.auto_update("a b 2\nb c");
	let views = s.views();
	assert_eq!(views.header, ["#", "a", "b", "c"]);
	assert_eq!(views.rows[0], ["a", "INF", "2", "INF"]);
	assert_eq!(views.adjacency[1], "b → a (2), c (1)");
	assert_eq!(views.density, "Density: 0.667 (dense)");

	s.set_options(false, false);
	let views = s.views();
	assert_eq!(views.rows[0], ["a", "0", "1", "0"]);
	assert_eq!(views.adjacency[1], "b → a, c");
}
