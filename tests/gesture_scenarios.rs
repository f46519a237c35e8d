use std::collections::HashMap;

use graph_sketch::config::InteractionConfig;
use graph_sketch::geometry::Point;
use graph_sketch::gesture::{
	GestureController, GestureOutcome, ScreenTransform, Target, ViewTransform, pick_edge,
	pick_vertex,
};
use graph_sketch::graph::{GraphModel, VertexId};
use graph_sketch::highlight::HighlightState;
use graph_sketch::layout::{LayoutEngine, LayoutStore};

struct Pinned(HashMap<VertexId, Point>);

impl LayoutEngine for Pinned {
	fn compute(&mut self, _: &[&str], _: &[(&str, &str)]) -> HashMap<VertexId, Point> {
		self.0.clone()
	}
}

struct Scene {
	graph: GraphModel,
	layout: LayoutStore,
	highlights: HighlightState,
	transform: ViewTransform,
	gesture: GestureController,
}

impl Scene {
	fn new(edges: &[(&str, &str)], positions: &[(&str, f64, f64)], transform: ViewTransform) -> Self {
		let mut graph = GraphModel::new(false, false);
		graph.load_from_edges(
			positions.iter().map(|(id, _, _)| *id),
			edges.iter().map(|(u, v)| (*u, *v, None)),
		);
		let mut layout = LayoutStore::new();
		let pinned = positions
			.iter()
			.map(|(id, x, y)| ((*id).to_owned(), Point::new(*x, *y)))
			.collect();
		layout.sync(&graph, &mut Pinned(pinned));
		Self {
			graph,
			layout,
			highlights: HighlightState::new(),
			transform,
			gesture: GestureController::new(InteractionConfig::default()),
		}
	}

	/// Two vertices 100 data units apart, drawn at twice the size with an offset.
	fn pair() -> Self {
		Self::new(
			&[("A", "B")],
			&[("A", 0.0, 0.0), ("B", 100.0, 0.0)],
			ViewTransform {
				x: 50.0,
				y: 80.0,
				k: 2.0,
			},
		)
	}

	fn screen_of(&self, id: &str) -> Point {
		self.transform.to_screen(self.layout.position(id).unwrap())
	}

	fn down(&mut self, at: Point) -> GestureOutcome {
		self.gesture
			.pointer_down(at, &self.graph, &self.layout, &self.transform)
	}

	fn drag(&mut self, at: Point) -> GestureOutcome {
		self.gesture
			.pointer_move(at, &mut self.layout, &self.transform)
	}

	fn up(&mut self) -> GestureOutcome {
		self.gesture
			.pointer_up(&mut self.highlights, self.graph.is_directed())
	}
}

#[test]
fn small_wobble_neither_moves_nor_toggles() {
	let mut scene = Scene::pair();
	let start = scene.screen_of("A");

	scene.down(start);
	assert_eq!(scene.drag(start + Point::new(3.0, 0.0)), GestureOutcome::Ignored);
	scene.up();

	assert_eq!(scene.layout.position("A"), Some(Point::new(0.0, 0.0)));
	assert!(scene.highlights.is_empty());
}

#[test]
fn crossing_the_threshold_moves_without_toggling() {
	let mut scene = Scene::pair();
	let start = scene.screen_of("A");

	scene.down(start);
	let moved = scene.drag(start + Point::new(8.0, 0.0));
	assert_eq!(
		moved,
		GestureOutcome::Moved {
			vertex: "A".into(),
			to: Point::new(4.0, 0.0)
		}
	);
	assert_eq!(scene.up(), GestureOutcome::DragEnded("A".into()));

	assert_eq!(scene.layout.position("A"), Some(Point::new(4.0, 0.0)));
	assert!(scene.highlights.is_empty());
}

#[test]
fn still_click_on_vertex_toggles_twice() {
	let mut scene = Scene::pair();
	let at = scene.screen_of("B") + Point::new(0.0, 12.0);

	scene.down(at);
	assert!(matches!(scene.up(), GestureOutcome::Toggled { highlighted: true, .. }));
	assert!(scene.highlights.is_vertex_highlighted("B"));

	scene.down(at);
	scene.up();
	assert!(scene.highlights.is_empty());
}

#[test]
fn click_near_edge_midpoint_toggles_edge() {
	let mut scene = Scene::pair();
	let mid = scene.screen_of("A").midpoint(scene.screen_of("B"));
	let at = mid + Point::new(0.0, 5.0);

	assert_eq!(
		scene.down(at),
		GestureOutcome::Pressed(Target::Edge("A".into(), "B".into()))
	);
	assert_eq!(
		scene.up(),
		GestureOutcome::Toggled {
			target: Target::Edge("A".into(), "B".into()),
			highlighted: true
		}
	);
	assert!(scene.highlights.is_edge_highlighted("B", "A", false));

	scene.down(at);
	scene.up();
	assert!(scene.highlights.is_empty());
}

#[test]
fn motion_after_edge_press_still_toggles() {
	let mut scene = Scene::pair();
	let mid = scene.screen_of("A").midpoint(scene.screen_of("B"));
	scene.down(mid);
	assert_eq!(scene.drag(mid + Point::new(30.0, 0.0)), GestureOutcome::Ignored);
	scene.up();
	assert!(scene.highlights.is_edge_highlighted("A", "B", false));
	assert_eq!(scene.layout.position("A"), Some(Point::new(0.0, 0.0)));
}

#[test]
fn miss_everything() {
	let mut scene = Scene::pair();
	let mid = scene.screen_of("A").midpoint(scene.screen_of("B"));
	assert_eq!(scene.down(mid + Point::new(0.0, 11.0)), GestureOutcome::Ignored);
	assert_eq!(scene.up(), GestureOutcome::Ignored);
	assert!(scene.highlights.is_empty());
}

#[test]
fn nearest_vertex_wins() {
	let scene = Scene::new(
		&[],
		&[("A", 0.0, 0.0), ("B", 30.0, 0.0)],
		ViewTransform::default(),
	);
	let hit = pick_vertex(
		&scene.graph,
		&scene.layout,
		&scene.transform,
		Point::new(16.0, 0.0),
		20.0,
	);
	assert_eq!(hit, Some(("B".to_owned(), 14.0)));
}

#[test]
fn hit_radius_is_in_pixels_at_any_zoom() {
	let mut scene = Scene::pair();
	scene.transform = ViewTransform {
		x: 0.0,
		y: 0.0,
		k: 10.0,
	};
	let a = scene.screen_of("A");
	let graph = &scene.graph;
	let layout = &scene.layout;
	let near = pick_vertex(graph, layout, &scene.transform, a + Point::new(15.0, 0.0), 20.0);
	let far = pick_vertex(graph, layout, &scene.transform, a + Point::new(25.0, 0.0), 20.0);
	assert!(near.is_some());
	assert!(far.is_none());
}

#[test]
fn zero_length_edges_are_not_pickable() {
	let scene = Scene::new(
		&[("A", "B")],
		&[("A", 5.0, 5.0), ("B", 5.0, 5.0)],
		ViewTransform::default(),
	);
	let hit = pick_edge(
		&scene.graph,
		&scene.layout,
		&scene.transform,
		Point::new(5.0, 6.0),
		10.0,
	);
	assert_eq!(hit, None);
}

#[test]
fn edge_projection_is_clamped_to_the_segment() {
	let scene = Scene::pair();
	let b = scene.screen_of("B");
	// beyond B along the line: distance is to the endpoint, not the infinite line
	let hit = pick_edge(
		&scene.graph,
		&scene.layout,
		&scene.transform,
		b + Point::new(12.0, 0.0),
		10.0,
	);
	assert_eq!(hit, None);
}

#[test]
fn vertex_press_beats_overlapping_edge() {
	let mut scene = Scene::pair();
	let at = scene.screen_of("A") + Point::new(6.0, 0.0);
	assert_eq!(
		scene.down(at),
		GestureOutcome::Pressed(Target::Vertex("A".into()))
	);
}
