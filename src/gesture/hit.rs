//! Screen-space picking. Radii are in pixels so the clickable area is independent of zoom.

use super::transform::ScreenTransform;
use crate::geometry::{Point, seg_distance_sq};
use crate::graph::{GraphModel, VertexId};
use crate::layout::LayoutStore;

/// Nearest vertex within `radius` pixels of `at`, with its pixel distance.
pub fn pick_vertex(
	graph: &GraphModel,
	layout: &LayoutStore,
	transform: &dyn ScreenTransform,
	at: Point,
	radius: f64,
) -> Option<(VertexId, f64)> {
	let radius_sq = radius * radius;
	let mut best: Option<(&str, f64)> = None;
	for id in graph.vertices() {
		let Some(pos) = layout.position(id) else {
			continue;
		};
		let d2 = transform.to_screen(pos).distance_sq(at);
		if d2 <= radius_sq && best.is_none_or(|(_, bd2)| d2 < bd2) {
			best = Some((id, d2));
		}
	}
	best.map(|(id, d2)| (id.to_owned(), d2.sqrt()))
}

/// Nearest edge segment within `radius` pixels of `at`, with its pixel distance.
/// Degenerate (near zero-length on screen) segments are skipped.
pub fn pick_edge(
	graph: &GraphModel,
	layout: &LayoutStore,
	transform: &dyn ScreenTransform,
	at: Point,
	radius: f64,
) -> Option<((VertexId, VertexId), f64)> {
	let radius_sq = radius * radius;
	let mut best: Option<((&str, &str), f64)> = None;
	for (u, v, _) in graph.edges() {
		let (Some(a), Some(b)) = (layout.position(u), layout.position(v)) else {
			continue;
		};
		let Some((d2, _)) = seg_distance_sq(at, transform.to_screen(a), transform.to_screen(b))
		else {
			continue;
		};
		if d2 <= radius_sq && best.is_none_or(|(_, bd2)| d2 < bd2) {
			best = Some(((u, v), d2));
		}
	}
	best.map(|((u, v), d2)| ((u.to_owned(), v.to_owned()), d2.sqrt()))
}
