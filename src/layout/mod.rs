//! Vertex positions in data space and the engine that assigns them.

mod force;
mod store;

use std::collections::HashMap;

pub use force::ForceLayout;
pub use store::LayoutStore;

use crate::geometry::Point;
use crate::graph::VertexId;

/// Assigns a data-space position to every vertex.
///
/// Only called when the vertex set changes; the result replaces every stored position.
pub trait LayoutEngine {
	fn compute(&mut self, vertices: &[&str], edges: &[(&str, &str)]) -> HashMap<VertexId, Point>;
}
