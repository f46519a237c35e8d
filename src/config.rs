//! Tunables for interaction, layout and the side views.

use force_graph::SimulationParameters;

use crate::graph::DEFAULT_DENSITY_THRESHOLD;

/// Pointer thresholds, all in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InteractionConfig {
	/// A press within this distance of a vertex grabs it.
	pub vertex_hit_radius: f64,
	/// A press within this distance of an edge segment targets it.
	pub edge_hit_radius: f64,
	/// Squared pointer travel that turns a press on a vertex into a drag.
	pub drag_threshold_sq: f64,
	/// Squared travel a vertex press may wobble and still release as a click.
	pub click_slop_sq: f64,
}

impl Default for InteractionConfig {
	fn default() -> Self {
		Self {
			vertex_hit_radius: 20.0,
			edge_hit_radius: 10.0,
			drag_threshold_sq: 25.0,
			click_slop_sq: 1.0,
		}
	}
}

/// Force simulation settings used when the vertex set changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
	pub iterations: usize,
	pub step: f32,
	/// Radius of the circle the simulation is seeded on.
	pub spread: f32,
	pub force_charge: f32,
	pub force_spring: f32,
	pub force_max: f32,
	pub node_speed: f32,
	pub damping_factor: f32,
	pub mass: f32,
}

impl Default for LayoutConfig {
	fn default() -> Self {
		Self {
			iterations: 300,
			step: 0.016,
			spread: 100.0,
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
			mass: 10.0,
		}
	}
}

impl LayoutConfig {
	pub fn parameters(&self) -> SimulationParameters {
		SimulationParameters {
			force_charge: self.force_charge,
			force_spring: self.force_spring,
			force_max: self.force_max,
			node_speed: self.node_speed,
			damping_factor: self.damping_factor,
		}
	}
}

/// Drawing and summary settings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewConfig {
	pub density_threshold: f64,
	/// Vertex disc radius in pixels.
	pub vertex_radius: f64,
	/// Pixels kept free around the graph when fitting it to the canvas.
	pub margin: f64,
}

impl Default for ViewConfig {
	fn default() -> Self {
		Self {
			density_threshold: DEFAULT_DENSITY_THRESHOLD,
			vertex_radius: 14.0,
			margin: 40.0,
		}
	}
}
