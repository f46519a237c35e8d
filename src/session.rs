//! The editing session behind the UI.
//!
//! A [`Session`] owns the one live [`GraphModel`] together with its layout, highlights and
//! gesture state. Every user action is a method here; each successful parse builds a new
//! graph value that replaces the previous one whole, and failed parses leave it untouched.

use std::path::Path;

use log::{debug, info, warn};

use crate::codec::{self, WEIGHTED_EDGE_DEFAULT};
use crate::config::{InteractionConfig, ViewConfig};
use crate::geometry::Point;
use crate::gesture::{GestureController, GestureOutcome, ScreenTransform, Target};
use crate::graph::{GraphError, GraphModel};
use crate::highlight::HighlightState;
use crate::layout::{ForceLayout, LayoutEngine, LayoutStore};
use crate::samples;
use crate::views::DerivedViews;

pub struct Session {
	graph: GraphModel,
	layout: LayoutStore,
	highlights: HighlightState,
	gesture: GestureController,
	engine: Box<dyn LayoutEngine>,
	view: ViewConfig,
	edit_text: String,
	last_error: Option<String>,
	redraw: bool,
}

impl Default for Session {
	fn default() -> Self {
		Self::new(
			Box::new(ForceLayout::default()),
			InteractionConfig::default(),
			ViewConfig::default(),
		)
	}
}

impl Session {
	pub fn new(
		engine: Box<dyn LayoutEngine>,
		interaction: InteractionConfig,
		view: ViewConfig,
	) -> Self {
		Self {
			graph: GraphModel::default(),
			layout: LayoutStore::new(),
			highlights: HighlightState::new(),
			gesture: GestureController::new(interaction),
			engine,
			view,
			edit_text: String::new(),
			last_error: None,
			redraw: true,
		}
	}

	pub fn graph(&self) -> &GraphModel {
		&self.graph
	}

	pub fn layout(&self) -> &LayoutStore {
		&self.layout
	}

	pub fn highlights(&self) -> &HighlightState {
		&self.highlights
	}

	pub fn gesture(&self) -> &GestureController {
		&self.gesture
	}

	pub fn view_config(&self) -> &ViewConfig {
		&self.view
	}

	pub fn edit_text(&self) -> &str {
		&self.edit_text
	}

	/// Message of the most recent failed action, cleared by the next success.
	pub fn last_error(&self) -> Option<&str> {
		self.last_error.as_deref()
	}

	pub fn is_directed(&self) -> bool {
		self.graph.is_directed()
	}

	pub fn is_weighted(&self) -> bool {
		self.graph.is_weighted()
	}

	pub fn views(&self) -> DerivedViews {
		DerivedViews::of(&self.graph, self.view.density_threshold)
	}

	/// Whether anything visible changed since the last call.
	pub fn take_redraw(&mut self) -> bool {
		std::mem::take(&mut self.redraw)
	}

	pub fn request_redraw(&mut self) {
		self.redraw = true;
	}

	/// Live edit: called on every change of the edit box. Detects the weight mode from the
	/// text; a parse failure is recorded and the current graph kept.
	pub fn auto_update(&mut self, text: &str) {
		self.edit_text = text.to_owned();
		let directed = self.graph.is_directed();
		if text.trim().is_empty() {
			let weighted = self.graph.is_weighted();
			self.replace_graph(GraphModel::new(directed, weighted));
			self.last_error = None;
			return;
		}
		match codec::parse_live(text) {
			Ok(parsed) => {
				self.replace_graph(parsed.into_graph(directed));
				self.last_error = None;
			}
			Err(err) => {
				warn!("edit text rejected: {err}");
				self.last_error = Some(err.to_string());
			}
		}
	}

	/// Explicit apply of the edit box under the current weight toggle.
	pub fn apply_edit_text(&mut self) -> Result<(), GraphError> {
		let result = codec::parse_strict(&self.edit_text, self.graph.is_weighted())
			.map_err(GraphError::from);
		let parsed = self.record(result)?;
		let graph = parsed.into_graph(self.graph.is_directed());
		info!(
			"applied edit text: {} vertices, {} edges",
			graph.vertex_count(),
			graph.edge_count()
		);
		self.replace_graph(graph);
		self.sync_edit_text();
		Ok(())
	}

	/// Change the mode toggles on the current graph.
	pub fn set_options(&mut self, directed: bool, weighted: bool) {
		if directed == self.graph.is_directed() && weighted == self.graph.is_weighted() {
			return;
		}
		info!("options: directed={directed} weighted={weighted}");
		self.graph.set_directed(directed);
		self.graph.set_weighted(weighted);
		self.highlights.retain_present(&self.graph);
		if !directed {
			self.highlights.merge_reversed();
		}
		self.sync_edit_text();
		self.redraw = true;
	}

	/// Replace the graph with the content of a load-format text.
	pub fn import_text(&mut self, text: &str) -> Result<(), GraphError> {
		let result = codec::read_graph(text).map_err(GraphError::from);
		let graph = self.record(result)?;
		self.install_import(graph);
		Ok(())
	}

	pub fn import_path(&mut self, path: impl AsRef<Path>) -> Result<(), GraphError> {
		let result = codec::read_graph_from_path(path);
		let graph = self.record(result)?;
		self.install_import(graph);
		Ok(())
	}

	/// Human-readable report of the current graph.
	pub fn export_report(&self) -> String {
		codec::export_report(&self.graph)
	}

	/// The current graph in the load format, ready to be imported again.
	pub fn export_load_text(&self) -> String {
		codec::to_load_text(&self.graph)
	}

	pub fn export_to_path(&mut self, path: impl AsRef<Path>) -> Result<(), GraphError> {
		let result = codec::export_report_to_path(&self.graph, path);
		self.record(result)
	}

	/// Load the karate club sample, honoring the directed toggle.
	pub fn load_sample(&mut self) {
		let graph = samples::karate_club(self.graph.is_directed());
		info!("loaded sample graph");
		self.replace_graph(graph);
		self.sync_edit_text();
		self.last_error = None;
	}

	pub fn add_vertex(&mut self, name: &str) -> Result<(), GraphError> {
		let name = name.trim();
		let result = if name.is_empty() {
			Err(GraphError::EmptyName)
		} else if name.contains(char::is_whitespace) {
			Err(GraphError::InvalidName(name.to_owned()))
		} else if self.graph.contains_vertex(name) {
			Err(GraphError::DuplicateVertex(name.to_owned()))
		} else {
			Ok(())
		};
		self.record(result)?;
		self.graph.add_vertex(name);
		info!("added vertex {name}");
		self.after_structural_edit();
		Ok(())
	}

	/// Remove a vertex, its edges and any highlight on them. Absent vertices are a no-op.
	pub fn remove_vertex(&mut self, name: &str) -> bool {
		let name = name.trim();
		if !self.graph.remove_vertex(name) {
			return false;
		}
		self.highlights.remove_vertex(name);
		info!("removed vertex {name}");
		self.after_structural_edit();
		true
	}

	/// Add an edge, creating missing endpoints. `weight_text` is read only for weighted
	/// graphs; left blank it means [`WEIGHTED_EDGE_DEFAULT`].
	pub fn add_edge(&mut self, u: &str, v: &str, weight_text: &str) -> Result<(), GraphError> {
		let (u, v) = (u.trim(), v.trim());
		let result = self.validate_edge(u, v, weight_text);
		let weight = self.record(result)?;
		self.graph.add_edge(u, v, weight);
		info!("added edge {u}-{v}");
		self.after_structural_edit();
		Ok(())
	}

	/// Remove an edge and its highlight. Absent edges are a no-op.
	pub fn remove_edge(&mut self, u: &str, v: &str) -> bool {
		let (u, v) = (u.trim(), v.trim());
		if !self.graph.remove_edge(u, v) {
			return false;
		}
		self.highlights.remove_edge(u, v, self.graph.is_directed());
		info!("removed edge {u}-{v}");
		self.after_structural_edit();
		true
	}

	/// Back to an empty undirected, unweighted graph.
	pub fn reset(&mut self) {
		self.graph = GraphModel::default();
		self.highlights.clear();
		self.gesture.cancel();
		self.layout.invalidate();
		self.edit_text.clear();
		self.last_error = None;
		self.redraw = true;
		info!("session reset");
	}

	pub fn clear_highlights(&mut self) {
		self.highlights.clear();
		self.redraw = true;
	}

	/// Replace the highlights with those named in the highlight fields.
	pub fn set_highlights_from_text(&mut self, vertex_text: &str, edge_text: &str) {
		self.highlights = HighlightState::parse_from_text(vertex_text, edge_text, &self.graph);
		self.redraw = true;
	}

	/// Highlight field contents as `(vertices, edges)`.
	pub fn highlight_texts(&self) -> (String, String) {
		(
			self.highlights.serialize_vertices(),
			self.highlights.serialize_edges(),
		)
	}

	pub fn pointer_down(&mut self, at: Point, transform: &dyn ScreenTransform) -> GestureOutcome {
		let outcome = self
			.gesture
			.pointer_down(at, &self.graph, &self.layout, transform);
		self.observe(outcome)
	}

	pub fn pointer_move(&mut self, at: Point, transform: &dyn ScreenTransform) -> GestureOutcome {
		let outcome = self.gesture.pointer_move(at, &mut self.layout, transform);
		self.observe(outcome)
	}

	pub fn pointer_up(&mut self) -> GestureOutcome {
		let outcome = self
			.gesture
			.pointer_up(&mut self.highlights, self.graph.is_directed());
		self.observe(outcome)
	}

	/// The pointer left the canvas mid-gesture.
	pub fn pointer_cancel(&mut self) {
		self.gesture.cancel();
	}

	fn observe(&mut self, outcome: GestureOutcome) -> GestureOutcome {
		match &outcome {
			GestureOutcome::Toggled {
				target: Target::Vertex(id),
				highlighted,
			} => debug!("vertex {id} highlighted: {highlighted}"),
			GestureOutcome::Toggled {
				target: Target::Edge(u, v),
				highlighted,
			} => debug!("edge {u}-{v} highlighted: {highlighted}"),
			GestureOutcome::DragEnded(id) => debug!("vertex {id} dropped"),
			_ => {}
		}
		if outcome.needs_redraw() {
			self.redraw = true;
		}
		outcome
	}

	fn validate_edge(&self, u: &str, v: &str, weight_text: &str) -> Result<f64, GraphError> {
		if u.is_empty() || v.is_empty() {
			return Err(GraphError::EmptyName);
		}
		if let Some(name) = [u, v].into_iter().find(|n| n.contains(char::is_whitespace)) {
			return Err(GraphError::InvalidName(name.to_owned()));
		}
		if !self.graph.is_weighted() {
			if self.graph.has_edge(u, v) {
				return Err(GraphError::DuplicateEdge {
					from: u.to_owned(),
					to: v.to_owned(),
				});
			}
			return Ok(1.0);
		}
		match weight_text.trim() {
			"" => Ok(WEIGHTED_EDGE_DEFAULT),
			text => text
				.parse::<f64>()
				.map_err(|_| GraphError::InvalidWeight(text.to_owned())),
		}
	}

	/// Store the outcome of a fallible action for display.
	fn record<T>(&mut self, result: Result<T, GraphError>) -> Result<T, GraphError> {
		match &result {
			Ok(_) => self.last_error = None,
			Err(err) => {
				warn!("{err}");
				self.last_error = Some(err.to_string());
			}
		}
		result
	}

	fn install_import(&mut self, graph: GraphModel) {
		info!(
			"imported graph: {} vertices, {} edges, directed={}",
			graph.vertex_count(),
			graph.edge_count(),
			graph.is_directed()
		);
		self.replace_graph(graph);
		self.sync_edit_text();
	}

	fn replace_graph(&mut self, graph: GraphModel) {
		self.graph = graph;
		self.gesture.cancel();
		self.highlights.retain_present(&self.graph);
		self.layout.sync(&self.graph, self.engine.as_mut());
		self.redraw = true;
	}

	fn after_structural_edit(&mut self) {
		self.layout.sync(&self.graph, self.engine.as_mut());
		self.sync_edit_text();
		self.redraw = true;
	}

	fn sync_edit_text(&mut self) {
		self.edit_text = codec::to_edit_text(&self.graph);
	}
}
