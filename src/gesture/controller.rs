use super::hit::{pick_edge, pick_vertex};
use super::transform::ScreenTransform;
use crate::config::InteractionConfig;
use crate::geometry::Point;
use crate::graph::{GraphModel, VertexId};
use crate::highlight::HighlightState;
use crate::layout::LayoutStore;

/// What a press landed on.
#[derive(Clone, Debug, PartialEq)]
pub enum Target {
	Vertex(VertexId),
	Edge(VertexId, VertexId),
}

/// Pointer gesture in progress.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum GestureState {
	#[default]
	Idle,
	/// Pressed on an edge; releasing toggles its highlight.
	PendingEdge { u: VertexId, v: VertexId },
	/// Pressed on a vertex, pointer still within the drag threshold of `origin`.
	/// `nudged` records motion past the click slop, which turns the release into a no-op.
	PotentialDrag {
		vertex: VertexId,
		grab_offset: Point,
		origin: Point,
		nudged: bool,
	},
	/// Threshold crossed; every move repositions the vertex until release.
	Dragging { vertex: VertexId, grab_offset: Point },
}

/// Effect of one pointer event.
#[derive(Clone, Debug, PartialEq)]
pub enum GestureOutcome {
	/// Nothing changed.
	Ignored,
	/// A vertex or edge was pressed.
	Pressed(Target),
	/// A dragged vertex moved to a new data-space position.
	Moved { vertex: VertexId, to: Point },
	/// A click flipped a highlight.
	Toggled { target: Target, highlighted: bool },
	/// A drag finished.
	DragEnded(VertexId),
	/// A press on a vertex was released without clicking or dragging.
	Released,
}

impl GestureOutcome {
	pub fn needs_redraw(&self) -> bool {
		matches!(
			self,
			GestureOutcome::Moved { .. }
				| GestureOutcome::Toggled { .. }
				| GestureOutcome::DragEnded(_)
		)
	}
}

/// Tells clicks (toggle a highlight) from drags (move a vertex) using a screen-space travel
/// threshold, and hit-tests presses against vertices before edges.
#[derive(Clone, Debug, Default)]
pub struct GestureController {
	config: InteractionConfig,
	state: GestureState,
}

impl GestureController {
	pub fn new(config: InteractionConfig) -> Self {
		Self {
			config,
			state: GestureState::Idle,
		}
	}

	pub fn state(&self) -> &GestureState {
		&self.state
	}

	pub fn config(&self) -> &InteractionConfig {
		&self.config
	}

	/// Vertex currently being dragged, past the threshold.
	pub fn dragged_vertex(&self) -> Option<&str> {
		match &self.state {
			GestureState::Dragging { vertex, .. } => Some(vertex),
			_ => None,
		}
	}

	pub fn pointer_down(
		&mut self,
		at: Point,
		graph: &GraphModel,
		layout: &LayoutStore,
		transform: &dyn ScreenTransform,
	) -> GestureOutcome {
		if !at.is_finite() {
			return GestureOutcome::Ignored;
		}
		self.state = GestureState::Idle;

		if let Some((vertex, _)) =
			pick_vertex(graph, layout, transform, at, self.config.vertex_hit_radius)
		{
			let Some(pos) = layout.position(&vertex) else {
				return GestureOutcome::Ignored;
			};
			self.state = GestureState::PotentialDrag {
				vertex: vertex.clone(),
				grab_offset: pos - transform.to_data(at),
				origin: at,
				nudged: false,
			};
			return GestureOutcome::Pressed(Target::Vertex(vertex));
		}

		if let Some(((u, v), _)) = pick_edge(graph, layout, transform, at, self.config.edge_hit_radius)
		{
			self.state = GestureState::PendingEdge {
				u: u.clone(),
				v: v.clone(),
			};
			return GestureOutcome::Pressed(Target::Edge(u, v));
		}

		GestureOutcome::Ignored
	}

	pub fn pointer_move(
		&mut self,
		at: Point,
		layout: &mut LayoutStore,
		transform: &dyn ScreenTransform,
	) -> GestureOutcome {
		if !at.is_finite() {
			return GestureOutcome::Ignored;
		}

		if let GestureState::PotentialDrag {
			vertex,
			grab_offset,
			origin,
			nudged,
		} = &mut self.state
		{
			let travel = at.distance_sq(*origin);
			if travel <= self.config.drag_threshold_sq {
				*nudged |= travel > self.config.click_slop_sq;
				return GestureOutcome::Ignored;
			}
			let vertex = std::mem::take(vertex);
			let grab_offset = *grab_offset;
			self.state = GestureState::Dragging {
				vertex,
				grab_offset,
			};
		}

		let GestureState::Dragging {
			vertex,
			grab_offset,
		} = &self.state
		else {
			return GestureOutcome::Ignored;
		};
		let to = transform.to_data(at) + *grab_offset;
		if layout.set_position(vertex, to) {
			GestureOutcome::Moved {
				vertex: vertex.clone(),
				to,
			}
		} else {
			GestureOutcome::Ignored
		}
	}

	/// Finish the gesture. Always returns to idle.
	pub fn pointer_up(&mut self, highlights: &mut HighlightState, directed: bool) -> GestureOutcome {
		match std::mem::take(&mut self.state) {
			GestureState::Idle => GestureOutcome::Ignored,
			GestureState::PendingEdge { u, v } => {
				let highlighted = highlights.toggle_edge(&u, &v, directed);
				GestureOutcome::Toggled {
					target: Target::Edge(u, v),
					highlighted,
				}
			}
			GestureState::PotentialDrag {
				vertex,
				nudged: false,
				..
			} => {
				let highlighted = highlights.toggle_vertex(&vertex);
				GestureOutcome::Toggled {
					target: Target::Vertex(vertex),
					highlighted,
				}
			}
			GestureState::PotentialDrag { .. } => GestureOutcome::Released,
			GestureState::Dragging { vertex, .. } => GestureOutcome::DragEnded(vertex),
		}
	}

	/// Abandon the gesture without a toggle; a dragged vertex stays where it was last put.
	pub fn cancel(&mut self) {
		self.state = GestureState::Idle;
	}
}
