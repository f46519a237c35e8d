use crate::geometry::Point;
use crate::gesture::ViewTransform;
use crate::layout::LayoutStore;

/// Per-canvas camera and size. The graph itself lives in the session.
#[derive(Clone, Debug)]
pub struct CanvasState {
	pub transform: ViewTransform,
	pub width: f64,
	pub height: f64,
	fitted_generation: Option<u64>,
	dirty: bool,
}

impl CanvasState {
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			width,
			height,
			fitted_generation: None,
			dirty: true,
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.fitted_generation = None;
		self.dirty = true;
	}

	/// Frame the whole layout once per layout computation; drags and zoom stick until the
	/// next one.
	pub fn fit_to(&mut self, layout: &LayoutStore, margin: f64) {
		let generation = layout.generation();
		if self.fitted_generation == Some(generation) {
			return;
		}
		self.fitted_generation = Some(generation);
		if let Some(bounds) = layout.bounds() {
			self.transform = ViewTransform::fit(bounds, self.width, self.height, margin);
		}
		self.dirty = true;
	}

	pub fn zoom(&mut self, anchor: Point, delta_y: f64) {
		let factor = if delta_y > 0.0 { 0.9 } else { 1.1 };
		self.transform.zoom_at(anchor, factor);
		self.dirty = true;
	}

	pub fn take_dirty(&mut self) -> bool {
		std::mem::take(&mut self.dirty)
	}
}
