use crate::geometry::Point;

/// Mapping between data space (where layout positions live) and screen pixels.
///
/// Must be the same mapping the renderer draws with, and stable for the duration of a frame.
pub trait ScreenTransform {
	fn to_screen(&self, p: Point) -> Point;
	fn to_data(&self, p: Point) -> Point;
}

/// Uniform scale `k` followed by a pixel translation: `screen = data * k + (x, y)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self {
			x: 0.0,
			y: 0.0,
			k: 1.0,
		}
	}
}

impl ViewTransform {
	pub const MIN_ZOOM: f64 = 0.05;
	pub const MAX_ZOOM: f64 = 50.0;

	/// Center the data-space box `bounds` in a `width`×`height` canvas, leaving `margin`
	/// pixels on each side.
	pub fn fit(bounds: (Point, Point), width: f64, height: f64, margin: f64) -> Self {
		let (lo, hi) = bounds;
		let (span_x, span_y) = (hi.x - lo.x, hi.y - lo.y);
		let (room_x, room_y) = ((width - 2.0 * margin).max(1.0), (height - 2.0 * margin).max(1.0));
		let k = match (span_x > f64::EPSILON, span_y > f64::EPSILON) {
			(true, true) => (room_x / span_x).min(room_y / span_y),
			(true, false) => room_x / span_x,
			(false, true) => room_y / span_y,
			(false, false) => 1.0,
		}
		.clamp(Self::MIN_ZOOM, Self::MAX_ZOOM);
		let center = lo.midpoint(hi);
		Self {
			x: width / 2.0 - center.x * k,
			y: height / 2.0 - center.y * k,
			k,
		}
	}

	/// Multiply the zoom by `factor`, keeping the screen point `anchor` fixed.
	pub fn zoom_at(&mut self, anchor: Point, factor: f64) {
		let new_k = (self.k * factor).clamp(Self::MIN_ZOOM, Self::MAX_ZOOM);
		let ratio = new_k / self.k;
		self.x = anchor.x - (anchor.x - self.x) * ratio;
		self.y = anchor.y - (anchor.y - self.y) * ratio;
		self.k = new_k;
	}
}

impl ScreenTransform for ViewTransform {
	fn to_screen(&self, p: Point) -> Point {
		Point::new(p.x * self.k + self.x, p.y * self.k + self.y)
	}

	fn to_data(&self, p: Point) -> Point {
		Point::new((p.x - self.x) / self.k, (p.y - self.y) / self.k)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn screen_and_data_are_inverse() {
		let t = ViewTransform {
			x: 30.0,
			y: -12.0,
			k: 2.5,
		};
		let p = Point::new(4.0, 8.0);
		assert_eq!(t.to_data(t.to_screen(p)), p);
	}

	#[test]
	fn fit_centers_the_bounds() {
		let t = ViewTransform::fit(
			(Point::new(-1.0, -1.0), Point::new(1.0, 1.0)),
			200.0,
			100.0,
			10.0,
		);
		assert_eq!(t.k, 40.0);
		assert_eq!(t.to_screen(Point::new(0.0, 0.0)), Point::new(100.0, 50.0));
	}

	#[test]
	fn zoom_keeps_anchor_fixed() {
		let mut t = ViewTransform::default();
		let anchor = Point::new(50.0, 50.0);
		let before = t.to_data(anchor);
		t.zoom_at(anchor, 2.0);
		assert_eq!(t.to_data(anchor), before);
		assert_eq!(t.k, 2.0);
	}
}
