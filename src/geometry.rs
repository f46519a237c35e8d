//! Small 2D helpers shared by the layout store and the gesture engine.

use std::ops::{Add, Sub};

/// Segments shorter than this (squared, in the space they are measured in) are skipped by
/// point-to-segment tests.
pub const EPS_SEG_LEN_SQ: f64 = 1e-6;

/// A point or offset in either data space or screen space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn distance_sq(self, other: Point) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		dx * dx + dy * dy
	}

	pub fn distance(self, other: Point) -> f64 {
		self.distance_sq(other).sqrt()
	}

	pub fn is_finite(self) -> bool {
		self.x.is_finite() && self.y.is_finite()
	}

	pub fn midpoint(self, other: Point) -> Point {
		Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
	}
}

impl Add for Point {
	type Output = Point;

	fn add(self, rhs: Point) -> Point {
		Point::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl Sub for Point {
	type Output = Point;

	fn sub(self, rhs: Point) -> Point {
		Point::new(self.x - rhs.x, self.y - rhs.y)
	}
}

/// Squared distance from `p` to the segment `a..b` and the clamped projection parameter.
///
/// Returns `None` for degenerate segments.
pub fn seg_distance_sq(p: Point, a: Point, b: Point) -> Option<(f64, f64)> {
	let (vx, vy) = (b.x - a.x, b.y - a.y);
	let vv = vx * vx + vy * vy;
	if vv < EPS_SEG_LEN_SQ {
		return None;
	}
	let t = (((p.x - a.x) * vx + (p.y - a.y) * vy) / vv).clamp(0.0, 1.0);
	let proj = Point::new(a.x + t * vx, a.y + t * vy);
	Some((p.distance_sq(proj), t))
}
