use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::CanvasState;
use crate::codec::display_weight;
use crate::geometry::Point;
use crate::gesture::ScreenTransform;
use crate::session::Session;

const BACKGROUND: &str = "#1a1a2e";
const VERTEX_FILL: &str = "#1f77b4";
const HIGHLIGHT: &str = "#ff7f0e";
const EDGE: &str = "rgba(100, 180, 255, 0.7)";
const LABEL: &str = "white";

/// Paint the session's graph in screen space so strokes and hit radii stay constant in pixels.
pub fn render(session: &Session, view: &CanvasState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, view.width, view.height);
	draw_edges(session, view, ctx);
	draw_vertices(session, view, ctx);
}

fn draw_edges(session: &Session, view: &CanvasState, ctx: &CanvasRenderingContext2d) {
	let graph = session.graph();
	let (directed, weighted) = (graph.is_directed(), graph.is_weighted());
	let radius = session.view_config().vertex_radius;
	let dragged = session.gesture().dragged_vertex();
	let arrow_size = 10.0;

	for (u, v, w) in graph.edges() {
		let (Some(a), Some(b)) = (session.layout().position(u), session.layout().position(v))
		else {
			continue;
		};
		let (a, b) = (view.transform.to_screen(a), view.transform.to_screen(b));
		let highlighted = session.highlights().is_edge_highlighted(u, v, directed);
		let color = if highlighted { HIGHLIGHT } else { EDGE };

		ctx.set_stroke_style_str(color);
		ctx.set_fill_style_str(color);
		ctx.set_line_width(if highlighted { 3.5 } else { 1.5 });
		// edges follow a dragged vertex with a dashed stroke
		if dragged.is_some_and(|id| id == u || id == v) {
			let _ = ctx.set_line_dash(&js_sys::Array::of2(
				&JsValue::from_f64(6.0),
				&JsValue::from_f64(4.0),
			));
		}

		let d = b - a;
		let dist = d.x.hypot(d.y);
		if dist < 0.001 {
			draw_self_loop(ctx, a, radius);
			let _ = ctx.set_line_dash(&js_sys::Array::new());
			if weighted {
				draw_label(ctx, &display_weight(w), a - Point::new(0.0, radius * 2.6));
			}
			continue;
		}

		let (ux, uy) = (d.x / dist, d.y / dist);
		let head = if directed { arrow_size } else { 0.0 };
		ctx.begin_path();
		ctx.move_to(a.x + ux * radius, a.y + uy * radius);
		ctx.line_to(b.x - ux * (radius + head), b.y - uy * (radius + head));
		ctx.stroke();
		let _ = ctx.set_line_dash(&js_sys::Array::new());

		if directed {
			let tip = Point::new(b.x - ux * radius, b.y - uy * radius);
			let back = Point::new(tip.x - ux * arrow_size, tip.y - uy * arrow_size);
			let (px, py) = (-uy * arrow_size * 0.5, ux * arrow_size * 0.5);
			ctx.begin_path();
			ctx.move_to(tip.x, tip.y);
			ctx.line_to(back.x + px, back.y + py);
			ctx.line_to(back.x - px, back.y - py);
			ctx.close_path();
			ctx.fill();
		}

		if weighted {
			// offset the label off the line, on its left-hand side
			let mid = a.midpoint(b) + Point::new(uy * 10.0, -ux * 10.0);
			draw_label(ctx, &display_weight(w), mid);
		}
	}
}

fn draw_self_loop(ctx: &CanvasRenderingContext2d, at: Point, radius: f64) {
	ctx.begin_path();
	let _ = ctx.arc(at.x, at.y - radius * 1.4, radius * 0.8, 0.0, 2.0 * PI);
	ctx.stroke();
}

fn draw_label(ctx: &CanvasRenderingContext2d, text: &str, at: Point) {
	ctx.set_fill_style_str(LABEL);
	ctx.set_font("11px sans-serif");
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	let _ = ctx.fill_text(text, at.x, at.y);
}

fn draw_vertices(session: &Session, view: &CanvasState, ctx: &CanvasRenderingContext2d) {
	let radius = session.view_config().vertex_radius;
	for id in session.graph().vertices() {
		let Some(pos) = session.layout().position(id) else {
			continue;
		};
		let at = view.transform.to_screen(pos);
		let highlighted = session.highlights().is_vertex_highlighted(id);

		ctx.begin_path();
		let _ = ctx.arc(at.x, at.y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(VERTEX_FILL);
		ctx.fill();
		if highlighted {
			ctx.set_stroke_style_str(HIGHLIGHT);
			ctx.set_line_width(4.0);
			ctx.stroke();
		}

		ctx.set_fill_style_str(LABEL);
		ctx.set_font("bold 12px sans-serif");
		ctx.set_text_align("center");
		ctx.set_text_baseline("middle");
		let _ = ctx.fill_text(id, at.x, at.y);
	}
}
