use std::cell::RefCell;
use std::rc::Rc;

use leptos::html::Canvas;
use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::render;
use super::state::CanvasState;
use crate::components::SessionContext;
use crate::geometry::Point;
use crate::gesture::GestureOutcome;

/// Pointer position relative to the canvas's top-left corner.
fn local_point(canvas_ref: NodeRef<Canvas>, ev: &MouseEvent) -> Option<Point> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some(Point::new(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

/// Interactive drawing of the session's graph: click to highlight, drag to move, wheel to zoom.
#[component]
pub fn GraphCanvas(
	session: SessionContext,
	#[prop(default = None)] width: Option<f64>,
	#[prop(default = None)] height: Option<f64>,
) -> impl IntoView {
	let canvas_ref = NodeRef::<Canvas>::new();
	let state: Rc<RefCell<Option<CanvasState>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (state_init, animate_init, resize_cb_init) =
		(state.clone(), animate.clone(), resize_cb.clone());

	let measure = move |canvas: &HtmlCanvasElement| {
		let parent = canvas.parent_element();
		(
			width.unwrap_or_else(|| {
				parent
					.as_ref()
					.map(|p| p.client_width() as f64)
					.unwrap_or(800.0)
			}),
			height.unwrap_or_else(|| {
				parent
					.as_ref()
					.map(|p| p.client_height() as f64)
					.unwrap_or(600.0)
			}),
		)
	};

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			return;
		};
		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			warn!("canvas 2d context unavailable");
			return;
		};

		let (w, h) = measure(&canvas);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);
		*state_init.borrow_mut() = Some(CanvasState::new(w, h));

		let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let (nw, nh) = measure(&canvas_resize);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut s) = *state_resize.borrow_mut() {
				s.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut view) = *state_anim.borrow_mut() {
				session.update_quiet(|s| {
					view.fit_to(s.layout(), s.view_config().margin);
					let changed = s.take_redraw();
					let moved = view.take_dirty();
					if changed || moved {
						render::render(s, view, &ctx);
					}
				});
			}
			if let (Some(cb), Some(win)) = (&*animate_inner.borrow(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some(at) = local_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref view) = *state_md.borrow() {
			session.update_quiet(|s| s.pointer_down(at, &view.transform));
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some(at) = local_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref view) = *state_mm.borrow() {
			session.update_quiet(|s| s.pointer_move(at, &view.transform));
		}
	};

	let on_mouseup = move |_: MouseEvent| {
		let outcome = session.update_quiet(|s| s.pointer_up());
		// the highlight fields show the toggle
		if matches!(outcome, Some(GestureOutcome::Toggled { .. })) {
			session.touch();
		}
	};

	let on_mouseleave = move |_: MouseEvent| {
		session.update_quiet(|s| {
			s.pointer_cancel();
			s.request_redraw();
		});
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some(at) = local_point(canvas_ref, &ev) else {
			return;
		};
		if let Some(ref mut view) = *state_wh.borrow_mut() {
			view.zoom(at, ev.delta_y());
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="graph-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: block; cursor: pointer;"
		/>
	}
}
