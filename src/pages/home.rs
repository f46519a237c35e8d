use leptos::prelude::*;

use crate::components::{EditorPanel, GraphCanvas, SessionContext};
use crate::session::Session;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let mut initial = Session::default();
	initial.load_sample();
	let session = SessionContext::new(initial);

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="workspace">
				<div class="canvas-pane">
					<GraphCanvas session=session />
					<div class="graph-overlay">
						<h1>"Graph Sketch"</h1>
						<p class="subtitle">
							"Click a vertex or edge to highlight it. Drag a vertex to move it. Scroll to zoom."
						</p>
					</div>
				</div>
				<EditorPanel session=session />
			</div>
		</ErrorBoundary>
	}
}
