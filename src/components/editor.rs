use leptos::ev::{Event, MouseEvent};
use leptos::prelude::*;

use super::SessionContext;

/// Edge-list editor, mode toggles, vertex/edge forms, highlight fields and derived views.
#[component]
pub fn EditorPanel(session: SessionContext) -> impl IntoView {
	let vertex_name = RwSignal::new(String::new());
	let edge_from = RwSignal::new(String::new());
	let edge_to = RwSignal::new(String::new());
	let edge_weight = RwSignal::new(String::new());
	let import_text = RwSignal::new(String::new());
	let exported = RwSignal::new(String::new());

	let on_edit = move |ev: Event| {
		let text = event_target_value(&ev);
		session.update(|s| s.auto_update(&text));
	};

	let on_directed = move |ev: Event| {
		let directed = event_target_checked(&ev);
		session.update(|s| s.set_options(directed, s.is_weighted()));
	};

	let on_weighted = move |ev: Event| {
		let weighted = event_target_checked(&ev);
		session.update(|s| s.set_options(s.is_directed(), weighted));
	};

	let add_vertex = move |_: MouseEvent| {
		let name = vertex_name.get_untracked();
		if let Some(Ok(())) = session.update(|s| s.add_vertex(&name)) {
			vertex_name.set(String::new());
		}
	};

	let remove_vertex = move |_: MouseEvent| {
		let name = vertex_name.get_untracked();
		session.update(|s| s.remove_vertex(&name));
	};

	let add_edge = move |_: MouseEvent| {
		let (u, v, w) = (
			edge_from.get_untracked(),
			edge_to.get_untracked(),
			edge_weight.get_untracked(),
		);
		let _ = session.update(|s| s.add_edge(&u, &v, &w));
	};

	let remove_edge = move |_: MouseEvent| {
		let (u, v) = (edge_from.get_untracked(), edge_to.get_untracked());
		session.update(|s| s.remove_edge(&u, &v));
	};

	let on_highlight_vertices = move |ev: Event| {
		let text = event_target_value(&ev);
		session.update(|s| {
			let (_, edges) = s.highlight_texts();
			s.set_highlights_from_text(&text, &edges);
		});
	};

	let on_highlight_edges = move |ev: Event| {
		let text = event_target_value(&ev);
		session.update(|s| {
			let (vertices, _) = s.highlight_texts();
			s.set_highlights_from_text(&vertices, &text);
		});
	};

	let import = move |_: MouseEvent| {
		let text = import_text.get_untracked();
		if let Some(Ok(())) = session.update(|s| s.import_text(&text)) {
			import_text.set(String::new());
		}
	};

	let derived = move || {
		session.read(|s| {
			let views = s.views();
			view! {
				<p class="density">{views.density}</p>
				<table class="matrix">
					<thead>
						<tr>
							{views.header.into_iter().map(|h| view! { <th>{h}</th> }).collect_view()}
						</tr>
					</thead>
					<tbody>
						{views
							.rows
							.into_iter()
							.map(|row| {
								view! {
									<tr>
										{row
											.into_iter()
											.map(|cell| view! { <td>{cell}</td> })
											.collect_view()}
									</tr>
								}
							})
							.collect_view()}
					</tbody>
				</table>
				<pre class="adjacency">{views.adjacency.join("\n")}</pre>
			}
		})
	};

	view! {
		<aside class="editor">
			<h2>"Edges"</h2>
			<textarea
				class="edge-text"
				rows="12"
				placeholder="u v [weight], one per line"
				prop:value=move || session.edit_text()
				on:input=on_edit
			/>
			<div class="row">
				<label>
					<input
						type="checkbox"
						prop:checked=move || session.read(|s| s.is_directed())
						on:change=on_directed
					/>
					" Directed"
				</label>
				<label>
					<input
						type="checkbox"
						prop:checked=move || session.read(|s| s.is_weighted())
						on:change=on_weighted
					/>
					" Weighted"
				</label>
			</div>
			<div class="row">
				<button on:click=move |_| {
					let _ = session.update(|s| s.apply_edit_text());
				}>"Apply"</button>
				<button on:click=move |_| {
					session.update(|s| s.load_sample());
				}>"Load sample"</button>
				<button on:click=move |_| {
					session.update(|s| s.reset());
				}>"Reset"</button>
			</div>
			{move || {
				session
					.read(|s| s.last_error().map(str::to_owned))
					.map(|err| view! { <p class="error">{err}</p> })
			}}

			<h2>"Vertex"</h2>
			<div class="row">
				<input
					type="text"
					placeholder="name"
					prop:value=vertex_name
					on:input=move |ev| vertex_name.set(event_target_value(&ev))
				/>
				<button on:click=add_vertex>"Add"</button>
				<button on:click=remove_vertex>"Remove"</button>
			</div>

			<h2>"Edge"</h2>
			<div class="row">
				<input
					type="text"
					placeholder="from"
					prop:value=edge_from
					on:input=move |ev| edge_from.set(event_target_value(&ev))
				/>
				<input
					type="text"
					placeholder="to"
					prop:value=edge_to
					on:input=move |ev| edge_to.set(event_target_value(&ev))
				/>
				<input
					type="text"
					placeholder="weight"
					prop:value=edge_weight
					prop:disabled=move || !session.read(|s| s.is_weighted())
					on:input=move |ev| edge_weight.set(event_target_value(&ev))
				/>
				<button on:click=add_edge>"Add"</button>
				<button on:click=remove_edge>"Remove"</button>
			</div>

			<h2>"Highlights"</h2>
			<div class="row">
				<input
					type="text"
					placeholder="A,B"
					prop:value=move || session.read(|s| s.highlight_texts().0)
					on:change=on_highlight_vertices
				/>
				<input
					type="text"
					placeholder="A-B;B-C"
					prop:value=move || session.read(|s| s.highlight_texts().1)
					on:change=on_highlight_edges
				/>
				<button on:click=move |_| {
					session.update(|s| s.clear_highlights());
				}>"Clear"</button>
			</div>

			<h2>"Views"</h2>
			{derived}

			<h2>"Import / export"</h2>
			<textarea
				class="import-text"
				rows="6"
				placeholder="vertex count, 0|1 directed flag, then edge lines"
				prop:value=import_text
				on:input=move |ev| import_text.set(event_target_value(&ev))
			/>
			<div class="row">
				<button on:click=import>"Import"</button>
				<button on:click=move |_| {
					exported.set(session.peek(|s| s.export_report()));
				}>"Export report"</button>
				<button on:click=move |_| {
					exported.set(session.peek(|s| s.export_load_text()));
				}>"Export graph"</button>
			</div>
			<pre class="export">{move || exported.get()}</pre>
		</aside>
	}
}
