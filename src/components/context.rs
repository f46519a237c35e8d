use leptos::prelude::*;

use crate::session::Session;

/// Handle to the page's [`Session`], shared by the canvas and the editor panel.
///
/// The session lives in a local stored value; `revision` is bumped after every action so
/// text panels re-read it. `edit_text` mirrors the session's edit text and only changes
/// when an action rewrites it, so typing into the edit box never resets the caret.
#[derive(Clone, Copy)]
pub struct SessionContext {
	session: StoredValue<Session, LocalStorage>,
	revision: RwSignal<u64>,
	edit_text: RwSignal<String>,
}

impl SessionContext {
	pub fn new(session: Session) -> Self {
		let edit_text = RwSignal::new(session.edit_text().to_owned());
		Self {
			session: StoredValue::new_local(session),
			revision: RwSignal::new(0),
			edit_text,
		}
	}

	/// Read the session, subscribing to later changes.
	pub fn read<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
		self.revision.track();
		self.session.with_value(f)
	}

	/// Read the session without subscribing; for event handlers.
	pub fn peek<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
		self.session.with_value(f)
	}

	/// Mutate the session and notify readers.
	pub fn update<R>(&self, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
		let out = self.update_quiet(f);
		self.touch();
		out
	}

	/// Mutate the session without notifying readers; for per-frame and pointer-move work.
	pub fn update_quiet<R>(&self, f: impl FnOnce(&mut Session) -> R) -> Option<R> {
		self.session.try_update_value(f)
	}

	pub fn touch(&self) {
		self.session.with_value(|s| {
			let text = s.edit_text();
			if self.edit_text.with_untracked(|current| current != text) {
				self.edit_text.set(text.to_owned());
			}
		});
		self.revision.update(|r| *r += 1);
	}

	pub fn edit_text(&self) -> String {
		self.edit_text.get()
	}
}
