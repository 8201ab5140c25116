//! Theme state wiring and the toggle button.
//!
//! [`provide_theme`] resolves the starting mode, publishes a [`ThemeHandle`]
//! through context, mirrors every change onto the root element and the
//! `theme-color` meta tag, and follows `prefers-color-scheme` while the user
//! has not chosen explicitly.

use leptos::prelude::*;
use log::debug;
use wasm_bindgen::prelude::*;
use web_sys::{MediaQueryList, MediaQueryListEvent, MouseEvent};

use super::manager::{LocalStorage, ThemeManager};
use super::mode::{ThemeMode, ThemeQuery};
use super::ripple::{RIPPLE_LIFETIME, Ripple};
use crate::components::transient::{Transients, show_for};
use crate::runtime::BrowserScheduler;

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Shared, reactive access to the active mode.
#[derive(Clone, Copy, Debug)]
pub struct ThemeHandle(RwSignal<ThemeMode>);

impl ThemeHandle {
	/// A handle starting in `mode`.
	pub fn new(mode: ThemeMode) -> Self {
		Self(RwSignal::new(mode))
	}

	/// Tracked read, for views and effects.
	pub fn get(self) -> ThemeMode {
		self.0.get()
	}

	/// Switch modes; the document follows through an effect.
	pub fn set(self, mode: ThemeMode) {
		self.0.set(mode);
	}
}

impl ThemeQuery for ThemeHandle {
	fn mode(&self) -> ThemeMode {
		self.0.get_untracked()
	}
}

/// The handle published by [`provide_theme`], or a light-mode stand-in when
/// rendered outside of it.
pub fn use_theme() -> ThemeHandle {
	use_context::<ThemeHandle>().unwrap_or_else(|| ThemeHandle::new(ThemeMode::default()))
}

fn system_dark_query() -> Option<MediaQueryList> {
	web_sys::window()?.match_media(DARK_QUERY).ok().flatten()
}

/// Swap the root marker class and the browser chrome color.
fn apply_to_document(mode: ThemeMode) {
	let Some(document) = web_sys::window().and_then(|w| w.document()) else {
		return;
	};
	if let Some(root) = document.document_element() {
		let classes = root.class_list();
		for other in ThemeMode::ALL {
			let _ = classes.remove_1(other.class_name());
		}
		let _ = classes.add_1(mode.class_name());
	}
	if let Some(meta) = document.get_element_by_id("theme-color") {
		let _ = meta.set_attribute("content", &mode.meta_color().to_css());
	}
}

/// Resolve the starting mode and publish it to the component tree.
pub fn provide_theme() -> ThemeHandle {
	let manager = ThemeManager::new(LocalStorage);
	let query = system_dark_query();
	let system_dark = query.as_ref().is_some_and(MediaQueryList::matches);

	let handle = ThemeHandle::new(manager.initial_mode(system_dark));
	debug!("landing-page: starting in {} mode", handle.mode());
	provide_context(handle);

	Effect::new(move |_| apply_to_document(handle.get()));

	if let Some(query) = query {
		let on_change =
			Closure::<dyn FnMut(MediaQueryListEvent)>::new(move |ev: MediaQueryListEvent| {
				if let Some(mode) = manager.on_system_change(ev.matches()) {
					debug!("landing-page: system preference switched to {}", mode);
					handle.set(mode);
				}
			});
		let _ =
			query.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref());
		on_change.forget();
	}

	handle
}

/// Button that flips the mode, persists it and plays a ripple.
#[component]
pub fn ThemeToggle() -> impl IntoView {
	let theme = use_theme();
	let manager = ThemeManager::new(LocalStorage);
	let ripples = RwSignal::new(Transients::<Ripple>::default());
	let button_ref = NodeRef::<leptos::html::Button>::new();

	let on_click = move |_: MouseEvent| {
		let next = manager.toggle(theme.mode());
		theme.set(next);

		if let Some(button) = button_ref.get() {
			let rect = button.get_bounding_client_rect();
			let ripple = Ripple::covering(rect.width(), rect.height());
			show_for(&BrowserScheduler, &ripples, RIPPLE_LIFETIME, ripple);
		}
	};

	view! {
		<button
			node_ref=button_ref
			id="themeToggle"
			class="theme-toggle"
			aria-label="Toggle theme"
			aria-pressed=move || theme.get().is_dark().to_string()
			style="position: relative; overflow: hidden;"
			on:click=on_click
		>
			<span id="themeIcon">{move || theme.get().icon()}</span>
			<For
				each=move || ripples.with(Transients::to_vec)
				key=|ripple| ripple.id
				children=|ripple| view! { <div class="ripple" style=ripple.item.style()></div> }
			/>
		</button>
	}
}
