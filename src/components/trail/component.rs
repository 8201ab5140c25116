//! Document-wide pointer listener and the layer its marks render into.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::MouseEvent;

use super::tracker::{PointerEffects, PointerTrail, TrailMark};
use crate::components::theme::use_theme;
use crate::components::transient::Transients;
use crate::runtime::{BrowserScheduler, SystemClock, browser_rng};

/// Fixed-position layer of fading marks that follow the pointer.
#[component]
pub fn PointerTrailLayer() -> impl IntoView {
	let theme = use_theme();
	let marks = RwSignal::new(Transients::<TrailMark>::default());
	let effects = PointerEffects {
		scheduler: BrowserScheduler,
		clock: SystemClock,
		trail: Rc::new(RefCell::new(PointerTrail::default())),
		marks,
	};
	effects.start();

	if let Some(document) = web_sys::window().and_then(|w| w.document()) {
		let mut rng = browser_rng();
		let on_move = Closure::<dyn FnMut(MouseEvent)>::new(move |ev: MouseEvent| {
			effects.on_move(
				f64::from(ev.client_x()),
				f64::from(ev.client_y()),
				&theme,
				&mut rng,
			);
		});
		let _ = document
			.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
		on_move.forget();
	}

	view! {
		<div class="pointer-trail" aria-hidden="true">
			<For
				each=move || marks.with(Transients::to_vec)
				key=|mark| mark.id
				children=|mark| view! { <div class="trail" style=mark.item.style()></div> }
			/>
		</div>
	}
}
