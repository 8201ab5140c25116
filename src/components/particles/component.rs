//! Leptos component hosting the particle canvas.
//!
//! The canvas fills the viewport and is resized (and repopulated) with the
//! window. An animation loop runs via `requestAnimationFrame`, stepping the
//! field and redrawing it in the active theme's color every frame.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::debug;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::field::ParticleField;
use super::render;
use crate::components::theme::use_theme;
use crate::runtime::browser_rng;

/// Bundles the simulation with the RNG used to repopulate it.
struct FieldContext {
	field: ParticleField,
	rng: SmallRng,
}

fn viewport(window: &Window) -> (f64, f64) {
	let read = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
	(read(window.inner_width()), read(window.inner_height()))
}

/// Full-viewport canvas of drifting particles behind the page content.
#[component]
pub fn ParticleBackground(#[prop(default = 50)] count: usize) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let theme = use_theme();
	let context: Rc<RefCell<Option<FieldContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

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
			return;
		};

		let (w, h) = viewport(&window);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let mut rng = browser_rng();
		*context.borrow_mut() = Some(FieldContext {
			field: ParticleField::new(count, w, h, &mut rng),
			rng,
		});
		debug!("landing-page: {} particles on {}x{}", count, w, h);

		let (context_resize, canvas_resize) = (context.clone(), canvas.clone());
		let on_resize = Closure::<dyn FnMut()>::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let (nw, nh) = viewport(&win);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut c) = *context_resize.borrow_mut() {
				c.field.resize(nw, nh, &mut c.rng);
			}
		});
		let _ =
			window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
		on_resize.forget();

		let (context_anim, animate_inner) = (context.clone(), animate.clone());
		*animate.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				c.field.step();
				render::render(&ctx, &c.field, &theme);
			}
			if let (Some(win), Some(cb)) = (web_sys::window(), animate_inner.borrow().as_ref()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	view! {
		<div id="particles" class="particles">
			<canvas
				node_ref=canvas_ref
				style="position: fixed; inset: 0; display: block; pointer-events: none;"
			/>
		</div>
	}
}
