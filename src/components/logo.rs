//! Site logo whose animation restarts on click.

use std::time::Duration;

use leptos::prelude::*;

use crate::runtime::{BrowserScheduler, Scheduler, Shared};

#[cfg(test)]
#[path = "logo_test.rs"]
mod logo_test;

/// Animation the logo normally runs.
pub const LOGO_ANIMATION: &str =
	"gradientShift 3s ease-in-out infinite, logoGlow 2s ease-in-out infinite alternate";

/// How long the animation stays cleared before it is restored.
pub const RESTART_DELAY: Duration = Duration::from_millis(100);

/// Clear the animation, then put it back after [`RESTART_DELAY`].
pub fn restart_animation<S, A>(scheduler: &S, animation: &A)
where
	S: Scheduler,
	A: Shared<&'static str>,
{
	animation.replace("none");
	let animation = animation.clone();
	scheduler.set_timeout(RESTART_DELAY, move || animation.replace(LOGO_ANIMATION));
}

/// Site title that replays its animation when clicked.
#[component]
pub fn Logo(#[prop(into)] title: String) -> impl IntoView {
	let animation = RwSignal::new(LOGO_ANIMATION);

	view! {
		<div
			id="logo"
			class="logo"
			style:animation=move || animation.get()
			on:click=move |_| restart_animation(&BrowserScheduler, &animation)
		>
			{title}
		</div>
	}
}
