use leptos::prelude::*;

use super::deck::{JokeCard, JokeRotation};
use crate::runtime::{BrowserScheduler, browser_rng};

/// Joke card with a button for the next one.
#[component]
pub fn DadJokes() -> impl IntoView {
	let card = RwSignal::new(JokeCard::default());
	let rotation = JokeRotation::new(BrowserScheduler, card, browser_rng());
	rotation.show_next();

	view! {
		<div class="jokes-widget">
			<p
				id="jokeText"
				class="joke-text"
				style:opacity=move || card.with(|c| c.opacity.to_string())
				style:transition="opacity 0.2s ease"
			>
				{move || card.with(JokeCard::text)}
			</p>
			<button id="newJokeBtn" class="joke-btn" on:click=move |_| rotation.show_next()>
				"Another one"
			</button>
		</div>
	}
}
