//! landing-page: animated personal landing page rendered with Leptos.
//!
//! This crate renders a single page with a light/dark theme, a drifting
//! particle background, a pointer trail, and three cards: a digital clock,
//! current weather, and a rotating dad joke.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info};

pub mod components;
pub mod config;
pub mod runtime;

pub use components::clock::DigitalClock;
pub use components::jokes::DadJokes;
pub use components::logo::Logo;
pub use components::particles::ParticleBackground;
pub use components::theme::{ThemeMode, ThemeToggle, provide_theme};
pub use components::trail::PointerTrailLayer;
pub use components::weather::WeatherWidget;
pub use config::{SiteConfig, WeatherConfig};

/// Keyframes and the ripple class used by the decorative effects.
const EFFECT_STYLES: &str = r#"
.ripple {
	position: absolute;
	border-radius: 50%;
	background: rgba(255, 255, 255, 0.3);
	transform: scale(0);
	animation: ripple-animation 0.6s ease-out;
	pointer-events: none;
}

@keyframes ripple-animation {
	to {
		transform: scale(4);
		opacity: 0;
	}
}

@keyframes sparkle-animation {
	0% { transform: scale(0) rotate(0deg); opacity: 1; }
	50% { transform: scale(1) rotate(180deg); opacity: 0.8; }
	100% { transform: scale(0) rotate(360deg); opacity: 0; }
}

@keyframes notification-animation {
	0% { transform: translate(-50%, -50%) scale(0); opacity: 0; }
	20% { transform: translate(-50%, -50%) scale(1.1); opacity: 1; }
	80% { transform: translate(-50%, -50%) scale(1); opacity: 1; }
	100% { transform: translate(-50%, -50%) scale(0.8); opacity: 0; }
}

@keyframes trail-fade {
	0% { transform: scale(1); opacity: 1; }
	100% { transform: scale(0); opacity: 0; }
}
"#;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("landing-page: logging initialized");
}

/// Main application component.
/// Reads the site config from the DOM and lays out every widget.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = SiteConfig::from_document();
	provide_context(config.clone());
	provide_theme();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text=config.title.clone() />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />
		<Style>{EFFECT_STYLES}</Style>

		<ParticleBackground count=config.particle_count />
		<PointerTrailLayer />

		<header class="site-header">
			<Logo title=config.title.clone() />
			<ThemeToggle />
		</header>

		<main class="widgets">
			<section class="widget">
				<h2>"Current Time"</h2>
				<DigitalClock timezone=config.timezone.clone() />
			</section>
			<section class="widget">
				<h2>"Weather"</h2>
				<WeatherWidget config=config.weather.clone() />
			</section>
			<section class="widget">
				<h2>"Dad Joke"</h2>
				<DadJokes />
			</section>
		</main>
	}
}
