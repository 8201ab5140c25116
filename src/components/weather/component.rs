use leptos::prelude::*;
use leptos::task::spawn_local;

use super::client::{WeatherClient, start_weather};
use super::snapshot::WeatherSnapshot;
use crate::config::WeatherConfig;
use crate::runtime::BrowserScheduler;

/// Current-conditions card, refreshed on the configured period.
#[component]
pub fn WeatherWidget(config: WeatherConfig) -> impl IntoView {
	let card = RwSignal::new(WeatherSnapshot::default());

	start_weather(
		&BrowserScheduler,
		WeatherClient::new(config),
		card,
		|client, card| {
			spawn_local(async move {
				card.set(client.snapshot().await);
			});
		},
	);

	view! {
		<div class="weather-widget">
			<div class="weather-main">
				<span class="weather-icon">{move || card.with(|c| c.icon())}</span>
				<span class="temp">{move || card.with(|c| c.temperature_text())}</span>
			</div>
			<div class="weather-desc">{move || card.with(|c| c.description.clone())}</div>
			<div class="weather-details">
				<div class="detail">
					<span class="label">"Feels like"</span>
					<span class="value">{move || card.with(|c| c.feels_like_text())}</span>
				</div>
				<div class="detail">
					<span class="label">"Humidity"</span>
					<span class="value">{move || card.with(|c| c.humidity_text())}</span>
				</div>
				<div class="detail">
					<span class="label">"Wind"</span>
					<span class="value">{move || card.with(|c| c.wind_text())}</span>
				</div>
			</div>
		</div>
	}
}
