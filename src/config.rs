//! Page configuration embedded in the host document.
//!
//! The page carries a JSON block in `<script id="site-config">`. Every field
//! is optional; anything left out falls back to the defaults below.

use std::time::Duration;

use log::{info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// API key value that means "no real credential configured".
pub const DEMO_API_KEY: &str = "YOUR_API_KEY_HERE";

/// Top-level page configuration.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
	/// Text shown in the logo.
	pub title: String,
	/// IANA timezone the clock displays, e.g. `America/New_York`.
	pub timezone: String,
	/// Number of background particles.
	pub particle_count: usize,
	/// Weather widget settings.
	pub weather: WeatherConfig,
}

impl Default for SiteConfig {
	fn default() -> Self {
		Self {
			title: "Welcome".to_string(),
			timezone: "America/New_York".to_string(),
			particle_count: 50,
			weather: WeatherConfig::default(),
		}
	}
}

/// Settings for the weather widget.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct WeatherConfig {
	/// Current-conditions endpoint, without query string.
	pub endpoint: String,
	/// US ZIP code to report on.
	pub zip: String,
	/// Provider API key; [`DEMO_API_KEY`] switches the widget to demo data.
	pub api_key: String,
	/// Seconds between polls.
	pub refresh_secs: u64,
}

impl Default for WeatherConfig {
	fn default() -> Self {
		Self {
			endpoint: "https://api.openweathermap.org/data/2.5/weather".to_string(),
			zip: "30075".to_string(),
			api_key: DEMO_API_KEY.to_string(),
			refresh_secs: 600,
		}
	}
}

impl WeatherConfig {
	/// Whether the widget should skip the network and show demo data.
	pub fn is_demo(&self) -> bool {
		self.api_key.is_empty() || self.api_key == DEMO_API_KEY
	}

	/// Poll period as a [`Duration`].
	pub fn refresh_period(&self) -> Duration {
		Duration::from_secs(self.refresh_secs.max(1))
	}
}

impl SiteConfig {
	/// Parse a config block.
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(text)
	}

	/// Load the config from `<script id="site-config">`, falling back to
	/// defaults when the block is missing or malformed.
	pub fn from_document() -> Self {
		let Some(text) = config_block_text() else {
			info!("landing-page: no site-config block, using defaults");
			return Self::default();
		};

		match Self::from_json(&text) {
			Ok(config) => {
				info!(
					"landing-page: loaded config ({} particles, zone {})",
					config.particle_count, config.timezone
				);
				config
			}
			Err(e) => {
				warn!("landing-page: failed to parse site config: {}", e);
				Self::default()
			}
		}
	}
}

fn config_block_text() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("site-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}
