//! Current-conditions client and poll loop.

use std::rc::Rc;

use gloo_net::http::Request;
use log::{debug, info};
use thiserror::Error;

use super::snapshot::WeatherSnapshot;
use super::types::WeatherResponse;
use crate::config::WeatherConfig;
use crate::runtime::{Scheduler, Shared};

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

/// Why a weather refresh failed.
#[derive(Debug, Error)]
pub enum WeatherError {
	/// HTTP 401.
	#[error("API key rejected (HTTP 401)")]
	Unauthorized,
	/// HTTP 404.
	#[error("location not found (HTTP 404)")]
	NotFound,
	/// Any other non-success status.
	#[error("weather API returned HTTP {0}")]
	Status(u16),
	/// Transport or decoding failure.
	#[error("weather request failed: {0}")]
	Network(String),
}

impl WeatherError {
	/// Classify a non-success HTTP status.
	pub fn from_status(status: u16) -> Self {
		match status {
			401 => Self::Unauthorized,
			404 => Self::NotFound,
			other => Self::Status(other),
		}
	}

	/// Short message shown on the card.
	pub fn headline(&self) -> &'static str {
		match self {
			Self::Unauthorized => "Invalid API key",
			Self::NotFound => "City not found",
			Self::Status(_) => "API Error",
			Self::Network(_) => "Network Error",
		}
	}
}

impl From<gloo_net::Error> for WeatherError {
	fn from(e: gloo_net::Error) -> Self {
		Self::Network(e.to_string())
	}
}

/// Fetches current conditions for one configured location.
#[derive(Clone, Debug)]
pub struct WeatherClient {
	config: WeatherConfig,
}

impl WeatherClient {
	/// Client for one configured location.
	pub fn new(config: WeatherConfig) -> Self {
		Self { config }
	}

	/// Settings this client was built with.
	pub fn config(&self) -> &WeatherConfig {
		&self.config
	}

	/// Full request URL, key included.
	pub fn request_url(&self) -> String {
		format!(
			"{}?zip={},us&appid={}&units=imperial",
			self.config.endpoint, self.config.zip, self.config.api_key
		)
	}

	/// The snapshot to show without a network round trip, if any.
	pub fn offline_snapshot(&self) -> Option<WeatherSnapshot> {
		self.config.is_demo().then(WeatherSnapshot::demo)
	}

	/// One request; non-success statuses become errors.
	pub async fn fetch(&self) -> Result<WeatherResponse, WeatherError> {
		let resp = Request::get(&self.request_url()).send().await?;

		if !resp.ok() {
			return Err(WeatherError::from_status(resp.status()));
		}

		Ok(resp.json::<WeatherResponse>().await?)
	}

	/// Fetch and convert, never failing.
	pub async fn snapshot(&self) -> WeatherSnapshot {
		if let Some(offline) = self.offline_snapshot() {
			return offline;
		}
		WeatherSnapshot::from_result(self.fetch().await)
	}
}

/// Refresh `card` now and every configured period afterwards.
///
/// Demo mode writes the demo snapshot directly. Otherwise each tick hands
/// the client and card to `fetch`, which runs the request off the timer.
pub fn start_weather<S, F>(
	scheduler: &S,
	client: WeatherClient,
	card: F,
	mut fetch: impl FnMut(Rc<WeatherClient>, F) + 'static,
) where
	S: Scheduler,
	F: Shared<WeatherSnapshot>,
{
	let period = client.config().refresh_period();
	let client = Rc::new(client);

	if client.config().is_demo() {
		info!("landing-page: no weather API key configured, showing demo data");
	}

	scheduler.run_and_repeat(period, move || {
		if let Some(offline) = client.offline_snapshot() {
			card.replace(offline);
			return;
		}
		debug!("landing-page: refreshing weather");
		fetch(client.clone(), card.clone());
	});
}
