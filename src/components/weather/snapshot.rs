//! What the weather card shows, and how it is formatted.

use log::error;

use super::client::WeatherError;
use super::types::WeatherResponse;

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod snapshot_test;

/// Shown in place of a numeric reading that is unavailable.
pub const PLACEHOLDER: &str = "--";

/// Icon glyphs keyed by fragments of the provider's icon code, checked in order.
const ICON_CODES: &[(&[&str], &str)] = &[
	(&["01"], "☀️"),
	(&["02", "03"], "⛅"),
	(&["04"], "☁️"),
	(&["09", "10"], "🌧️"),
	(&["11"], "⛈️"),
	(&["13"], "❄️"),
	(&["50"], "🌫️"),
];

/// Icon glyphs keyed by condition name, used when the code is unrecognised.
const ICON_NAMES: &[(&str, &str)] = &[
	("Clear", "☀️"),
	("Clouds", "☁️"),
	("Rain", "🌧️"),
	("Drizzle", "🌦️"),
	("Thunderstorm", "⛈️"),
	("Snow", "❄️"),
	("Mist", "🌫️"),
	("Fog", "🌫️"),
	("Haze", "🌫️"),
];

const DEFAULT_ICON: &str = "🌤️";

/// Pick the card glyph for a condition name and icon code.
pub fn icon_glyph(condition: &str, icon_code: &str) -> &'static str {
	ICON_CODES
		.iter()
		.find(|(codes, _)| codes.iter().any(|c| icon_code.contains(c)))
		.map(|&(_, glyph)| glyph)
		.or_else(|| {
			ICON_NAMES
				.iter()
				.find(|(name, _)| *name == condition)
				.map(|&(_, glyph)| glyph)
		})
		.unwrap_or(DEFAULT_ICON)
}

/// Round half up, the way the browser's `Math.round` does.
pub fn round_half_up(value: f64) -> f64 {
	(value + 0.5).floor()
}

/// One set of weather values. `None` readings render as [`PLACEHOLDER`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WeatherSnapshot {
	/// °F.
	pub temperature: Option<f64>,
	/// °F.
	pub feels_like: Option<f64>,
	/// Percent.
	pub humidity: Option<f64>,
	/// mph.
	pub wind_speed: Option<f64>,
	/// e.g. `Clear`.
	pub condition: String,
	/// e.g. `clear sky`, or the error message.
	pub description: String,
	/// Provider icon code, e.g. `01d`.
	pub icon_code: String,
}

impl WeatherSnapshot {
	/// Fixed values shown when no API key is configured.
	pub fn demo() -> Self {
		Self {
			temperature: Some(72.0),
			feels_like: Some(75.0),
			humidity: Some(65.0),
			wind_speed: Some(8.0),
			condition: "Clear".to_string(),
			description: "clear sky".to_string(),
			icon_code: "01d".to_string(),
		}
	}

	/// Placeholder card carrying `message` as its description.
	pub fn error(message: &str) -> Self {
		Self {
			temperature: None,
			feels_like: None,
			humidity: None,
			wind_speed: None,
			condition: "Error".to_string(),
			description: message.to_string(),
			icon_code: "50d".to_string(),
		}
	}

	/// Render a fetch outcome, logging and substituting failures.
	pub fn from_result(result: Result<WeatherResponse, WeatherError>) -> Self {
		match result {
			Ok(response) => response.into(),
			Err(e) => {
				error!("landing-page: weather fetch failed: {}", e);
				Self::error(e.headline())
			}
		}
	}

	/// e.g. `72°`.
	pub fn temperature_text(&self) -> String {
		reading(self.temperature.map(round_half_up), "°")
	}

	/// e.g. `75°F`.
	pub fn feels_like_text(&self) -> String {
		reading(self.feels_like.map(round_half_up), "°F")
	}

	/// e.g. `65%`.
	pub fn humidity_text(&self) -> String {
		reading(self.humidity, "%")
	}

	/// e.g. `8 mph`.
	pub fn wind_text(&self) -> String {
		reading(self.wind_speed.map(round_half_up), " mph")
	}

	/// Card glyph for this condition.
	pub fn icon(&self) -> &'static str {
		icon_glyph(&self.condition, &self.icon_code)
	}
}

fn reading(value: Option<f64>, unit: &str) -> String {
	match value {
		Some(v) => format!("{v}{unit}"),
		None => format!("{PLACEHOLDER}{unit}"),
	}
}

impl From<WeatherResponse> for WeatherSnapshot {
	fn from(response: WeatherResponse) -> Self {
		let condition = response.weather.into_iter().next().unwrap_or_default();
		Self {
			temperature: Some(response.main.temp),
			feels_like: Some(response.main.feels_like),
			humidity: Some(response.main.humidity),
			wind_speed: Some(response.wind.speed),
			condition: condition.main,
			description: condition.description,
			icon_code: condition.icon,
		}
	}
}
