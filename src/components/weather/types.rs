//! Response payload of the current-conditions endpoint.
//!
//! Only the fields the card displays are modelled; everything else in the
//! provider's JSON is ignored.

use serde::Deserialize;

/// Top-level `/data/2.5/weather` response.
#[derive(Clone, Debug, Deserialize)]
pub struct WeatherResponse {
	/// Temperatures and humidity.
	pub main: MainReadings,
	/// Wind readings.
	pub wind: Wind,
	/// Condition entries; the first one is the primary condition.
	#[serde(default)]
	pub weather: Vec<Condition>,
}

/// Temperatures in °F and relative humidity in percent.
#[derive(Clone, Debug, Deserialize)]
pub struct MainReadings {
	/// Air temperature.
	pub temp: f64,
	/// Apparent temperature.
	pub feels_like: f64,
	/// Relative humidity.
	pub humidity: f64,
}

/// Wind speed in mph.
#[derive(Clone, Debug, Deserialize)]
pub struct Wind {
	/// Sustained speed.
	pub speed: f64,
}

/// A weather condition, e.g. `Clear` / `clear sky` / `01d`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Condition {
	/// Condition group, e.g. `Rain`.
	pub main: String,
	/// Lowercase description, e.g. `light rain`.
	pub description: String,
	/// Icon code, e.g. `10d`.
	pub icon: String,
}
