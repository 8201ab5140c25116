//! Weather card backed by the OpenWeatherMap current-conditions API.
//!
//! Without a configured API key the card shows fixed demo values and never
//! touches the network. Fetch failures are logged and rendered as a
//! placeholder card; they never reach the rest of the page.

mod client;
mod component;
mod snapshot;
mod types;

pub use client::{WeatherClient, WeatherError, start_weather};
pub use component::WeatherWidget;
pub use snapshot::{PLACEHOLDER, WeatherSnapshot, icon_glyph, round_half_up};
pub use types::{Condition, MainReadings, WeatherResponse, Wind};
