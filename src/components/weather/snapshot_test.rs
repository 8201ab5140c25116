use super::*;

const SAMPLE: &str = r#"{
	"coord": {"lon": -84.36, "lat": 34.02},
	"weather": [{"id": 803, "main": "Clouds", "description": "broken clouds", "icon": "04d"}],
	"main": {"temp": 71.6, "feels_like": 72.5, "temp_min": 69.0, "humidity": 58, "pressure": 1016},
	"wind": {"speed": 5.75, "deg": 200},
	"name": "Roswell"
}"#;

fn sample() -> WeatherResponse {
	serde_json::from_str(SAMPLE).unwrap()
}

// =============================================================
// Payload conversion
// =============================================================

#[test]
fn converts_provider_payload() {
	let snapshot = WeatherSnapshot::from(sample());
	assert_eq!(snapshot.temperature_text(), "72°");
	assert_eq!(snapshot.feels_like_text(), "73°F");
	assert_eq!(snapshot.humidity_text(), "58%");
	assert_eq!(snapshot.wind_text(), "6 mph");
	assert_eq!(snapshot.description, "broken clouds");
	assert_eq!(snapshot.icon(), "☁️");
}

#[test]
fn missing_condition_list_uses_fallback_icon() {
	let json = r#"{"main": {"temp": 50, "feels_like": 48, "humidity": 90}, "wind": {"speed": 0}}"#;
	let snapshot = WeatherSnapshot::from(serde_json::from_str::<WeatherResponse>(json).unwrap());
	assert_eq!(snapshot.description, "");
	assert_eq!(snapshot.icon(), "🌤️");
	assert_eq!(snapshot.wind_text(), "0 mph");
}

#[test]
fn fetch_result_maps_errors_to_placeholders() {
	let ok = WeatherSnapshot::from_result(Ok(sample()));
	assert_eq!(ok.condition, "Clouds");

	let failed = WeatherSnapshot::from_result(Err(WeatherError::from_status(401)));
	assert_eq!(failed, WeatherSnapshot::error("Invalid API key"));
}

// =============================================================
// Demo and error cards
// =============================================================

#[test]
fn demo_card_values() {
	let demo = WeatherSnapshot::demo();
	assert_eq!(demo.temperature_text(), "72°");
	assert_eq!(demo.feels_like_text(), "75°F");
	assert_eq!(demo.humidity_text(), "65%");
	assert_eq!(demo.wind_text(), "8 mph");
	assert_eq!(demo.description, "clear sky");
	assert_eq!(demo.icon(), "☀️");
}

#[test]
fn error_card_uses_placeholders() {
	let card = WeatherSnapshot::error("City not found");
	assert_eq!(card.temperature_text(), "--°");
	assert_eq!(card.feels_like_text(), "--°F");
	assert_eq!(card.humidity_text(), "--%");
	assert_eq!(card.wind_text(), "-- mph");
	assert_eq!(card.condition, "Error");
	assert_eq!(card.description, "City not found");
	assert_eq!(card.icon(), "🌫️");
}

// =============================================================
// Icons and rounding
// =============================================================

#[test]
fn icon_code_beats_condition_name() {
	assert_eq!(icon_glyph("Rain", "01n"), "☀️");
	assert_eq!(icon_glyph("Clear", "02d"), "⛅");
	assert_eq!(icon_glyph("Clear", "03n"), "⛅");
	assert_eq!(icon_glyph("Clear", "09d"), "🌧️");
	assert_eq!(icon_glyph("Clear", "10d"), "🌧️");
	assert_eq!(icon_glyph("Clear", "11d"), "⛈️");
	assert_eq!(icon_glyph("Clear", "13d"), "❄️");
}

#[test]
fn condition_name_when_code_unknown() {
	assert_eq!(icon_glyph("Drizzle", ""), "🌦️");
	assert_eq!(icon_glyph("Haze", "xx"), "🌫️");
	assert_eq!(icon_glyph("Tornado", "xx"), "🌤️");
}

#[test]
fn rounding_goes_half_up() {
	assert_eq!(round_half_up(2.5), 3.0);
	assert_eq!(round_half_up(2.49), 2.0);
	assert_eq!(round_half_up(-2.5), -2.0);
	assert_eq!(round_half_up(-2.51), -3.0);
}
