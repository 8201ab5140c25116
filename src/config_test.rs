use super::*;

#[test]
fn empty_block_uses_defaults() {
	let config = SiteConfig::from_json("{}").unwrap();
	assert_eq!(config, SiteConfig::default());
	assert_eq!(config.particle_count, 50);
	assert_eq!(config.timezone, "America/New_York");
	assert!(config.weather.is_demo());
}

#[test]
fn partial_weather_block_keeps_other_defaults() {
	let config = SiteConfig::from_json(
		r#"{ "title": "Hi", "weather": { "zip": "10001", "api_key": "abc123" } }"#,
	)
	.unwrap();

	assert_eq!(config.title, "Hi");
	assert_eq!(config.weather.zip, "10001");
	assert_eq!(config.weather.refresh_secs, 600);
	assert!(!config.weather.is_demo());
}

#[test]
fn blank_api_key_counts_as_demo() {
	let weather = WeatherConfig {
		api_key: String::new(),
		..WeatherConfig::default()
	};
	assert!(weather.is_demo());
}

#[test]
fn refresh_period_never_zero() {
	let weather = WeatherConfig {
		refresh_secs: 0,
		..WeatherConfig::default()
	};
	assert_eq!(weather.refresh_period(), Duration::from_secs(1));
	assert_eq!(
		WeatherConfig::default().refresh_period(),
		Duration::from_secs(600)
	);
}

#[test]
fn malformed_block_is_an_error() {
	assert!(SiteConfig::from_json("{ particle_count: 3 ").is_err());
	assert!(SiteConfig::from_json(r#"{ "particle_count": "many" }"#).is_err());
}
