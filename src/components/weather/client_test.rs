use super::*;

use std::cell::{Cell, RefCell};
use std::pin::pin;
use std::task::{Context, Poll, Waker};
use std::time::Duration;

use chrono::{TimeZone, Utc};

use crate::config::DEMO_API_KEY;
use crate::runtime::ManualScheduler;

fn scheduler() -> ManualScheduler {
	ManualScheduler::starting_at(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap())
}

fn config(api_key: &str) -> WeatherConfig {
	WeatherConfig {
		api_key: api_key.to_string(),
		..WeatherConfig::default()
	}
}

// =============================================================
// Requests and errors
// =============================================================

#[test]
fn request_url_carries_zip_key_and_units() {
	let client = WeatherClient::new(config("abc123"));
	assert_eq!(
		client.request_url(),
		"https://api.openweathermap.org/data/2.5/weather?zip=30075,us&appid=abc123&units=imperial"
	);
}

#[test]
fn status_codes_map_to_headlines() {
	assert_eq!(WeatherError::from_status(401).headline(), "Invalid API key");
	assert_eq!(WeatherError::from_status(404).headline(), "City not found");
	assert_eq!(WeatherError::from_status(500).headline(), "API Error");
	assert_eq!(
		WeatherError::Network("timeout".into()).headline(),
		"Network Error"
	);
	assert!(WeatherError::from_status(503).to_string().contains("503"));
}

#[test]
fn sentinel_key_stays_offline() {
	let demo = WeatherClient::new(config(DEMO_API_KEY));
	assert_eq!(demo.offline_snapshot(), Some(WeatherSnapshot::demo()));

	let live = WeatherClient::new(config("abc123"));
	assert_eq!(live.offline_snapshot(), None);
}

#[test]
fn demo_snapshot_resolves_without_network() {
	let client = WeatherClient::new(config(DEMO_API_KEY));
	let mut pending = pin!(client.snapshot());
	let mut cx = Context::from_waker(Waker::noop());

	match pending.as_mut().poll(&mut cx) {
		Poll::Ready(snapshot) => assert_eq!(snapshot, WeatherSnapshot::demo()),
		Poll::Pending => panic!("demo snapshot should not wait on I/O"),
	}
}

// =============================================================
// Polling
// =============================================================

#[test]
fn demo_mode_fills_card_without_fetching() {
	let scheduler = scheduler();
	let card = Rc::new(RefCell::new(WeatherSnapshot::default()));
	let fetches = Rc::new(Cell::new(0));

	let counter = fetches.clone();
	start_weather(
		&scheduler,
		WeatherClient::new(config(DEMO_API_KEY)),
		card.clone(),
		move |_, _| counter.set(counter.get() + 1),
	);

	assert_eq!(*card.borrow(), WeatherSnapshot::demo());
	scheduler.advance(Duration::from_secs(1200));
	assert_eq!(fetches.get(), 0);
}

#[test]
fn live_mode_fetches_at_startup_and_every_period() {
	let scheduler = scheduler();
	let card = Rc::new(RefCell::new(WeatherSnapshot::default()));
	let fetches = Rc::new(Cell::new(0));

	let counter = fetches.clone();
	start_weather(
		&scheduler,
		WeatherClient::new(config("abc123")),
		card.clone(),
		move |client, card| {
			counter.set(counter.get() + 1);
			assert_eq!(client.config().zip, "30075");
			card.replace(WeatherSnapshot::error("API Error"));
		},
	);
	assert_eq!(fetches.get(), 1);
	assert_eq!(card.borrow().condition, "Error");

	scheduler.advance(Duration::from_secs(599));
	assert_eq!(fetches.get(), 1);

	scheduler.advance(Duration::from_secs(1));
	assert_eq!(fetches.get(), 2);

	scheduler.advance(Duration::from_secs(1200));
	assert_eq!(fetches.get(), 4);
}
