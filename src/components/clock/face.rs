//! Clock readings for a configured display zone.

use std::time::Duration;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use log::warn;

use crate::runtime::{Scheduler, Shared, WallClock};

#[cfg(test)]
#[path = "face_test.rs"]
mod face_test;

/// Clock refresh period.
pub const TICK: Duration = Duration::from_millis(1000);

/// Friendly names for the zones the page is usually configured with.
const ZONE_LABELS: &[(&str, &str)] = &[
	("America/New_York", "Eastern Time"),
	("America/Chicago", "Central Time"),
	("America/Denver", "Mountain Time"),
	("America/Los_Angeles", "Pacific Time"),
	("America/Phoenix", "Arizona Time"),
	("America/Anchorage", "Alaska Time"),
	("Pacific/Honolulu", "Hawaii Time"),
];

/// Label shown under the clock for `zone`, or `"Local Time"` when unmapped.
pub fn zone_label(zone: &str) -> &'static str {
	ZONE_LABELS
		.iter()
		.find(|(id, _)| *id == zone)
		.map_or("Local Time", |&(_, label)| label)
}

/// Format an offset in minutes east of UTC as `±HH:MM`.
pub fn format_utc_offset(minutes_east: i32) -> String {
	let sign = if minutes_east >= 0 { '+' } else { '-' };
	let abs = minutes_east.unsigned_abs();
	format!("{sign}{:02}:{:02}", abs / 60, abs % 60)
}

/// The timezone the clock displays.
#[derive(Clone, Debug)]
pub struct DisplayZone {
	id: String,
	tz: Tz,
}

impl DisplayZone {
	/// Parse an IANA identifier. Unknown identifiers render in UTC but keep
	/// their name, so the label still falls back to `"Local Time"`.
	pub fn new(id: &str) -> Self {
		let tz = id.parse::<Tz>().unwrap_or_else(|e| {
			warn!(
				"landing-page: unknown timezone {:?} ({}), showing UTC",
				id, e
			);
			Tz::UTC
		});
		Self {
			id: id.to_string(),
			tz,
		}
	}

	/// The identifier as configured.
	pub fn id(&self) -> &str {
		&self.id
	}
}

/// Everything the clock card displays for one instant.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ClockFace {
	/// `hh:mm:ss`, 12-hour, zero padded.
	pub time: String,
	/// `AM` or `PM`.
	pub meridiem: String,
	/// e.g. `Friday`.
	pub weekday: String,
	/// e.g. `March 15, 2024`.
	pub date: String,
	/// Friendly name from the zone table.
	pub zone_label: String,
	/// The viewer's own offset, not the display zone's.
	pub utc_offset: String,
}

impl ClockFace {
	/// Compute the face for `instant` shown in `zone`.
	pub fn at(instant: DateTime<Utc>, zone: &DisplayZone, local_offset_minutes: i32) -> Self {
		let local = instant.with_timezone(&zone.tz);
		let stamp = local.format("%I:%M:%S %p").to_string();
		let (time, meridiem) = stamp.split_once(' ').unwrap_or((stamp.as_str(), ""));

		Self {
			time: time.to_string(),
			meridiem: meridiem.to_string(),
			weekday: local.format("%A").to_string(),
			date: local.format("%B %-d, %Y").to_string(),
			zone_label: zone_label(zone.id()).to_string(),
			utc_offset: format_utc_offset(local_offset_minutes),
		}
	}

	/// Weekday and date together, e.g. `Friday, March 15, 2024`.
	pub fn long_date(&self) -> String {
		format!("{}, {}", self.weekday, self.date)
	}
}

/// Render the face now and then once per [`TICK`].
pub fn start_clock<S, C, F>(scheduler: &S, clock: C, zone: DisplayZone, face: F)
where
	S: Scheduler,
	C: WallClock + 'static,
	F: Shared<ClockFace>,
{
	scheduler.run_and_repeat(TICK, move || {
		face.replace(ClockFace::at(clock.now(), &zone, clock.local_offset_minutes()));
	});
}
