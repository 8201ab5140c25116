//! Wall-clock access.

use chrono::{DateTime, Local, Utc};

/// Source of the current instant and of the viewer's local UTC offset.
pub trait WallClock {
	/// The current instant.
	fn now(&self) -> DateTime<Utc>;

	/// The viewer's local offset from UTC, in minutes east of Greenwich.
	fn local_offset_minutes(&self) -> i32;

	/// The current instant as Unix milliseconds.
	fn now_millis(&self) -> i64 {
		self.now().timestamp_millis()
	}
}

/// The browser's clock, read through `chrono` (backed by `Date` on wasm32).
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl WallClock for SystemClock {
	fn now(&self) -> DateTime<Utc> {
		Utc::now()
	}

	fn local_offset_minutes(&self) -> i32 {
		Local::now().offset().local_minus_utc() / 60
	}
}
