use leptos::prelude::*;

use super::face::{ClockFace, DisplayZone, start_clock};
use crate::runtime::{BrowserScheduler, SystemClock};

/// Digital clock card for a fixed display zone.
#[component]
pub fn DigitalClock(#[prop(into)] timezone: String) -> impl IntoView {
	let face = RwSignal::new(ClockFace::default());
	start_clock(
		&BrowserScheduler,
		SystemClock,
		DisplayZone::new(&timezone),
		face,
	);

	view! {
		<div class="clock-widget">
			<div class="time-display">
				<span id="currentTime" class="time">{move || face.with(|f| f.time.clone())}</span>
				<span id="ampm" class="ampm">{move || face.with(|f| f.meridiem.clone())}</span>
			</div>
			<div class="date-display" title=move || face.with(ClockFace::long_date)>
				<span id="currentDay" class="day">{move || face.with(|f| f.weekday.clone())}</span>
				<span id="currentDate" class="date">{move || face.with(|f| f.date.clone())}</span>
			</div>
			<div class="timezone-info">
				<span id="timezoneName">{move || face.with(|f| f.zone_label.clone())}</span>
				" (UTC"
				<span id="utcOffset">{move || face.with(|f| f.utc_offset.clone())}</span>
				")"
			</div>
		</div>
	}
}
