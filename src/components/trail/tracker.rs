//! Pointer trail bookkeeping and decorative marks.

use std::collections::VecDeque;
use std::time::Duration;

use rand::Rng;

use crate::components::theme::{Color, ThemeQuery};
use crate::components::transient::{Transients, show_for};
use crate::runtime::{Scheduler, Shared, WallClock};

#[cfg(test)]
#[path = "tracker_test.rs"]
mod tracker_test;

/// Points kept in the trail ring.
pub const TRAIL_CAPACITY: usize = 20;
/// Points older than this are pruned.
pub const TRAIL_MAX_AGE_MS: i64 = 1000;
/// How often old points are pruned.
pub const PRUNE_PERIOD: Duration = Duration::from_millis(100);
/// How long a mark stays on screen; matches `trail-fade`.
pub const MARK_LIFETIME: Duration = Duration::from_millis(1000);
/// Probability that a single pointer move drops a mark.
pub const MARK_CHANCE: f64 = 0.3;

/// A recorded pointer position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailPoint {
	/// Horizontal position in pixels.
	pub x: f64,
	/// Vertical position in pixels.
	pub y: f64,
	/// Unix milliseconds.
	pub time_ms: i64,
}

/// Bounded ring of recent pointer positions, oldest first.
#[derive(Clone, Debug, Default)]
pub struct PointerTrail {
	points: VecDeque<TrailPoint>,
}

impl PointerTrail {
	/// Append a point, dropping the oldest beyond [`TRAIL_CAPACITY`].
	pub fn record(&mut self, point: TrailPoint) {
		self.points.push_back(point);
		while self.points.len() > TRAIL_CAPACITY {
			self.points.pop_front();
		}
	}

	/// Drop points at least [`TRAIL_MAX_AGE_MS`] old.
	pub fn prune(&mut self, now_ms: i64) {
		self.points
			.retain(|p| now_ms - p.time_ms < TRAIL_MAX_AGE_MS);
	}

	/// Number of items held.
	pub fn len(&self) -> usize {
		self.points.len()
	}

	/// Whether nothing is held.
	pub fn is_empty(&self) -> bool {
		self.points.is_empty()
	}

	/// Points oldest first.
	pub fn points(&self) -> impl Iterator<Item = &TrailPoint> {
		self.points.iter()
	}
}

/// A small fading dot left at the pointer position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailMark {
	/// Horizontal position in pixels.
	pub x: f64,
	/// Vertical position in pixels.
	pub y: f64,
	/// Fill, from the active theme.
	pub color: Color,
}

impl TrailMark {
	/// Inline style for the mark element.
	pub fn style(&self) -> String {
		format!(
			"position: fixed; left: {}px; top: {}px; width: 6px; height: 6px; \
			 background: {}; border-radius: 50%; pointer-events: none; z-index: 1000; \
			 animation: trail-fade 1s ease-out forwards;",
			self.x,
			self.y,
			self.color.to_css()
		)
	}
}

/// Whether this pointer move should leave a mark.
pub fn should_mark(rng: &mut impl Rng) -> bool {
	rng.random::<f64>() > 1.0 - MARK_CHANCE
}

/// Pointer-move handling shared by the page and tests.
#[derive(Clone)]
pub struct PointerEffects<S, C, T, M> {
	/// Runs pruning and mark removal.
	pub scheduler: S,
	/// Timestamps for recorded points.
	pub clock: C,
	/// Recent pointer positions.
	pub trail: T,
	/// Visible marks.
	pub marks: M,
}

impl<S, C, T, M> PointerEffects<S, C, T, M>
where
	S: Scheduler + Clone + 'static,
	C: WallClock + Clone + 'static,
	T: Shared<PointerTrail>,
	M: Shared<Transients<TrailMark>>,
{
	/// Start the periodic trail pruning.
	pub fn start(&self) {
		let (clock, trail) = (self.clock.clone(), self.trail.clone());
		self.scheduler.set_interval(PRUNE_PERIOD, move || {
			let now = clock.now_millis();
			trail.modify(|t| t.prune(now));
		});
	}

	/// Record a pointer move and maybe drop a mark.
	pub fn on_move(&self, x: f64, y: f64, theme: &impl ThemeQuery, rng: &mut impl Rng) {
		let time_ms = self.clock.now_millis();
		self.trail
			.modify(|t| t.record(TrailPoint { x, y, time_ms }));

		if should_mark(rng) {
			let mark = TrailMark {
				x,
				y,
				color: theme.mode().trail_color(),
			};
			show_for(&self.scheduler, &self.marks, MARK_LIFETIME, mark);
		}
	}
}
