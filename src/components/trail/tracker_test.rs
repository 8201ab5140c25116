use super::*;

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::components::theme::ThemeMode;
use crate::runtime::ManualScheduler;

/// RNG that always yields the same word, to force or suppress marks.
struct Fixed(u64);

impl RngCore for Fixed {
	fn next_u32(&mut self) -> u32 {
		(self.0 >> 32) as u32
	}

	fn next_u64(&mut self) -> u64 {
		self.0
	}

	fn fill_bytes(&mut self, dst: &mut [u8]) {
		dst.fill(0);
	}
}

fn always() -> Fixed {
	Fixed(u64::MAX)
}

fn never() -> Fixed {
	Fixed(0)
}

type Effects = PointerEffects<
	ManualScheduler,
	ManualScheduler,
	Rc<RefCell<PointerTrail>>,
	Rc<RefCell<Transients<TrailMark>>>,
>;

fn effects() -> Effects {
	let scheduler =
		ManualScheduler::starting_at(Utc.with_ymd_and_hms(2024, 6, 1, 8, 0, 0).unwrap());
	PointerEffects {
		scheduler: scheduler.clone(),
		clock: scheduler,
		trail: Rc::new(RefCell::new(PointerTrail::default())),
		marks: Rc::new(RefCell::new(Transients::default())),
	}
}

fn point(x: f64, time_ms: i64) -> TrailPoint {
	TrailPoint { x, y: 0.0, time_ms }
}

// =============================================================
// PointerTrail
// =============================================================

#[test]
fn ring_drops_oldest_beyond_capacity() {
	let mut trail = PointerTrail::default();
	for i in 0..25 {
		trail.record(point(i as f64, i));
	}
	assert_eq!(trail.len(), TRAIL_CAPACITY);
	assert_eq!(trail.points().next().map(|p| p.x), Some(5.0));
	assert_eq!(trail.points().last().map(|p| p.x), Some(24.0));
}

#[test]
fn prune_keeps_only_recent_points() {
	let mut trail = PointerTrail::default();
	trail.record(point(1.0, 0));
	trail.record(point(2.0, 500));
	trail.record(point(3.0, 1001));

	trail.prune(1000);
	let xs: Vec<_> = trail.points().map(|p| p.x).collect();
	assert_eq!(xs, vec![2.0, 3.0]);

	trail.prune(2500);
	assert!(trail.is_empty());
}

// =============================================================
// Marks
// =============================================================

#[test]
fn mark_chance_is_roughly_thirty_percent() {
	let mut rng = StdRng::seed_from_u64(42);
	let hits = (0..10_000).filter(|_| should_mark(&mut rng)).count();
	assert!((2_700..3_300).contains(&hits), "hits = {hits}");
}

#[test]
fn mark_color_follows_theme() {
	let fx = effects();
	fx.on_move(10.0, 20.0, &ThemeMode::Dark, &mut always());
	fx.on_move(30.0, 40.0, &ThemeMode::Light, &mut always());

	let marks = fx.marks.borrow();
	let colors: Vec<_> = marks.iter().map(|k| k.item.color).collect();
	assert_eq!(
		colors,
		vec![ThemeMode::Dark.trail_color(), ThemeMode::Light.trail_color()]
	);
	let style = marks
		.iter()
		.next()
		.map(|k| k.item.style())
		.unwrap_or_default();
	assert!(style.contains("left: 10px; top: 20px"));
	assert!(style.contains("rgba(255, 255, 255, 0.6)"));
}

#[test]
fn unlucky_move_records_without_mark() {
	let fx = effects();
	fx.on_move(1.0, 1.0, &ThemeMode::Dark, &mut never());
	assert_eq!(fx.trail.borrow().len(), 1);
	assert!(fx.marks.borrow().is_empty());
}

#[test]
fn marks_expire_after_one_second() {
	let fx = effects();
	fx.on_move(5.0, 5.0, &ThemeMode::Light, &mut always());

	fx.scheduler.advance(Duration::from_millis(999));
	assert_eq!(fx.marks.borrow().len(), 1);
	fx.scheduler.advance(Duration::from_millis(1));
	assert!(fx.marks.borrow().is_empty());
}

#[test]
fn prune_interval_clears_stale_points() {
	let fx = effects();
	fx.start();

	fx.on_move(0.0, 0.0, &ThemeMode::Light, &mut never());
	fx.scheduler.advance(Duration::from_millis(500));
	fx.on_move(1.0, 1.0, &ThemeMode::Light, &mut never());
	assert_eq!(fx.trail.borrow().len(), 2);

	// First point turns 1000 ms old at t=1000, pruned on that tick.
	fx.scheduler.advance(Duration::from_millis(500));
	assert_eq!(fx.trail.borrow().len(), 1);

	fx.scheduler.advance(Duration::from_millis(500));
	assert!(fx.trail.borrow().is_empty());
}
