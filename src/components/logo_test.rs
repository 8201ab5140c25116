use super::*;

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{TimeZone, Utc};

use crate::runtime::ManualScheduler;

fn scheduler() -> ManualScheduler {
	ManualScheduler::starting_at(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap())
}

#[test]
fn click_clears_then_restores_animation() {
	let scheduler = scheduler();
	let animation = Rc::new(RefCell::new(LOGO_ANIMATION));

	restart_animation(&scheduler, &animation);
	assert_eq!(*animation.borrow(), "none");

	scheduler.advance(Duration::from_millis(99));
	assert_eq!(*animation.borrow(), "none");

	scheduler.advance(Duration::from_millis(1));
	assert_eq!(*animation.borrow(), LOGO_ANIMATION);
}

#[test]
fn rapid_clicks_settle_on_the_animation() {
	let scheduler = scheduler();
	let animation = Rc::new(RefCell::new(LOGO_ANIMATION));

	restart_animation(&scheduler, &animation);
	scheduler.advance(Duration::from_millis(50));
	restart_animation(&scheduler, &animation);
	scheduler.advance(Duration::from_millis(50));
	assert_eq!(*animation.borrow(), LOGO_ANIMATION);

	scheduler.advance(Duration::from_millis(50));
	assert_eq!(*animation.borrow(), LOGO_ANIMATION);
	assert_eq!(scheduler.pending(), 0);
}
