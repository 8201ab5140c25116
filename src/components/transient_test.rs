use super::*;

use std::cell::RefCell;
use std::rc::Rc;

use chrono::{TimeZone, Utc};

use crate::runtime::ManualScheduler;

fn scheduler() -> ManualScheduler {
	ManualScheduler::starting_at(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
}

#[test]
fn ids_are_unique_and_ordered() {
	let mut layer = Transients::default();
	let a = layer.push("a");
	let b = layer.push("b");
	assert!(b > a);
	assert_eq!(layer.len(), 2);

	layer.remove(a);
	let c = layer.push("c");
	assert_ne!(c, a);
	let items: Vec<_> = layer.iter().map(|k| k.item).collect();
	assert_eq!(items, vec!["b", "c"]);
}

#[test]
fn item_disappears_after_lifetime() {
	let scheduler = scheduler();
	let layer = Rc::new(RefCell::new(Transients::default()));

	show_for(&scheduler, &layer, Duration::from_millis(600), 'r');
	assert_eq!(layer.borrow().len(), 1);

	scheduler.advance(Duration::from_millis(599));
	assert_eq!(layer.borrow().len(), 1);

	scheduler.advance(Duration::from_millis(1));
	assert!(layer.borrow().is_empty());
}

#[test]
fn overlapping_items_expire_independently() {
	let scheduler = scheduler();
	let layer = Rc::new(RefCell::new(Transients::default()));

	let first = show_for(&scheduler, &layer, Duration::from_millis(1000), 1);
	scheduler.advance(Duration::from_millis(500));
	let second = show_for(&scheduler, &layer, Duration::from_millis(1000), 2);

	scheduler.advance(Duration::from_millis(500));
	let left: Vec<_> = layer.borrow().iter().map(|k| k.id).collect();
	assert_eq!(left, vec![second]);
	assert_ne!(first, second);

	scheduler.advance(Duration::from_millis(500));
	assert!(layer.borrow().is_empty());
}
