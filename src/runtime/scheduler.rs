//! Recurring and one-shot task scheduling.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use gloo_timers::callback::{Interval, Timeout};

use super::clock::WallClock;

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

/// Registers callbacks against the page's event loop.
///
/// Nothing scheduled here is ever cancelled: every widget runs for the
/// lifetime of the page.
pub trait Scheduler {
	/// Run `task` every `period`, starting one period from now.
	fn set_interval(&self, period: Duration, task: impl FnMut() + 'static);

	/// Run `task` once after `delay`.
	fn set_timeout(&self, delay: Duration, task: impl FnOnce() + 'static);

	/// Run `task` immediately, then every `period`.
	fn run_and_repeat(&self, period: Duration, task: impl FnMut() + 'static) {
		let task = Rc::new(RefCell::new(task));
		(*task.borrow_mut())();
		self.set_interval(period, move || (*task.borrow_mut())());
	}
}

/// Scheduler backed by `setInterval`/`setTimeout` through `gloo-timers`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

fn as_millis(duration: Duration) -> u32 {
	u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}

impl Scheduler for BrowserScheduler {
	fn set_interval(&self, period: Duration, task: impl FnMut() + 'static) {
		Interval::new(as_millis(period), task).forget();
	}

	fn set_timeout(&self, delay: Duration, task: impl FnOnce() + 'static) {
		Timeout::new(as_millis(delay), task).forget();
	}
}

enum Task {
	Once(Box<dyn FnOnce()>),
	Every(Duration, Box<dyn FnMut()>),
}

struct Pending {
	due: Duration,
	seq: u64,
	task: Task,
}

#[derive(Default)]
struct VirtualTime {
	elapsed: Duration,
	next_seq: u64,
	pending: Vec<Pending>,
}

impl VirtualTime {
	fn push(&mut self, due: Duration, task: Task) {
		let seq = self.next_seq;
		self.next_seq += 1;
		self.pending.push(Pending { due, seq, task });
	}

	/// Remove the earliest task due at or before `limit`, ties broken by
	/// registration order.
	fn pop_due(&mut self, limit: Duration) -> Option<Pending> {
		let idx = self
			.pending
			.iter()
			.enumerate()
			.filter(|(_, p)| p.due <= limit)
			.min_by_key(|(_, p)| (p.due, p.seq))
			.map(|(i, _)| i)?;
		Some(self.pending.swap_remove(idx))
	}
}

/// Deterministic scheduler driven by [`ManualScheduler::advance`].
///
/// Also acts as a [`WallClock`] whose current instant is the epoch plus the
/// virtual time elapsed so far, so clock-driven widgets see time move in
/// lockstep with their timers.
#[derive(Clone)]
pub struct ManualScheduler {
	epoch: DateTime<Utc>,
	local_offset_minutes: i32,
	state: Rc<RefCell<VirtualTime>>,
}

impl ManualScheduler {
	/// Start virtual time at `epoch`, with the viewer's local zone at UTC.
	pub fn starting_at(epoch: DateTime<Utc>) -> Self {
		Self {
			epoch,
			local_offset_minutes: 0,
			state: Rc::new(RefCell::new(VirtualTime::default())),
		}
	}

	/// Set the offset reported as the viewer's local zone, in minutes east of UTC.
	pub fn with_local_offset(mut self, minutes: i32) -> Self {
		self.local_offset_minutes = minutes;
		self
	}

	/// Virtual time elapsed since the epoch.
	pub fn elapsed(&self) -> Duration {
		self.state.borrow().elapsed
	}

	/// Number of registered tasks still waiting to fire.
	pub fn pending(&self) -> usize {
		self.state.borrow().pending.len()
	}

	/// Move virtual time forward, firing every task that falls due in order.
	///
	/// Tasks may schedule more work while running; anything that lands inside
	/// the window fires during the same call.
	pub fn advance(&self, by: Duration) {
		let target = self.elapsed() + by;
		loop {
			let next = {
				let mut state = self.state.borrow_mut();
				match state.pop_due(target) {
					Some(pending) => {
						state.elapsed = pending.due;
						pending
					}
					None => {
						state.elapsed = target;
						break;
					}
				}
			};

			match next.task {
				Task::Once(task) => task(),
				Task::Every(period, mut task) => {
					task();
					self.state
						.borrow_mut()
						.push(next.due + period, Task::Every(period, task));
				}
			}
		}
	}
}

impl Scheduler for ManualScheduler {
	fn set_interval(&self, period: Duration, task: impl FnMut() + 'static) {
		// A zero period would never let virtual time move past `due`.
		let period = period.max(Duration::from_millis(1));
		let mut state = self.state.borrow_mut();
		let due = state.elapsed + period;
		state.push(due, Task::Every(period, Box::new(task)));
	}

	fn set_timeout(&self, delay: Duration, task: impl FnOnce() + 'static) {
		let mut state = self.state.borrow_mut();
		let due = state.elapsed + delay;
		state.push(due, Task::Once(Box::new(task)));
	}
}

impl WallClock for ManualScheduler {
	fn now(&self) -> DateTime<Utc> {
		let elapsed = TimeDelta::from_std(self.elapsed()).unwrap_or_default();
		self.epoch + elapsed
	}

	fn local_offset_minutes(&self) -> i32 {
		self.local_offset_minutes
	}
}
