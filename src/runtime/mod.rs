//! Time sources and task scheduling shared by every widget.
//!
//! Widgets never call browser timers or `Date` directly. They take a
//! [`Scheduler`] and a [`WallClock`], so the browser build can hand them
//! `gloo-timers` and `chrono`, while tests drive a [`ManualScheduler`]
//! through virtual time. State that those callbacks mutate sits behind
//! [`Shared`], a reactive signal in the page and a plain cell in tests.

mod clock;
mod scheduler;
mod shared;

pub use clock::{SystemClock, WallClock};
pub use scheduler::{BrowserScheduler, ManualScheduler, Scheduler};
pub use shared::Shared;

use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Build a small RNG seeded from the browser's `Math.random`.
///
/// The crate avoids `getrandom` on wasm32, so randomness for decorative
/// effects is bootstrapped from JavaScript instead.
pub fn browser_rng() -> SmallRng {
	let seed = js_sys::Math::random() * u64::MAX as f64;
	SmallRng::seed_from_u64(seed as u64)
}
