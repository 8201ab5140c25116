//! Click ripple drawn over the theme toggle.

use std::time::Duration;

#[cfg(test)]
#[path = "ripple_test.rs"]
mod ripple_test;

/// How long a ripple stays in the DOM; matches `ripple-animation`.
pub const RIPPLE_LIFETIME: Duration = Duration::from_millis(600);

/// A circular overlay sized to cover the control it was spawned on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ripple {
	/// Largest side of the host control, in pixels.
	pub size: f64,
}

impl Ripple {
	/// Ripple sized for a `width` × `height` element.
	pub fn covering(width: f64, height: f64) -> Self {
		Self {
			size: width.max(height),
		}
	}

	/// Twice the covered size.
	pub fn diameter(&self) -> f64 {
		self.size * 2.0
	}

	/// Left/top offset that centers the circle on the control.
	pub fn offset(&self) -> f64 {
		-self.size / 2.0
	}

	/// Inline style for the ripple element.
	pub fn style(&self) -> String {
		let (d, o) = (self.diameter(), self.offset());
		format!(
			"position: absolute; width: {d}px; height: {d}px; left: {o}px; top: {o}px; \
			 background: rgba(255, 255, 255, 0.3); border-radius: 50%; transform: scale(0); \
			 animation: ripple-animation 0.6s ease-out; pointer-events: none;"
		)
	}
}
