//! Digital clock with timezone label.
//!
//! The face is recomputed every second for the configured display zone. The
//! UTC offset beside it is the viewer's own offset, so the two disagree when
//! the viewer is not in the display zone.

mod component;
mod face;

pub use component::DigitalClock;
pub use face::{ClockFace, DisplayZone, TICK, format_utc_offset, start_clock, zone_label};
