//! Pointer-following effects.
//!
//! Every pointer move is recorded into a short ring of recent positions and,
//! now and then, leaves a small fading dot behind. The ring is pruned on a
//! fixed interval; only the dots are visible.

mod component;
mod tracker;

pub use component::PointerTrailLayer;
pub use tracker::{
	MARK_CHANCE, MARK_LIFETIME, PRUNE_PERIOD, PointerEffects, PointerTrail, TRAIL_CAPACITY,
	TRAIL_MAX_AGE_MS, TrailMark, TrailPoint, should_mark,
};
