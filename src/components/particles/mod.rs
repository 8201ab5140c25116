//! Decorative particle background.
//!
//! A fixed number of translucent dots drift across a full-viewport canvas,
//! bouncing off its edges. Resizing the window regenerates the whole set.
//! Particles are white in dark mode and black in light mode.

mod component;
mod field;
mod render;

pub use component::ParticleBackground;
pub use field::{MAX_SPEED, Particle, ParticleField};
