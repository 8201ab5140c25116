//! Ambient particle simulation.

use rand::Rng;

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

/// Largest per-axis speed, in pixels per frame.
pub const MAX_SPEED: f64 = 0.25;

/// A single floating particle.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Horizontal position in pixels.
	pub x: f64,
	/// Vertical position in pixels.
	pub y: f64,
	/// Pixels per frame.
	pub vx: f64,
	/// Pixels per frame.
	pub vy: f64,
	/// Radius in pixels, in `[1, 4)`.
	pub size: f64,
	/// Fill alpha, in `[0.2, 0.7)`.
	pub opacity: f64,
}

impl Particle {
	/// A particle placed uniformly inside `width` × `height`.
	pub fn random(rng: &mut impl Rng, width: f64, height: f64) -> Self {
		Self {
			x: rng.random::<f64>() * width,
			y: rng.random::<f64>() * height,
			vx: (rng.random::<f64>() - 0.5) * 2.0 * MAX_SPEED,
			vy: (rng.random::<f64>() - 0.5) * 2.0 * MAX_SPEED,
			size: rng.random::<f64>() * 3.0 + 1.0,
			opacity: rng.random::<f64>() * 0.5 + 0.2,
		}
	}
}

/// Advance one axis and bounce it off `[0, extent]`.
///
/// Returns the new `(position, velocity)`. The position is pulled back onto
/// the edge it crossed so it never leaves the surface.
fn reflect(position: f64, velocity: f64, extent: f64) -> (f64, f64) {
	let next = position + velocity;
	if next < 0.0 {
		(0.0, -velocity)
	} else if next > extent {
		(extent, -velocity)
	} else {
		(next, velocity)
	}
}

/// Manages the full-viewport set of background particles.
pub struct ParticleField {
	/// Current particles, replaced wholesale on resize.
	pub particles: Vec<Particle>,
	count: usize,
	width: f64,
	height: f64,
}

impl ParticleField {
	/// Populate `count` particles inside `width` × `height`.
	pub fn new(count: usize, width: f64, height: f64, rng: &mut impl Rng) -> Self {
		let mut field = Self {
			particles: Vec::with_capacity(count),
			count,
			width,
			height,
		};
		field.populate(rng);
		field
	}

	fn populate(&mut self, rng: &mut impl Rng) {
		self.particles.clear();
		for _ in 0..self.count {
			self.particles
				.push(Particle::random(rng, self.width, self.height));
		}
	}

	/// Surface width in pixels.
	pub fn width(&self) -> f64 {
		self.width
	}

	/// Surface height in pixels.
	pub fn height(&self) -> f64 {
		self.height
	}

	/// Move every particle one frame, reflecting off the surface edges.
	pub fn step(&mut self) {
		for p in &mut self.particles {
			(p.x, p.vx) = reflect(p.x, p.vx, self.width);
			(p.y, p.vy) = reflect(p.y, p.vy, self.height);
		}
	}

	/// Adopt new bounds and replace every particle.
	pub fn resize(&mut self, width: f64, height: f64, rng: &mut impl Rng) {
		self.width = width;
		self.height = height;
		self.populate(rng);
	}
}
