//! Canvas rendering for the particle background.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::field::ParticleField;
use crate::components::theme::ThemeQuery;

/// Clears the surface and draws every particle in the theme's particle color.
pub fn render(ctx: &CanvasRenderingContext2d, field: &ParticleField, theme: &impl ThemeQuery) {
	ctx.clear_rect(0.0, 0.0, field.width(), field.height());

	let color = theme.mode().particle_color();
	for p in &field.particles {
		ctx.set_fill_style_str(&color.with_alpha(p.opacity).to_css());

		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.size, 0.0, PI * 2.0);
		ctx.fill();
	}
}
