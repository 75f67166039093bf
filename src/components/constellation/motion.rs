//! Per-frame motion integration with edge reflection.

use super::particles::Particle;

/// Advance every particle by one frame and reflect at the surface edges.
///
/// Translation happens first, then each axis is checked independently: a
/// particle at or past an edge has that velocity component negated. Position
/// is left where it landed, so a particle may sit up to one step outside the
/// surface until the reversed velocity carries it back.
pub fn step(particles: &mut [Particle], width: f64, height: f64) {
	for p in particles.iter_mut() {
		p.x += p.vx;
		p.y += p.vy;

		if p.x <= 0.0 || p.x >= width {
			p.vx = -p.vx;
		}
		if p.y <= 0.0 || p.y >= height {
			p.vy = -p.vy;
		}
	}
}
