//! Particle state and field regeneration.

use rand::Rng;

use super::config::FieldConfig;

/// A single drifting point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
}

impl Particle {
	pub fn new(x: f64, y: f64, vx: f64, vy: f64) -> Self {
		Self { x, y, vx, vy }
	}

	/// Euclidean distance to `other`.
	pub fn distance_to(&self, other: &Particle) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// Upper bound on particles per field, whatever the configuration says.
///
/// Rendering checks every pair each frame, so this also bounds that scan to
/// `PARTICLE_CAP * (PARTICLE_CAP - 1) / 2` distance checks.
pub const PARTICLE_CAP: usize = 120;

/// Number of particles for a surface `width` logical pixels wide.
///
/// Density scales with width, capped at `config.max_particles` and never
/// above [`PARTICLE_CAP`].
pub fn particle_count(width: f64, config: &FieldConfig) -> usize {
	if config.spacing.is_nan() || config.spacing <= 0.0 {
		return 0;
	}
	// Saturating cast: negative and NaN map to zero.
	let by_width = (width / config.spacing).floor() as usize;
	by_width.min(config.max_particles).min(PARTICLE_CAP)
}

/// The ordered set of particles on the surface.
///
/// Replaced wholesale on every resize; never grown or shrunk in place.
#[derive(Clone, Debug, Default)]
pub struct ParticleField {
	particles: Vec<Particle>,
}

impl ParticleField {
	/// Build a fresh field for a `width` × `height` surface.
	///
	/// Positions are uniform in `[0, width) × [0, height)`, velocities uniform
	/// in `[-max_speed, max_speed)` per axis.
	pub fn regenerate<R: Rng + ?Sized>(
		width: f64,
		height: f64,
		config: &FieldConfig,
		rng: &mut R,
	) -> Self {
		let count = particle_count(width, config);
		let speed = config.max_speed;
		let particles = (0..count)
			.map(|_| Particle {
				x: rng.random::<f64>() * width,
				y: rng.random::<f64>() * height,
				vx: (rng.random::<f64>() * 2.0 - 1.0) * speed,
				vy: (rng.random::<f64>() * 2.0 - 1.0) * speed,
			})
			.collect();

		Self { particles }
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn particles_mut(&mut self) -> &mut [Particle] {
		&mut self.particles
	}

	pub fn len(&self) -> usize {
		self.particles.len()
	}

	pub fn is_empty(&self) -> bool {
		self.particles.is_empty()
	}
}
