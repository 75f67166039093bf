//! Frame rendering for the constellation.
//!
//! Each frame is drawn in a fixed order:
//! 1. Clear the whole logical area (no trails)
//! 2. Every particle as a dot
//! 3. A line for every pair closer than the link cutoff, on top of the dots
//!
//! The pair scan is quadratic. The particle cap keeps it at most
//! `n * (n - 1) / 2` distance checks per frame.

use super::particles::Particle;
use super::surface::DrawingSurface;
use super::theme::Theme;

/// What a single frame drew.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
	pub dots: usize,
	pub links: usize,
}

/// Draws one complete frame of `particles` onto `surface`.
pub fn render<S: DrawingSurface + ?Sized>(
	surface: &mut S,
	particles: &[Particle],
	width: f64,
	height: f64,
	theme: &Theme,
) -> RenderStats {
	surface.clear_rect(width, height);

	let dots = draw_dots(surface, particles, theme);
	let links = draw_links(surface, particles, theme);

	RenderStats { dots, links }
}

fn draw_dots<S: DrawingSurface + ?Sized>(
	surface: &mut S,
	particles: &[Particle],
	theme: &Theme,
) -> usize {
	let dot = &theme.dot;
	for p in particles {
		surface.fill_circle(p.x, p.y, dot.radius, dot.color);
	}
	particles.len()
}

fn draw_links<S: DrawingSurface + ?Sized>(
	surface: &mut S,
	particles: &[Particle],
	theme: &Theme,
) -> usize {
	let link = &theme.link;
	let mut drawn = 0;

	for (i, a) in particles.iter().enumerate() {
		for b in &particles[i + 1..] {
			let Some(alpha) = link.alpha_at(a.distance_to(b)) else {
				continue;
			};
			surface.stroke_line(
				(a.x, a.y),
				(b.x, b.y),
				link.color.with_alpha(alpha),
				link.width,
			);
			drawn += 1;
		}
	}

	drawn
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::constellation::surface::testing::{DrawOp, RecordingSurface};
	use crate::components::constellation::theme::Color;

	fn still(x: f64, y: f64) -> Particle {
		Particle::new(x, y, 0.0, 0.0)
	}

	#[test]
	fn test_empty_frame_only_clears() {
		let mut surface = RecordingSurface::default();
		let stats = render(&mut surface, &[], 0.0, 0.0, &Theme::default());

		assert_eq!(stats, RenderStats::default());
		assert_eq!(surface.ops, vec![DrawOp::Clear(0.0, 0.0)]);
	}

	#[test]
	fn test_draw_order_clear_dots_lines() {
		let mut surface = RecordingSurface::default();
		let particles = [still(10.0, 10.0), still(20.0, 10.0), still(30.0, 10.0)];
		let stats = render(&mut surface, &particles, 400.0, 300.0, &Theme::default());

		assert_eq!(stats, RenderStats { dots: 3, links: 3 });
		assert_eq!(surface.ops[0], DrawOp::Clear(400.0, 300.0));
		assert!(
			surface.ops[1..4]
				.iter()
				.all(|op| matches!(op, DrawOp::Circle { .. }))
		);
		assert!(
			surface.ops[4..]
				.iter()
				.all(|op| matches!(op, DrawOp::Line { .. }))
		);
	}

	#[test]
	fn test_dot_style() {
		let mut surface = RecordingSurface::default();
		render(&mut surface, &[still(5.0, 6.0)], 100.0, 100.0, &Theme::default());

		assert_eq!(
			surface.ops[1],
			DrawOp::Circle {
				x: 5.0,
				y: 6.0,
				radius: 1.4,
				color: Color::rgba(244, 251, 255, 0.45),
			}
		);
	}

	#[test]
	fn test_link_alpha_and_pair_order() {
		let mut surface = RecordingSurface::default();
		let particles = [still(0.0, 0.0), still(120.0, 0.0)];
		render(&mut surface, &particles, 200.0, 200.0, &Theme::default());

		let lines = surface.lines();
		assert_eq!(lines.len(), 1);
		let DrawOp::Line {
			from,
			to,
			color,
			width,
		} = lines[0]
		else {
			unreachable!()
		};
		assert_eq!(*from, (0.0, 0.0));
		assert_eq!(*to, (120.0, 0.0));
		assert_eq!(*width, 1.0);
		assert_eq!((color.r, color.g, color.b), (43, 228, 255));
		assert!((color.a - (0.16 - 0.1)).abs() < 1e-12);
	}

	#[test]
	fn test_cutoff_is_exclusive() {
		let mut surface = RecordingSurface::default();
		let particles = [still(0.0, 0.0), still(140.0, 0.0), still(0.0, 139.5)];
		let stats = render(&mut surface, &particles, 300.0, 300.0, &Theme::default());

		// (0,1) at exactly 140 is skipped, (0,2) links, (1,2) is ~197 apart.
		assert_eq!(stats.links, 1);
	}

	#[test]
	fn test_coincident_particles_link_at_full_alpha() {
		let mut surface = RecordingSurface::default();
		let particles = [still(50.0, 50.0), still(50.0, 50.0)];
		render(&mut surface, &particles, 100.0, 100.0, &Theme::default());

		let DrawOp::Line { color, .. } = surface.lines()[0] else {
			unreachable!()
		};
		assert_eq!(color.a, 0.16);
	}

	#[test]
	fn test_dense_cluster_links_every_pair() {
		let mut surface = RecordingSurface::default();
		let particles: Vec<_> = (0..120).map(|i| still(i as f64 * 0.5, 10.0)).collect();
		let stats = render(&mut surface, &particles, 100.0, 100.0, &Theme::default());

		assert_eq!(stats.dots, 120);
		assert_eq!(stats.links, 120 * 119 / 2);
		assert_eq!(surface.clears(), 1);
		assert_eq!(surface.circles(), 120);
	}
}
