//! Visual theming for the constellation background.
//!
//! Provides colors, dot and link styles, and the named default theme.

use serde::Deserialize;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	#[serde(default = "opaque")]
	pub a: f64,
}

fn opaque() -> f64 {
	1.0
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Particle dot style.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DotStyle {
	/// Dot radius in logical pixels
	pub radius: f64,
	/// Fill color, alpha included
	pub color: Color,
}

impl Default for DotStyle {
	fn default() -> Self {
		Self {
			radius: 1.4,
			color: Color::rgba(244, 251, 255, 0.45),
		}
	}
}

/// Proximity line style.
///
/// A line is drawn between two particles closer than `max_distance`. Its
/// alpha starts at `max_alpha` for coincident particles and drops by one unit
/// per `falloff` logical pixels of separation.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LinkStyle {
	/// Stroke color; its alpha is replaced by the distance falloff
	pub color: Color,
	/// Exclusive distance cutoff in logical pixels
	pub max_distance: f64,
	/// Alpha of a zero-length link
	pub max_alpha: f64,
	/// Distance over which alpha drops by 1.0
	pub falloff: f64,
	/// Stroke width in logical pixels
	pub width: f64,
}

impl Default for LinkStyle {
	fn default() -> Self {
		Self {
			color: Color::rgb(43, 228, 255),
			max_distance: 140.0,
			max_alpha: 0.16,
			falloff: 1200.0,
			width: 1.0,
		}
	}
}

impl LinkStyle {
	/// Stroke alpha for a pair `distance` apart, or `None` when no line is drawn.
	pub fn alpha_at(&self, distance: f64) -> Option<f64> {
		if distance.is_nan() || distance >= self.max_distance {
			return None;
		}
		Some((self.max_alpha - distance / self.falloff).max(0.0))
	}
}

/// Complete visual theme.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
	pub name: &'static str,
	pub dot: DotStyle,
	pub link: LinkStyle,
}

impl Theme {
	/// Pale dots with cyan links (default)
	pub fn constellation() -> Self {
		Self {
			name: "constellation",
			dot: DotStyle::default(),
			link: LinkStyle::default(),
		}
	}

	/// Look up a preset by name.
	pub fn preset(name: &str) -> Option<Self> {
		match name.to_lowercase().as_str() {
			"constellation" | "default" => Some(Self::constellation()),
			_ => None,
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::constellation()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_color_to_css() {
		assert_eq!(Color::rgb(43, 228, 255).to_css(), "#2be4ff");
		assert_eq!(
			Color::rgba(244, 251, 255, 0.45).to_css(),
			"rgba(244, 251, 255, 0.45)"
		);
	}

	#[test]
	fn test_alpha_at_reference_points() {
		let link = LinkStyle::default();

		assert_eq!(link.alpha_at(0.0), Some(0.16));

		let near_cutoff = link.alpha_at(139.99).unwrap();
		assert!((near_cutoff - 0.043_341_666).abs() < 1e-6);

		assert_eq!(link.alpha_at(140.0), None);
		assert_eq!(link.alpha_at(500.0), None);
		assert_eq!(link.alpha_at(f64::NAN), None);
	}

	#[test]
	fn test_alpha_clamped_when_falloff_outruns_cutoff() {
		let link = LinkStyle {
			max_distance: 400.0,
			..LinkStyle::default()
		};
		assert_eq!(link.alpha_at(300.0), Some(0.0));
	}

	#[test]
	fn test_presets() {
		assert_eq!(Theme::preset("default"), Some(Theme::constellation()));
		assert_eq!(
			Theme::preset("Constellation").map(|t| t.name),
			Some("constellation")
		);
		assert!(Theme::preset("neon").is_none());
	}

	#[test]
	fn test_color_alpha_defaults_to_opaque() {
		let color: Color = serde_json::from_str(r#"{"r": 1, "g": 2, "b": 3}"#).unwrap();
		assert_eq!(color, Color::rgb(1, 2, 3));
	}

	proptest! {
		#[test]
		fn link_drawn_iff_below_cutoff(d in 0.0f64..400.0) {
			let link = LinkStyle::default();
			match link.alpha_at(d) {
				Some(alpha) => {
					prop_assert!(d < 140.0);
					prop_assert!(alpha > 0.0);
					prop_assert!(alpha <= 0.16);
					prop_assert!((alpha - (0.16 - d / 1200.0)).abs() < 1e-12);
				}
				None => prop_assert!(d >= 140.0),
			}
		}
	}
}
