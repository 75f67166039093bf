//! Engine configuration, deserializable from page-embedded JSON.
//!
//! Every field is optional; an empty object yields the reference look.

use log::warn;
use serde::Deserialize;

use super::error::ConstellationError;
use super::particles::PARTICLE_CAP;
use super::theme::{DotStyle, LinkStyle, Theme};

/// Particle population and speed settings.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
	/// Particle count ceiling; can lower the built-in cap but not raise it
	pub max_particles: usize,
	/// Logical pixels of width per particle
	pub spacing: f64,
	/// Largest velocity magnitude per axis, in logical pixels per frame
	pub max_speed: f64,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			max_particles: PARTICLE_CAP,
			spacing: 12.0,
			max_speed: 0.275,
		}
	}
}

/// Top-level configuration for the constellation engine.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConstellationConfig {
	/// Theme preset name; unknown names fall back to the default theme.
	pub preset: Option<String>,
	pub field: FieldConfig,
	/// Overrides the preset's dot style.
	pub dot: Option<DotStyle>,
	/// Overrides the preset's link style.
	pub link: Option<LinkStyle>,
}

impl ConstellationConfig {
	/// Parse a JSON document.
	pub fn from_json(json: &str) -> Result<Self, ConstellationError> {
		serde_json::from_str(json).map_err(|e| ConstellationError::InvalidConfig(e.to_string()))
	}

	/// Resolve the preset and apply dot/link overrides.
	pub fn theme(&self) -> Theme {
		let mut theme = match self.preset.as_deref() {
			None => Theme::default(),
			Some(name) => Theme::preset(name).unwrap_or_else(|| {
				warn!("constellation: unknown theme preset {:?}, using default", name);
				Theme::default()
			}),
		};
		if let Some(dot) = &self.dot {
			theme.dot = dot.clone();
		}
		if let Some(link) = &self.link {
			theme.link = link.clone();
		}
		theme
	}
}
