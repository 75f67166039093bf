//! Drawing surface abstraction and resolution-aware sizing.
//!
//! # Coordinate Spaces
//!
//! - **Logical pixels**: CSS pixels. The engine simulates and draws in this
//!   space exclusively.
//! - **Device pixels**: the canvas backing store, `logical * pixel_ratio` on
//!   each axis so lines stay sharp on high-density displays.
//!
//! [`configure`] bridges the two by installing a uniform scale transform that
//! replaces, never composes with, whatever transform was there before.

use super::theme::Color;

/// A 2D raster target the engine can draw into.
///
/// All coordinates are logical pixels once [`configure`] has run.
pub trait DrawingSurface {
	/// Resize the backing store, in device pixels.
	fn set_backing_size(&mut self, width: u32, height: u32);
	/// Resize the displayed element, in logical pixels.
	fn set_display_size(&mut self, width: f64, height: f64);
	/// Replace the current transform with `transform`.
	fn set_transform(&mut self, transform: Transform);
	/// Clear `[0, width) × [0, height)`.
	fn clear_rect(&mut self, width: f64, height: f64);
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);
	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, width: f64);
}

/// Viewport dimensions as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
	/// Device pixels per logical pixel.
	pub pixel_ratio: f64,
}

impl Viewport {
	pub fn new(width: f64, height: f64, pixel_ratio: f64) -> Self {
		Self {
			width,
			height,
			pixel_ratio,
		}
	}
}

/// Uniform scale transform from logical to device pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
	pub scale: f64,
}

impl Transform {
	pub fn uniform(scale: f64) -> Self {
		Self { scale }
	}

	/// Canvas-style `[a, b, c, d, e, f]` matrix.
	pub fn matrix(&self) -> [f64; 6] {
		[self.scale, 0.0, 0.0, self.scale, 0.0, 0.0]
	}
}

/// Surface dimensions and transform after a [`configure`] call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceState {
	pub width: f64,
	pub height: f64,
	pub pixel_ratio: f64,
	pub transform: Transform,
}

impl SurfaceState {
	/// Backing-store size in device pixels.
	pub fn backing_size(&self) -> (u32, u32) {
		(
			(self.width * self.pixel_ratio) as u32,
			(self.height * self.pixel_ratio) as u32,
		)
	}
}

/// Non-finite or non-positive ratios mean the host had nothing useful to say.
fn effective_ratio(pixel_ratio: f64) -> f64 {
	if pixel_ratio.is_finite() && pixel_ratio > 0.0 {
		pixel_ratio
	} else {
		1.0
	}
}

fn effective_extent(extent: f64) -> f64 {
	if extent.is_finite() { extent.max(0.0) } else { 0.0 }
}

/// Size `surface` for `viewport` and install the logical-pixel transform.
pub fn configure<S: DrawingSurface + ?Sized>(surface: &mut S, viewport: Viewport) -> SurfaceState {
	let pixel_ratio = effective_ratio(viewport.pixel_ratio);
	let state = SurfaceState {
		width: effective_extent(viewport.width),
		height: effective_extent(viewport.height),
		pixel_ratio,
		transform: Transform::uniform(pixel_ratio),
	};

	let (backing_w, backing_h) = state.backing_size();
	surface.set_backing_size(backing_w, backing_h);
	surface.set_display_size(state.width, state.height);
	surface.set_transform(state.transform);

	state
}

#[cfg(test)]
pub(crate) mod testing {
	use super::*;

	/// One recorded drawing primitive.
	#[derive(Clone, Debug, PartialEq)]
	pub enum DrawOp {
		BackingSize(u32, u32),
		DisplaySize(f64, f64),
		SetTransform(Transform),
		Clear(f64, f64),
		Circle {
			x: f64,
			y: f64,
			radius: f64,
			color: Color,
		},
		Line {
			from: (f64, f64),
			to: (f64, f64),
			color: Color,
			width: f64,
		},
	}

	/// Records every call, and tracks the effective transform like a canvas would.
	#[derive(Debug, Default)]
	pub struct RecordingSurface {
		pub ops: Vec<DrawOp>,
		pub backing: (u32, u32),
		pub display: (f64, f64),
		pub transform: Option<Transform>,
	}

	impl RecordingSurface {
		pub fn circles(&self) -> usize {
			self.ops
				.iter()
				.filter(|op| matches!(op, DrawOp::Circle { .. }))
				.count()
		}

		pub fn lines(&self) -> Vec<&DrawOp> {
			self.ops
				.iter()
				.filter(|op| matches!(op, DrawOp::Line { .. }))
				.collect()
		}

		pub fn clears(&self) -> usize {
			self.ops
				.iter()
				.filter(|op| matches!(op, DrawOp::Clear(..)))
				.count()
		}
	}

	impl DrawingSurface for RecordingSurface {
		fn set_backing_size(&mut self, width: u32, height: u32) {
			self.backing = (width, height);
			// Resizing a canvas resets its transform.
			self.transform = None;
			self.ops.push(DrawOp::BackingSize(width, height));
		}

		fn set_display_size(&mut self, width: f64, height: f64) {
			self.display = (width, height);
			self.ops.push(DrawOp::DisplaySize(width, height));
		}

		fn set_transform(&mut self, transform: Transform) {
			self.transform = Some(transform);
			self.ops.push(DrawOp::SetTransform(transform));
		}

		fn clear_rect(&mut self, width: f64, height: f64) {
			self.ops.push(DrawOp::Clear(width, height));
		}

		fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
			self.ops.push(DrawOp::Circle {
				x,
				y,
				radius,
				color,
			});
		}

		fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, width: f64) {
			self.ops.push(DrawOp::Line {
				from,
				to,
				color,
				width,
			});
		}
	}
}
