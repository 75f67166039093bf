//! Browser bindings: canvas drawing, `requestAnimationFrame` scheduling and
//! the handful of window probes the engine needs.

use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::engine::{FrameScheduler, LoopHandle};
use super::error::ConstellationError;
use super::surface::{DrawingSurface, Transform, Viewport};
use super::theme::Color;

/// Shared slot for the per-frame callback. Filled by the component once the
/// engine exists, read by [`AnimationFrames`] on every request.
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle of the frame the browser will deliver next, if any. Taken by the
/// frame callback and handed to the engine.
pub type InFlightFrame = Rc<Cell<Option<LoopHandle>>>;

/// `<canvas>` with its 2D context.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	pub fn new(canvas: HtmlCanvasElement) -> Result<Self, ConstellationError> {
		let ctx = canvas
			.get_context("2d")
			.map_err(|e| ConstellationError::ContextUnavailable(format!("{:?}", e)))?
			.ok_or_else(|| ConstellationError::ContextUnavailable("no 2d context".into()))?
			.dyn_into::<CanvasRenderingContext2d>()
			.map_err(|_| ConstellationError::ContextUnavailable("unexpected context type".into()))?;

		Ok(Self { canvas, ctx })
	}
}

impl DrawingSurface for CanvasSurface {
	fn set_backing_size(&mut self, width: u32, height: u32) {
		self.canvas.set_width(width);
		self.canvas.set_height(height);
	}

	fn set_display_size(&mut self, width: f64, height: f64) {
		let style = self.canvas.style();
		let _ = style.set_property("width", &format!("{}px", width));
		let _ = style.set_property("height", &format!("{}px", height));
	}

	fn set_transform(&mut self, transform: Transform) {
		let [a, b, c, d, e, f] = transform.matrix();
		let _ = self.ctx.set_transform(a, b, c, d, e, f);
	}

	fn clear_rect(&mut self, width: f64, height: f64) {
		self.ctx.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, TAU);
		self.ctx.fill();
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, width: f64) {
		self.ctx.set_stroke_style_str(&color.to_css());
		self.ctx.set_line_width(width);
		self.ctx.begin_path();
		self.ctx.move_to(from.0, from.1);
		self.ctx.line_to(to.0, to.1);
		self.ctx.stroke();
	}
}

/// `requestAnimationFrame` / `cancelAnimationFrame`.
pub struct AnimationFrames {
	window: Window,
	callback: FrameCallback,
	in_flight: InFlightFrame,
}

impl AnimationFrames {
	pub fn new(window: Window, callback: FrameCallback, in_flight: InFlightFrame) -> Self {
		Self {
			window,
			callback,
			in_flight,
		}
	}
}

impl FrameScheduler for AnimationFrames {
	fn request_frame(&mut self) -> Result<LoopHandle, ConstellationError> {
		let slot = self.callback.borrow();
		let Some(cb) = slot.as_ref() else {
			return Err(ConstellationError::SchedulerUnavailable);
		};
		let handle = self
			.window
			.request_animation_frame(cb.as_ref().unchecked_ref())
			.map(LoopHandle::new)
			.map_err(|e| ConstellationError::FrameRequest(format!("{:?}", e)))?;
		self.in_flight.set(Some(handle));
		Ok(handle)
	}

	fn cancel_frame(&mut self, handle: LoopHandle) {
		let _ = self.window.cancel_animation_frame(handle.id());
		if self.in_flight.get() == Some(handle) {
			self.in_flight.set(None);
		}
	}
}

/// Current window size and pixel ratio.
pub fn viewport(window: &Window) -> Option<Viewport> {
	let width = window.inner_width().ok()?.as_f64()?;
	let height = window.inner_height().ok()?.as_f64()?;
	Some(Viewport::new(width, height, window.device_pixel_ratio()))
}

/// One-shot `prefers-reduced-motion` check.
pub fn prefers_reduced_motion(window: &Window) -> bool {
	window
		.match_media("(prefers-reduced-motion: reduce)")
		.ok()
		.flatten()
		.is_some_and(|query| query.matches())
}

/// Take the canvas out of the layout.
pub fn hide(canvas: &HtmlCanvasElement) {
	let _ = canvas.style().set_property("display", "none");
}

/// Seed from `Math.random`, 32 bits at a time.
pub fn random_seed() -> u64 {
	let hi = (js_sys::Math::random() * 4_294_967_296.0) as u64;
	let lo = (js_sys::Math::random() * 4_294_967_296.0) as u64;
	(hi << 32) | lo
}
