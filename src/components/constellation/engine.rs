//! Animation loop lifecycle.
//!
//! The engine owns the surface, the particle field and the frame scheduler,
//! and moves between two states:
//!
//! ```text
//!            start()                 on_frame(): step + render + reschedule
//! Stopped ───────────▶ Running ◀──╮
//!    ▲                   │  ╰──────╯
//!    ╰───── stop() ──────╯
//! ```
//!
//! At most one frame is pending at any time. `stop` cancels it through the
//! scheduler and clears it locally. Every callback carries the handle it was
//! scheduled under, and only the pending handle runs a step, so a late or
//! duplicated callback finds nothing to do.
//! With reduced motion requested the engine is disabled for its whole life and
//! never leaves `Stopped`.

use log::{debug, info, warn};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::config::ConstellationConfig;
use super::error::ConstellationError;
use super::motion;
use super::particles::{Particle, ParticleField};
use super::render::{self, RenderStats};
use super::surface::{self, DrawingSurface, SurfaceState, Viewport};
use super::theme::Theme;

/// Identifies one scheduled frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LoopHandle(i32);

impl LoopHandle {
	pub fn new(id: i32) -> Self {
		Self(id)
	}

	pub fn id(&self) -> i32 {
		self.0
	}
}

/// The host's per-refresh callback mechanism.
///
/// A successful `request_frame` promises one later call to
/// [`ConstellationEngine::on_frame`] with the returned handle, unless the
/// handle is cancelled first.
pub trait FrameScheduler {
	fn request_frame(&mut self) -> Result<LoopHandle, ConstellationError>;
	fn cancel_frame(&mut self, handle: LoopHandle);
}

/// Loop state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopState {
	#[default]
	Stopped,
	Running,
}

/// Host facts fixed at construction.
#[derive(Clone, Copy, Debug, Default)]
pub struct EngineOptions {
	/// Prefers-reduced-motion, sampled once.
	pub reduce_motion: bool,
	/// Seed for particle placement.
	pub seed: u64,
}

/// Particle network simulation and renderer bound to one surface.
pub struct ConstellationEngine<S, F> {
	surface: S,
	scheduler: F,
	config: ConstellationConfig,
	theme: Theme,
	rng: Pcg32,
	viewport: Viewport,
	surface_state: Option<SurfaceState>,
	field: ParticleField,
	state: LoopState,
	pending: Option<LoopHandle>,
	reduce_motion: bool,
	frames: u64,
}

impl<S: DrawingSurface, F: FrameScheduler> ConstellationEngine<S, F> {
	/// Bind an engine to its host. Nothing is drawn or scheduled until
	/// [`start`](Self::start).
	pub fn try_new(
		surface: Option<S>,
		scheduler: Option<F>,
		viewport: Viewport,
		options: EngineOptions,
		config: ConstellationConfig,
	) -> Result<Self, ConstellationError> {
		let surface = surface.ok_or(ConstellationError::SurfaceUnavailable)?;
		let scheduler = scheduler.ok_or(ConstellationError::SchedulerUnavailable)?;

		if options.reduce_motion {
			info!("constellation: reduced motion requested, animation disabled");
		} else {
			info!(
				"constellation: engine ready for {}x{} @{}x",
				viewport.width, viewport.height, viewport.pixel_ratio
			);
		}

		Ok(Self {
			surface,
			scheduler,
			theme: config.theme(),
			config,
			rng: Pcg32::seed_from_u64(options.seed),
			viewport,
			surface_state: None,
			field: ParticleField::default(),
			state: LoopState::Stopped,
			pending: None,
			reduce_motion: options.reduce_motion,
			frames: 0,
		})
	}

	/// Size the surface, build a fresh field and schedule the first frame.
	///
	/// Returns whether the loop is running afterwards. A no-op while already
	/// running or when disabled.
	pub fn start(&mut self) -> bool {
		if self.reduce_motion {
			return false;
		}
		if self.state == LoopState::Running {
			debug!("constellation: start ignored, already running");
			return true;
		}

		let surface_state = surface::configure(&mut self.surface, self.viewport);
		self.field = ParticleField::regenerate(
			surface_state.width,
			surface_state.height,
			&self.config.field,
			&mut self.rng,
		);
		self.surface_state = Some(surface_state);

		match self.scheduler.request_frame() {
			Ok(handle) => {
				self.pending = Some(handle);
				self.state = LoopState::Running;
				debug!(
					"constellation: started with {} particles on {}x{}",
					self.field.len(),
					surface_state.width,
					surface_state.height
				);
				true
			}
			Err(e) => {
				warn!("constellation: cannot start: {}", e);
				false
			}
		}
	}

	/// Cancel any pending frame. Idempotent.
	pub fn stop(&mut self) {
		if let Some(handle) = self.pending.take() {
			self.scheduler.cancel_frame(handle);
		}
		if self.state == LoopState::Running {
			debug!("constellation: stopped after {} frames", self.frames);
		}
		self.state = LoopState::Stopped;
	}

	/// `stop` then `start`.
	pub fn restart(&mut self) -> bool {
		self.stop();
		self.start()
	}

	/// Adopt a new viewport and rebuild everything that depends on it.
	pub fn resize(&mut self, viewport: Viewport) -> bool {
		if self.reduce_motion {
			return false;
		}
		debug!(
			"constellation: resize to {}x{} @{}x",
			viewport.width, viewport.height, viewport.pixel_ratio
		);
		self.viewport = viewport;
		self.restart()
	}

	/// Run the frame scheduled as `handle`: integrate, render, reschedule.
	///
	/// Returns `None` without touching anything unless `handle` is the
	/// pending frame.
	pub fn on_frame(&mut self, handle: LoopHandle) -> Option<RenderStats> {
		if self.state != LoopState::Running || self.pending != Some(handle) {
			return None;
		}
		self.pending = None;
		let surface_state = self.surface_state?;

		motion::step(
			self.field.particles_mut(),
			surface_state.width,
			surface_state.height,
		);
		let stats = render::render(
			&mut self.surface,
			self.field.particles(),
			surface_state.width,
			surface_state.height,
			&self.theme,
		);
		self.frames += 1;

		match self.scheduler.request_frame() {
			Ok(handle) => self.pending = Some(handle),
			Err(e) => {
				warn!("constellation: frame request failed, stopping: {}", e);
				self.state = LoopState::Stopped;
			}
		}

		Some(stats)
	}

	pub fn state(&self) -> LoopState {
		self.state
	}

	/// True when reduced motion was requested; the surface should be hidden.
	pub fn is_disabled(&self) -> bool {
		self.reduce_motion
	}

	pub fn particles(&self) -> &[Particle] {
		self.field.particles()
	}

	pub fn surface_state(&self) -> Option<SurfaceState> {
		self.surface_state
	}

	pub fn pending_frame(&self) -> Option<LoopHandle> {
		self.pending
	}

	/// Frames rendered since construction.
	pub fn frames_rendered(&self) -> u64 {
		self.frames
	}

	pub fn config(&self) -> &ConstellationConfig {
		&self.config
	}

	pub fn surface(&self) -> &S {
		&self.surface
	}
}
