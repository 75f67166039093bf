//! Error types for the constellation engine.
//!
//! None of these are fatal to the page: the host logs them and the decoration
//! simply does not appear.

use thiserror::Error;

/// Errors raised while wiring the engine to its host.
#[derive(Debug, Error)]
pub enum ConstellationError {
	/// No canvas element to draw on
	#[error("drawing surface unavailable")]
	SurfaceUnavailable,

	/// The canvas exists but refused a 2D context
	#[error("2D context unavailable: {0}")]
	ContextUnavailable(String),

	/// No frame-scheduling primitive
	#[error("frame scheduler unavailable")]
	SchedulerUnavailable,

	/// The host rejected a frame request
	#[error("frame request failed: {0}")]
	FrameRequest(String),

	/// Configuration document could not be parsed
	#[error("invalid configuration: {0}")]
	InvalidConfig(String),
}
