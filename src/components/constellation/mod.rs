//! Particle constellation background.
//!
//! Renders drifting points on an HTML canvas, joining nearby pairs with lines
//! that fade with distance:
//! - Resolution-aware canvas sizing (backing store scaled by pixel ratio)
//! - Width-proportional particle field, rebuilt on every resize
//! - Edge-reflecting motion, one fixed step per display refresh
//! - Start/stop/restart lifecycle with a single pending frame
//! - Disabled entirely under `prefers-reduced-motion`
//!
//! The engine only sees the [`DrawingSurface`] and [`FrameScheduler`] traits;
//! [`ConstellationCanvas`] plugs in the browser implementations.
//!
//! # Example
//!
//! ```ignore
//! use constellation_bg::ConstellationCanvas;
//!
//! view! { <ConstellationCanvas /> }
//! ```

mod component;
pub mod config;
pub mod engine;
pub mod error;
mod host;
pub mod motion;
pub mod particles;
pub mod render;
pub mod surface;
pub mod theme;

pub use component::ConstellationCanvas;
pub use config::{ConstellationConfig, FieldConfig};
pub use engine::{ConstellationEngine, EngineOptions, FrameScheduler, LoopHandle, LoopState};
pub use error::ConstellationError;
pub use particles::{PARTICLE_CAP, Particle, ParticleField};
pub use render::RenderStats;
pub use surface::{DrawingSurface, SurfaceState, Transform, Viewport};
pub use theme::{Color, DotStyle, LinkStyle, Theme};
