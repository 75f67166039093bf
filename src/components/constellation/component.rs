//! Leptos component hosting the constellation engine.
//!
//! The component renders a fixed, non-interactive canvas behind the page and
//! adapts browser events to engine messages: the first mount starts the loop,
//! every window `resize` becomes [`ConstellationEngine::resize`], and each
//! `requestAnimationFrame` callback becomes [`ConstellationEngine::on_frame`]
//! for the handle it was requested under.
//! When reduced motion is requested the canvas is hidden instead.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use super::config::ConstellationConfig;
use super::engine::{ConstellationEngine, EngineOptions};
use super::host::{self, AnimationFrames, CanvasSurface, FrameCallback, InFlightFrame};

type BrowserEngine = ConstellationEngine<CanvasSurface, AnimationFrames>;

/// Renders the animated particle network as a full-viewport backdrop.
#[component]
pub fn ConstellationCanvas(#[prop(optional)] config: ConstellationConfig) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let engine: Rc<RefCell<Option<BrowserEngine>>> = Rc::new(RefCell::new(None));
	let animate: FrameCallback = Rc::new(RefCell::new(None));
	let in_flight: InFlightFrame = Rc::new(Cell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if engine.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			warn!("constellation: no window, skipping");
			return;
		};
		let Some(viewport) = host::viewport(&window) else {
			warn!("constellation: viewport size unavailable, skipping");
			return;
		};

		let options = EngineOptions {
			reduce_motion: host::prefers_reduced_motion(&window),
			seed: host::random_seed(),
		};
		let surface = CanvasSurface::new(canvas.clone())
			.inspect_err(|e| warn!("constellation: {}", e))
			.ok();
		let scheduler = AnimationFrames::new(window.clone(), animate.clone(), in_flight.clone());

		let mut built = match ConstellationEngine::try_new(
			surface,
			Some(scheduler),
			viewport,
			options,
			config.clone(),
		) {
			Ok(built) => built,
			Err(e) => {
				warn!("constellation: not starting: {}", e);
				if options.reduce_motion {
					host::hide(&canvas);
				}
				return;
			}
		};

		if built.is_disabled() {
			host::hide(&canvas);
			return;
		}

		let (engine_frame, fired) = (engine.clone(), in_flight.clone());
		*animate.borrow_mut() = Some(Closure::new(move || {
			let Some(handle) = fired.take() else {
				return;
			};
			if let Some(ref mut e) = *engine_frame.borrow_mut() {
				e.on_frame(handle);
			}
		}));

		let (engine_resize, window_resize) = (engine.clone(), window.clone());
		*resize_cb.borrow_mut() = Some(Closure::new(move || {
			let Some(viewport) = host::viewport(&window_resize) else {
				return;
			};
			if let Some(ref mut e) = *engine_resize.borrow_mut() {
				e.resize(viewport);
			}
		}));
		if let Some(ref cb) = *resize_cb.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		built.start();
		*engine.borrow_mut() = Some(built);
	});

	view! {
		<canvas
			node_ref=canvas_ref
			id="constellation"
			class="constellation-canvas"
			aria-hidden="true"
			style="position: fixed; inset: 0; z-index: -1; pointer-events: none; display: block;"
		/>
	}
}
