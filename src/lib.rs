//! constellation-bg: decorative particle network background for web pages.
//!
//! This crate provides a WASM canvas component that animates a field of
//! drifting points joined by distance-faded lines, sized for high-density
//! displays and switched off for visitors who prefer reduced motion.

use leptos::prelude::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::constellation::{ConstellationCanvas, ConstellationConfig};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("constellation: logging initialized");
}

/// Load engine configuration from a script element with id="constellation-config".
/// Missing element means defaults; malformed JSON is logged and ignored.
fn load_config() -> ConstellationConfig {
	let Some(json_text) = config_text() else {
		return ConstellationConfig::default();
	};

	match ConstellationConfig::from_json(&json_text) {
		Ok(config) => {
			info!("constellation: loaded configuration");
			config
		}
		Err(e) => {
			warn!("constellation: {}, using defaults", e);
			ConstellationConfig::default()
		}
	}
}

fn config_text() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("constellation-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Main application component.
/// Reads configuration from the DOM and mounts the background canvas.
#[component]
pub fn App() -> impl IntoView {
	let config = load_config();

	view! { <ConstellationCanvas config=config /> }
}
