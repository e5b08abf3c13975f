//! portfolio-background: animated canvas background for a portfolio site.
//!
//! This crate provides a WASM particle-network (or geometric-shapes) background
//! that reacts to the pointer, relaxes back when left alone, and follows the
//! host page's light/dark theme.

use leptos::prelude::*;
use leptos_meta::{Style, provide_meta_context};
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

// Only needed for its `js` feature, which gives `rand` entropy on wasm32.
use getrandom as _;

pub mod components;

pub use components::background::{
	AnimationLoop, BackgroundCanvas, BackgroundConfig, BackgroundKind, SurfaceError,
};

const HINT_TEXT: &str = "Move your mouse to interact with particles";

const HINT_CSS: &str = "
.canvas-instruction {
	position: fixed;
	bottom: 20px;
	left: 50%;
	transform: translateX(-50%);
	padding: 8px 16px;
	background: rgba(0, 0, 0, 0.7);
	color: white;
	border-radius: 20px;
	font-size: 0.85rem;
	z-index: 1000;
	opacity: 0;
	pointer-events: none;
	animation: fadeInOut 4s ease-in-out;
}
@keyframes fadeInOut {
	0%, 100% { opacity: 0; }
	10%, 90% { opacity: 1; }
}
";

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio-background: logging initialized");
}

/// Load configuration from a script element with id="background-config".
/// Expected format: JSON matching [`BackgroundConfig`]; omitted fields keep
/// their defaults.
fn load_config() -> Option<BackgroundConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("background-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match BackgroundConfig::from_json(&json_text) {
		Ok(config) => {
			info!("portfolio-background: loaded {:?} config", config.kind);
			Some(config)
		}
		Err(e) => {
			warn!("portfolio-background: failed to parse config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads the background config from the DOM and mounts the animated canvas.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_config().unwrap_or_default();
	let show_hint = config.kind == BackgroundKind::Particles;

	view! {
		<BackgroundCanvas config=config />
		{show_hint
			.then(|| {
				view! {
					<Style>{HINT_CSS}</Style>
					<div class="canvas-instruction">{HINT_TEXT}</div>
				}
			})}
	}
}
