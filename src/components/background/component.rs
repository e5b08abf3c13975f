//! Leptos component wrapping the background canvas.
//!
//! Renders a fixed, full-window canvas behind the page content and starts an
//! [`AnimationLoop`] on it once mounted. The loop is stopped when the
//! component is cleaned up.

use leptos::prelude::*;
use log::warn;

use super::animation::AnimationLoop;
use super::config::BackgroundConfig;

const CANVAS_STYLE: &str = "position: fixed; top: 0; left: 0; width: 100%; height: 100%; \
	z-index: -1; pointer-events: none;";

/// Animated page background.
///
/// Missing canvas or 2-D context support leaves the background blank; the
/// host page is unaffected.
#[component]
pub fn BackgroundCanvas(#[prop(optional)] config: Option<BackgroundConfig>) -> impl IntoView {
	let config = config.unwrap_or_default();
	let canvas_id = config.canvas_id.clone();
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let animation = StoredValue::new_local(None::<AnimationLoop>);

	Effect::new(move |_| {
		let running = animation.with_value(|a| a.as_ref().is_some_and(AnimationLoop::is_running));
		if canvas_ref.get().is_none() || running {
			return;
		}
		match AnimationLoop::attach(&config.canvas_id, config.clone()) {
			Ok(running) => animation.set_value(Some(running)),
			Err(e) => warn!("background: {e}, staying inert"),
		}
	});

	on_cleanup(move || {
		if let Some(Some(mut running)) = animation.try_update_value(Option::take) {
			running.stop();
		}
	});

	view! { <canvas node_ref=canvas_ref id=canvas_id class="background-canvas" style=CANVAS_STYLE /> }
}
