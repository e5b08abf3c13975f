//! Browser glue: binds a [`Surface`] to a canvas and drives it with
//! `requestAnimationFrame`.
//!
//! The loop is a cancellable task. [`AnimationLoop::stop`] (or dropping the
//! handle) cancels the pending frame, releases the frame callback, and removes
//! every event listener, so teardown does not depend on the page going away.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
	CanvasRenderingContext2d, Document, Event, EventTarget, HtmlCanvasElement, MouseEvent,
	TouchEvent, Window,
};

use super::config::BackgroundConfig;
use super::error::SurfaceError;
use super::render;
use super::surface::Surface;

/// An event listener that unregisters itself on drop.
struct Listener {
	target: EventTarget,
	event: &'static str,
	callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
	fn new<E, F>(target: &EventTarget, event: &'static str, mut handler: F) -> Option<Self>
	where
		E: JsCast + 'static,
		F: FnMut(E) + 'static,
	{
		let callback = Closure::<dyn FnMut(Event)>::new(move |ev: Event| {
			if let Ok(ev) = ev.dyn_into::<E>() {
				handler(ev);
			}
		});
		match target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
			Ok(()) => Some(Self {
				target: target.clone(),
				event,
				callback,
			}),
			Err(e) => {
				warn!("background: could not listen for {event}: {e:?}");
				None
			}
		}
	}
}

impl Drop for Listener {
	fn drop(&mut self) {
		let _ = self
			.target
			.remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
	}
}

/// Shared state of the frame loop. The frame callback holds an `Rc` to this,
/// which is released by [`FrameLoop::cancel`].
struct FrameLoop {
	window: Window,
	running: Cell<bool>,
	pending: Cell<Option<i32>>,
	callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl FrameLoop {
	fn schedule(&self) {
		if !self.running.get() {
			return;
		}
		if let Some(cb) = self.callback.borrow().as_ref() {
			match self.window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				Ok(id) => self.pending.set(Some(id)),
				Err(e) => warn!("background: requestAnimationFrame failed: {e:?}"),
			}
		}
	}

	fn cancel(&self) {
		self.running.set(false);
		if let Some(id) = self.pending.take() {
			let _ = self.window.cancel_animation_frame(id);
		}
		self.callback.borrow_mut().take();
	}
}

/// Handle to a running background animation.
pub struct AnimationLoop {
	frames: Rc<FrameLoop>,
	listeners: Vec<Listener>,
}

impl AnimationLoop {
	/// Bind to the canvas with id `canvas_id` and start animating.
	///
	/// Fails without side effects if the canvas or its 2-D context is missing;
	/// callers are expected to log and carry on without a background.
	pub fn attach(canvas_id: &str, config: BackgroundConfig) -> Result<Self, SurfaceError> {
		let window = web_sys::window().ok_or(SurfaceError::NoWindow)?;
		let document = window.document().ok_or(SurfaceError::NoWindow)?;

		let canvas: HtmlCanvasElement = document
			.get_element_by_id(canvas_id)
			.and_then(|el| el.dyn_into().ok())
			.ok_or_else(|| SurfaceError::MissingTarget(canvas_id.to_string()))?;
		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|ctx| ctx.dyn_into().ok())
			.ok_or_else(|| SurfaceError::ContextUnavailable(canvas_id.to_string()))?;

		let dark_class = config.dark_mode_class.clone();
		let kind = config.kind;
		let surface = Rc::new(RefCell::new(Surface::new(config, StdRng::from_entropy())));
		fit_to_window(&window, &canvas, &surface);

		let listeners = bind_inputs(&window, &document, &canvas, &surface);

		let frames = Rc::new(FrameLoop {
			window: window.clone(),
			running: Cell::new(true),
			pending: Cell::new(None),
			callback: RefCell::new(None),
		});
		let frames_cb = frames.clone();
		*frames.callback.borrow_mut() = Some(Closure::new(move || {
			frames_cb.pending.set(None);
			if !frames_cb.running.get() {
				return;
			}
			let dark = is_dark_mode(&document, &dark_class);
			{
				let mut s = surface.borrow_mut();
				s.tick();
				render::render(&*s, &ctx, dark);
			}
			frames_cb.schedule();
		}));
		frames.schedule();

		info!("background: {kind:?} animation running on #{canvas_id}");
		Ok(Self { frames, listeners })
	}

	/// Cancel the frame loop and unregister all listeners. Idempotent.
	pub fn stop(&mut self) {
		if self.frames.running.get() {
			info!("background: animation stopped");
		}
		self.frames.cancel();
		self.listeners.clear();
	}

	/// Whether frames are still being scheduled.
	pub fn is_running(&self) -> bool {
		self.frames.running.get()
	}
}

impl Drop for AnimationLoop {
	fn drop(&mut self) {
		self.stop();
	}
}

/// Size the canvas to the window and queue a matching resize.
fn fit_to_window(window: &Window, canvas: &HtmlCanvasElement, surface: &RefCell<Surface>) {
	let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
	let (w, h) = (dim(window.inner_width()), dim(window.inner_height()));
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);
	surface.borrow_mut().request_resize(w, h);
}

fn is_dark_mode(document: &Document, class: &str) -> bool {
	document
		.body()
		.is_some_and(|body| body.class_list().contains(class))
}

/// Convert client coordinates into canvas-local ones.
fn local(canvas: &HtmlCanvasElement, client_x: i32, client_y: i32) -> (f64, f64) {
	let rect = canvas.get_bounding_client_rect();
	(client_x as f64 - rect.left(), client_y as f64 - rect.top())
}

/// Window-level input capture. The canvas sits behind page content with
/// `pointer-events: none`, so it never receives these events itself.
fn bind_inputs(
	window: &Window,
	document: &Document,
	canvas: &HtmlCanvasElement,
	surface: &Rc<RefCell<Surface>>,
) -> Vec<Listener> {
	let win: &EventTarget = window.as_ref();
	let doc: &EventTarget = document.as_ref();
	let mut listeners = Vec::with_capacity(6);

	let (w, c, s) = (window.clone(), canvas.clone(), surface.clone());
	listeners.extend(Listener::new(win, "resize", move |_: Event| {
		fit_to_window(&w, &c, &s);
	}));

	let (c, s) = (canvas.clone(), surface.clone());
	listeners.extend(Listener::new(win, "mousemove", move |ev: MouseEvent| {
		let (x, y) = local(&c, ev.client_x(), ev.client_y());
		s.borrow_mut().pointer_move(x, y);
	}));

	let s = surface.clone();
	listeners.extend(Listener::new(doc, "mouseout", move |ev: MouseEvent| {
		// No related target: the pointer left the page entirely.
		if ev.related_target().is_none() {
			s.borrow_mut().pointer_leave();
		}
	}));

	let (c, s) = (canvas.clone(), surface.clone());
	listeners.extend(Listener::new(win, "touchmove", move |ev: TouchEvent| {
		if let Some(touch) = ev.touches().get(0) {
			let (x, y) = local(&c, touch.client_x(), touch.client_y());
			s.borrow_mut().pointer_move(x, y);
		}
	}));

	let s = surface.clone();
	listeners.extend(Listener::new(win, "touchend", move |_: TouchEvent| {
		s.borrow_mut().pointer_leave();
	}));

	// Fade out while hidden; the simulation keeps running.
	let (d, c) = (document.clone(), canvas.clone());
	listeners.extend(Listener::new(doc, "visibilitychange", move |_: Event| {
		let opacity = if d.hidden() { "0" } else { "1" };
		let _ = c.style().set_property("opacity", opacity);
	}));

	listeners
}
