//! Configuration surface for the animated background.
//!
//! Every field has a default matching the stock portfolio look, so a host only
//! needs to supply the values it wants to change. The [`App`](crate::App) reads
//! overrides as JSON from a `<script id="background-config">` element.

use log::warn;
use serde::Deserialize;

/// Which background renderer runs on the canvas. Never both.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundKind {
	/// Drifting points with pointer repulsion and proximity lines.
	#[default]
	Particles,
	/// Rotating outlined triangles, squares and hexagons.
	Shapes,
}

/// Half-open numeric range `[min, max)` used for random seeding.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct Span {
	/// Inclusive lower end.
	pub min: f64,
	/// Exclusive upper end.
	pub max: f64,
}

impl Span {
	/// Span `[min, max)`.
	pub const fn new(min: f64, max: f64) -> Self {
		Self { min, max }
	}

	/// A span is usable when it is finite, non-negative, and not inverted.
	fn is_valid(&self) -> bool {
		self.min.is_finite() && self.max.is_finite() && self.min >= 0.0 && self.min <= self.max
	}

	/// Linearly map `t` in `[0, 1)` into the span.
	pub fn lerp(&self, t: f64) -> f64 {
		self.min + (self.max - self.min) * t
	}
}

/// Particle network tuning.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct NetworkConfig {
	/// Particle count on viewports at least `narrow_breakpoint` wide.
	pub particle_count: usize,
	/// Particle count on narrow viewports.
	pub narrow_particle_count: usize,
	/// Maximum distance at which two particles are linked.
	pub link_threshold: f64,
	/// Maximum pointer distance at which repulsion applies.
	pub influence_radius: f64,
	/// Drift speed; each velocity axis is seeded in `[-speed/2, speed/2)`.
	pub speed: f64,
	/// Disc radius range.
	pub radius: Span,
	/// Repulsion mass ("density") range.
	pub mass: Span,
}

impl Default for NetworkConfig {
	fn default() -> Self {
		Self {
			particle_count: 80,
			narrow_particle_count: 40,
			link_threshold: 120.0,
			influence_radius: 150.0,
			speed: 0.5,
			radius: Span::new(1.0, 4.0),
			mass: Span::new(1.0, 31.0),
		}
	}
}

/// Geometric shapes tuning.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShapesConfig {
	/// Shape count on wide viewports.
	pub shape_count: usize,
	/// Shape count on narrow viewports.
	pub narrow_shape_count: usize,
	/// Edge length range.
	pub size: Span,
	/// Stroke opacity range.
	pub opacity: Span,
	/// Linear speed; each axis is seeded in `[-speed/2, speed/2)`.
	pub speed: f64,
	/// Angular speed in radians per frame; seeded in `[-spin/2, spin/2)`.
	pub spin: f64,
}

impl Default for ShapesConfig {
	fn default() -> Self {
		Self {
			shape_count: 15,
			narrow_shape_count: 8,
			size: Span::new(50.0, 150.0),
			opacity: Span::new(0.1, 0.4),
			speed: 0.5,
			spin: 0.01,
		}
	}
}

/// Complete background configuration.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct BackgroundConfig {
	/// Which scene to animate.
	pub kind: BackgroundKind,
	/// DOM id of the canvas the animation binds to.
	pub canvas_id: String,
	/// Class on `<body>` that marks dark mode.
	pub dark_mode_class: String,
	/// Viewports narrower than this (px) use the reduced counts.
	pub narrow_breakpoint: f64,
	/// Particle network tuning.
	pub network: NetworkConfig,
	/// Geometric shapes tuning.
	pub shapes: ShapesConfig,
}

impl Default for BackgroundConfig {
	fn default() -> Self {
		Self {
			kind: BackgroundKind::default(),
			canvas_id: "backgroundCanvas".to_string(),
			dark_mode_class: "dark-mode".to_string(),
			narrow_breakpoint: 768.0,
			network: NetworkConfig::default(),
			shapes: ShapesConfig::default(),
		}
	}
}

impl BackgroundConfig {
	/// Parse a JSON config, filling unspecified fields with defaults.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str::<Self>(json).map(Self::validated)
	}

	fn is_narrow(&self, width: f64) -> bool {
		width < self.narrow_breakpoint
	}

	/// Target particle count for a surface of the given width.
	pub fn particle_count_for(&self, width: f64) -> usize {
		if self.is_narrow(width) {
			self.network.narrow_particle_count
		} else {
			self.network.particle_count
		}
	}

	/// Target shape count for a surface of the given width.
	pub fn shape_count_for(&self, width: f64) -> usize {
		if self.is_narrow(width) {
			self.shapes.narrow_shape_count
		} else {
			self.shapes.shape_count
		}
	}

	/// Replace out-of-range values with their defaults.
	///
	/// The force model divides by the influence radius and the link builder by
	/// the threshold, so both must stay strictly positive.
	pub fn validated(mut self) -> Self {
		let net = NetworkConfig::default();
		let shapes = ShapesConfig::default();

		if !(self.network.influence_radius.is_finite() && self.network.influence_radius > 0.0) {
			warn!(
				"background: influence_radius {} is not positive, using {}",
				self.network.influence_radius, net.influence_radius
			);
			self.network.influence_radius = net.influence_radius;
		}
		if !(self.network.link_threshold.is_finite() && self.network.link_threshold > 0.0) {
			warn!(
				"background: link_threshold {} is not positive, using {}",
				self.network.link_threshold, net.link_threshold
			);
			self.network.link_threshold = net.link_threshold;
		}
		if !self.network.speed.is_finite() {
			self.network.speed = net.speed;
		}
		if !self.shapes.speed.is_finite() {
			self.shapes.speed = shapes.speed;
		}
		if !self.shapes.spin.is_finite() {
			self.shapes.spin = shapes.spin;
		}

		for (name, span, fallback) in [
			("network.radius", &mut self.network.radius, net.radius),
			("network.mass", &mut self.network.mass, net.mass),
			("shapes.size", &mut self.shapes.size, shapes.size),
			("shapes.opacity", &mut self.shapes.opacity, shapes.opacity),
		] {
			if !span.is_valid() {
				warn!("background: invalid range for {name}: {span:?}, using defaults");
				*span = fallback;
			}
		}

		self
	}
}
