//! Geometric shapes background.
//!
//! Outlined triangles, squares and hexagons that drift, spin, and wrap around
//! the surface edges. No pointer interaction and no pairwise work.

use std::f64::consts::{FRAC_PI_3, TAU};

use rand::Rng;

use super::config::ShapesConfig;
use super::force::Bounds;
use super::particle::{Point, unit};

/// Outline kind, fixed at creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
	/// Isosceles triangle pointing up.
	Triangle,
	/// Axis-aligned square before rotation.
	Square,
	/// Regular hexagon.
	Hexagon,
}

impl ShapeKind {
	const ALL: [ShapeKind; 3] = [ShapeKind::Triangle, ShapeKind::Square, ShapeKind::Hexagon];
}

/// A single drifting shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shape {
	/// Outline kind.
	pub kind: ShapeKind,
	/// Centre in surface pixels.
	pub center: Point,
	/// Per-frame movement.
	pub velocity: Point,
	/// Edge length (hexagon: diameter).
	pub size: f64,
	/// Radians.
	pub rotation: f64,
	/// Radians per frame.
	pub spin: f64,
	/// Stroke opacity.
	pub opacity: f64,
}

impl Shape {
	/// Seed a shape uniformly inside a `width` x `height` surface.
	pub fn random<R: Rng + ?Sized>(rng: &mut R, config: &ShapesConfig, width: f64, height: f64) -> Self {
		let center = Point::new(unit(rng) * width, unit(rng) * height);
		let size = config.size.lerp(unit(rng));
		let rotation = unit(rng) * TAU;
		let spin = (unit(rng) - 0.5) * config.spin;
		let velocity = Point::new(
			(unit(rng) - 0.5) * config.speed,
			(unit(rng) - 0.5) * config.speed,
		);
		let kind = ShapeKind::ALL[rng.gen_range(0..ShapeKind::ALL.len())];
		let opacity = config.opacity.lerp(unit(rng));

		Self {
			kind,
			center,
			velocity,
			size,
			rotation,
			spin,
			opacity,
		}
	}

	/// Move, rotate, and wrap by one frame.
	///
	/// A shape leaving past `-size` re-enters at `extent + size` and vice versa,
	/// so it is fully off-screen while it jumps.
	pub fn advance(&mut self, bounds: Bounds) {
		self.center.x += self.velocity.x;
		self.center.y += self.velocity.y;
		self.rotation += self.spin;

		self.center.x = wrap(self.center.x, bounds.width, self.size);
		self.center.y = wrap(self.center.y, bounds.height, self.size);
	}

	/// Outline vertices in surface coordinates, rotated about the centre.
	pub fn outline(&self) -> Vec<Point> {
		let half = self.size / 2.0;
		let local: Vec<(f64, f64)> = match self.kind {
			ShapeKind::Triangle => vec![(0.0, -half), (half, half), (-half, half)],
			ShapeKind::Square => vec![(-half, -half), (half, -half), (half, half), (-half, half)],
			ShapeKind::Hexagon => (0..6)
				.map(|i| {
					let angle = FRAC_PI_3 * i as f64;
					(angle.cos() * half, angle.sin() * half)
				})
				.collect(),
		};

		let (sin, cos) = self.rotation.sin_cos();
		local
			.into_iter()
			.map(|(x, y)| {
				Point::new(
					self.center.x + x * cos - y * sin,
					self.center.y + x * sin + y * cos,
				)
			})
			.collect()
	}
}

fn wrap(v: f64, extent: f64, margin: f64) -> f64 {
	if v < -margin {
		extent + margin
	} else if v > extent + margin {
		-margin
	} else {
		v
	}
}

/// Seed a fresh batch of `count` shapes.
pub fn populate<R: Rng + ?Sized>(
	rng: &mut R,
	config: &ShapesConfig,
	count: usize,
	width: f64,
	height: f64,
) -> Vec<Shape> {
	(0..count)
		.map(|_| Shape::random(rng, config, width, height))
		.collect()
}
