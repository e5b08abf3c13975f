//! Point entities for the particle network.

use rand::Rng;

use super::config::NetworkConfig;

/// A 2-D point or vector in surface pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal coordinate.
	pub x: f64,
	/// Vertical coordinate.
	pub y: f64,
}

impl Point {
	/// Point at `(x, y)`.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Euclidean distance to `other`.
	pub fn distance_to(self, other: Point) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// A single simulated particle.
///
/// `position` is where the particle is drawn. `rest` is the anchor it springs
/// back to; the anchor itself drifts by `velocity` each frame and bounces off
/// the surface edges.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
	/// Where the particle is drawn.
	pub position: Point,
	/// Anchor the particle springs back to; always inside the surface.
	pub rest: Point,
	/// Per-frame drift of the anchor.
	pub velocity: Point,
	/// Disc radius.
	pub radius: f64,
	/// Scales pointer repulsion ("density").
	pub mass: f64,
}

impl Particle {
	/// A particle sitting at its rest position.
	pub fn at_rest(rest: Point, velocity: Point, radius: f64, mass: f64) -> Self {
		Self {
			position: rest,
			rest,
			velocity,
			radius,
			mass,
		}
	}

	/// Seed a particle uniformly inside a `width` x `height` surface.
	pub fn random<R: Rng + ?Sized>(rng: &mut R, config: &NetworkConfig, width: f64, height: f64) -> Self {
		let rest = Point::new(unit(rng) * width, unit(rng) * height);
		let velocity = Point::new(
			(unit(rng) - 0.5) * config.speed,
			(unit(rng) - 0.5) * config.speed,
		);

		Self::at_rest(
			rest,
			velocity,
			config.radius.lerp(unit(rng)),
			config.mass.lerp(unit(rng)),
		)
	}

	/// Offset of the drawn position from the rest anchor.
	#[cfg(test)]
	pub(crate) fn displacement(&self) -> f64 {
		self.position.distance_to(self.rest)
	}
}

/// Uniform sample in `[0, 1)`.
pub(super) fn unit<R: Rng + ?Sized>(rng: &mut R) -> f64 {
	rng.gen_range(0.0..1.0)
}

/// Seed a fresh batch of `count` particles.
pub fn populate<R: Rng + ?Sized>(
	rng: &mut R,
	config: &NetworkConfig,
	count: usize,
	width: f64,
	height: f64,
) -> Vec<Particle> {
	(0..count)
		.map(|_| Particle::random(rng, config, width, height))
		.collect()
}
