//! Per-frame force model for the particle network.
//!
//! Each frame a particle is either pushed away from a nearby pointer or eased
//! back toward its rest anchor, and the anchor drifts and bounces inside the
//! surface. [`step`] is a pure function over plain values so the convergence
//! and bounds invariants can be checked in isolation.
//!
//! The anchor moves after the relax step, so a drifting particle never settles
//! exactly on it: with drift `v` the offset levels off near `v / (1 - keep)`
//! (5px at 0.25px/frame with no pointer). Convergence to within a fraction of a
//! pixel only holds for anchors that are not drifting.

use super::particle::{Particle, Point};

/// Offset kept per frame when the pointer is present but out of range (1/10 decay).
pub const NEAR_RELAX: f64 = 0.9;
/// Offset kept per frame when there is no pointer at all (1/20 decay).
pub const IDLE_RELAX: f64 = 0.95;

/// Surface extent in pixels; rest anchors live in `[0, width] x [0, height]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
	/// Horizontal extent.
	pub width: f64,
	/// Vertical extent.
	pub height: f64,
}

impl Bounds {
	/// Bounds of a `width` x `height` surface.
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	/// Whether `p` lies inside the closed rectangle.
	pub fn contains(&self, p: Point) -> bool {
		(0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
	}
}

/// Pointer position (if any) and its fixed influence radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
	/// Surface-local position; `None` when the pointer is off the surface.
	pub position: Option<Point>,
	/// Always positive.
	pub radius: f64,
}

impl Pointer {
	/// An absent pointer with the given influence radius.
	pub const fn new(radius: f64) -> Self {
		Self {
			position: None,
			radius,
		}
	}

	/// Place the pointer at surface-local `(x, y)`.
	pub fn move_to(&mut self, x: f64, y: f64) {
		self.position = Some(Point::new(x, y));
	}

	/// Mark the pointer as gone.
	pub fn clear(&mut self) {
		self.position = None;
	}
}

/// Repulsion strength in `[0, 1]` at `distance` from the pointer, or `None`
/// when the pointer is out of range.
pub fn repulsion(distance: f64, radius: f64) -> Option<f64> {
	(distance < radius).then(|| (radius - distance) / radius)
}

/// Advance one particle by one frame.
pub fn step(mut particle: Particle, bounds: Bounds, pointer: &Pointer) -> Particle {
	match pointer.position {
		Some(at) => {
			let distance = at.distance_to(particle.position);
			match repulsion(distance, pointer.radius) {
				// Coincident with the pointer: no direction, no push.
				Some(_) if distance == 0.0 => {}
				Some(force) => {
					let push = force * particle.mass / distance;
					particle.position.x -= (at.x - particle.position.x) * push;
					particle.position.y -= (at.y - particle.position.y) * push;
				}
				None => relax(&mut particle, NEAR_RELAX),
			}
		}
		None => relax(&mut particle, IDLE_RELAX),
	}

	drift(&mut particle, bounds);
	particle
}

fn relax(particle: &mut Particle, keep: f64) {
	particle.position.x = particle.rest.x + (particle.position.x - particle.rest.x) * keep;
	particle.position.y = particle.rest.y + (particle.position.y - particle.rest.y) * keep;
}

fn drift(particle: &mut Particle, bounds: Bounds) {
	particle.rest.x += particle.velocity.x;
	particle.rest.y += particle.velocity.y;

	if particle.rest.x < 0.0 || particle.rest.x > bounds.width {
		particle.velocity.x = -particle.velocity.x;
	}
	if particle.rest.y < 0.0 || particle.rest.y > bounds.height {
		particle.velocity.y = -particle.velocity.y;
	}

	particle.rest.x = particle.rest.x.clamp(0.0, bounds.width);
	particle.rest.y = particle.rest.y.clamp(0.0, bounds.height);
}
