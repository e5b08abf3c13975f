//! Proximity graph between particles.
//!
//! A plain O(n^2) pair scan. Particle counts stay at or below a few dozen, so
//! no spatial index is used; raising the count well past ~200 would need one.

use super::particle::Particle;

/// An undirected edge between two particles, `a < b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
	/// Index of the first particle.
	pub a: usize,
	/// Index of the second particle, always greater than `a`.
	pub b: usize,
	/// `1 - distance / threshold`, in `(0, 1]`.
	pub opacity: f64,
}

/// Opacity for two particles `distance` apart, or `None` at or beyond `threshold`.
pub fn link_opacity(distance: f64, threshold: f64) -> Option<f64> {
	(distance < threshold).then(|| 1.0 - distance / threshold)
}

/// Rebuild `out` with every pair closer than `threshold`.
///
/// Reuses the caller's buffer so the per-frame scan does not allocate once the
/// buffer has grown to its working size.
pub fn collect_links(particles: &[Particle], threshold: f64, out: &mut Vec<Link>) {
	out.clear();
	for (a, p) in particles.iter().enumerate() {
		for (offset, q) in particles[a + 1..].iter().enumerate() {
			let distance = p.position.distance_to(q.position);
			if let Some(opacity) = link_opacity(distance, threshold) {
				out.push(Link {
					a,
					b: a + 1 + offset,
					opacity,
				});
			}
		}
	}
}

/// Allocating wrapper around [`collect_links`].
#[cfg(test)]
fn proximity_links(particles: &[Particle], threshold: f64) -> Vec<Link> {
	let mut links = Vec::new();
	collect_links(particles, threshold, &mut links);
	links
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::background::particle::Point;

	fn at(x: f64, y: f64) -> Particle {
		Particle::at_rest(Point::new(x, y), Point::default(), 2.0, 1.0)
	}

	#[test]
	fn far_pair_has_no_edge() {
		let links = proximity_links(&[at(0.0, 0.0), at(200.0, 0.0)], 120.0);
		assert!(links.is_empty());
	}

	#[test]
	fn near_pair_has_exactly_one_edge() {
		let links = proximity_links(&[at(0.0, 0.0), at(30.0, 40.0)], 120.0);
		assert_eq!(links.len(), 1);
		assert_eq!((links[0].a, links[0].b), (0, 1));
		assert!((links[0].opacity - (1.0 - 50.0 / 120.0)).abs() < 1e-12);
	}

	#[test]
	fn threshold_distance_is_excluded() {
		assert_eq!(link_opacity(120.0, 120.0), None);
		assert!(proximity_links(&[at(0.0, 0.0), at(120.0, 0.0)], 120.0).is_empty());
	}

	#[test]
	fn opacity_decreases_with_distance() {
		let mut last = f64::INFINITY;
		for d in (0..120).map(f64::from) {
			let opacity = link_opacity(d, 120.0).unwrap();
			assert!(opacity < last);
			assert!((0.0..=1.0).contains(&opacity));
			last = opacity;
		}
		assert!(link_opacity(119.999, 120.0).unwrap() < 1e-4);
	}

	#[test]
	fn pairs_are_unordered_and_unique() {
		let particles = [at(0.0, 0.0), at(10.0, 0.0), at(20.0, 0.0), at(500.0, 500.0)];
		let links = proximity_links(&particles, 120.0);

		let pairs: Vec<_> = links.iter().map(|l| (l.a, l.b)).collect();
		assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
	}

	#[test]
	fn buffer_is_reset_between_frames() {
		let mut buf = Vec::new();
		collect_links(&[at(0.0, 0.0), at(10.0, 0.0)], 120.0, &mut buf);
		assert_eq!(buf.len(), 1);
		collect_links(&[at(0.0, 0.0), at(300.0, 0.0)], 120.0, &mut buf);
		assert!(buf.is_empty());
	}
}
