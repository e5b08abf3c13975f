//! Simulation state for one background surface.
//!
//! Owns the surface bounds, the pointer, and the live scene (particle network
//! or shapes). Created once per canvas and mutated by the animation loop each
//! frame and by input callbacks in between frames. Resizes are queued and
//! applied at the start of the next [`Surface::tick`], so a frame never sees a
//! half-repopulated scene.

use log::debug;
use rand::rngs::StdRng;

use super::config::{BackgroundConfig, BackgroundKind};
use super::force::{self, Bounds, Pointer};
use super::links::{Link, collect_links};
use super::particle::{self, Particle};
use super::shapes::{self, Shape};

/// Lifecycle of a surface. There is no paused state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfacePhase {
	/// No bounds yet; ticks are no-ops.
	Uninitialized,
	/// Populated and animating.
	Running,
}

/// The animated content of a surface.
#[derive(Clone, Debug)]
pub enum Scene {
	/// Particle network with the links from the last tick.
	Network {
		/// Live particles.
		particles: Vec<Particle>,
		/// Pairs closer than the link threshold.
		links: Vec<Link>,
	},
	/// Geometric shapes field.
	Shapes(Vec<Shape>),
}

impl Scene {
	fn empty(kind: BackgroundKind) -> Self {
		match kind {
			BackgroundKind::Particles => Scene::Network {
				particles: Vec::new(),
				links: Vec::new(),
			},
			BackgroundKind::Shapes => Scene::Shapes(Vec::new()),
		}
	}
}

/// One canvas worth of simulation state.
pub struct Surface {
	config: BackgroundConfig,
	phase: SurfacePhase,
	bounds: Bounds,
	pending: Option<Bounds>,
	pointer: Pointer,
	scene: Scene,
	rng: StdRng,
}

impl Surface {
	/// An uninitialized surface; `config` is validated first.
	pub fn new(config: BackgroundConfig, rng: StdRng) -> Self {
		let config = config.validated();
		Self {
			pointer: Pointer::new(config.network.influence_radius),
			scene: Scene::empty(config.kind),
			phase: SurfacePhase::Uninitialized,
			bounds: Bounds::new(0.0, 0.0),
			pending: None,
			config,
			rng,
		}
	}

	/// Current lifecycle phase.
	pub fn phase(&self) -> SurfacePhase {
		self.phase
	}

	/// Bounds in effect for the current frame.
	pub fn bounds(&self) -> Bounds {
		self.bounds
	}

	/// Validated configuration.
	pub fn config(&self) -> &BackgroundConfig {
		&self.config
	}

	/// Current pointer state.
	pub fn pointer(&self) -> &Pointer {
		&self.pointer
	}

	/// Live scene.
	pub fn scene(&self) -> &Scene {
		&self.scene
	}

	/// Particles of a network scene; empty for shapes.
	pub fn particles(&self) -> &[Particle] {
		match &self.scene {
			Scene::Network { particles, .. } => particles,
			Scene::Shapes(_) => &[],
		}
	}

	/// Links computed by the last tick; empty for shapes.
	pub fn links(&self) -> &[Link] {
		match &self.scene {
			Scene::Network { links, .. } => links,
			Scene::Shapes(_) => &[],
		}
	}

	/// Queue new bounds; repopulation happens at the next frame boundary.
	///
	/// Later calls before that frame replace earlier ones.
	pub fn request_resize(&mut self, width: f64, height: f64) {
		self.pending = Some(Bounds::new(width.max(0.0), height.max(0.0)));
	}

	/// Pointer (or first touch) moved to surface-local `(x, y)`.
	pub fn pointer_move(&mut self, x: f64, y: f64) {
		self.pointer.move_to(x, y);
	}

	/// Pointer left the page or the touch ended.
	pub fn pointer_leave(&mut self) {
		self.pointer.clear();
	}

	/// Advance one frame: apply any queued resize, step every entity, and
	/// rebuild the proximity links.
	pub fn tick(&mut self) {
		if let Some(bounds) = self.pending.take() {
			self.repopulate(bounds);
		}
		if self.phase == SurfacePhase::Uninitialized {
			return;
		}

		let bounds = self.bounds;
		match &mut self.scene {
			Scene::Network { particles, links } => {
				for p in particles.iter_mut() {
					*p = force::step(*p, bounds, &self.pointer);
				}
				collect_links(particles, self.config.network.link_threshold, links);
			}
			Scene::Shapes(shapes) => {
				for s in shapes.iter_mut() {
					s.advance(bounds);
				}
			}
		}
	}

	/// Discard the whole scene and seed a new one for `bounds`.
	fn repopulate(&mut self, bounds: Bounds) {
		self.bounds = bounds;
		self.phase = SurfacePhase::Running;

		let (w, h) = (bounds.width, bounds.height);
		match &mut self.scene {
			Scene::Network { particles, links } => {
				let count = self.config.particle_count_for(w);
				*particles = particle::populate(&mut self.rng, &self.config.network, count, w, h);
				links.clear();
				debug!("background: seeded {count} particles for {w}x{h}");
			}
			Scene::Shapes(items) => {
				let count = self.config.shape_count_for(w);
				*items = shapes::populate(&mut self.rng, &self.config.shapes, count, w, h);
				debug!("background: seeded {count} shapes for {w}x{h}");
			}
		}
	}

	/// Pin network particles at fixed spots (position and rest).
	#[cfg(test)]
	pub(crate) fn place_particles_for_test(&mut self, spots: &[super::particle::Point]) {
		if let Scene::Network { particles, .. } = &mut self.scene {
			for (p, &spot) in particles.iter_mut().zip(spots) {
				p.position = spot;
				p.rest = spot;
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;

	use super::*;
	use crate::components::background::config::Span;
	use crate::components::background::particle::Point;

	fn surface(kind: BackgroundKind) -> Surface {
		let config = BackgroundConfig {
			kind,
			..BackgroundConfig::default()
		};
		Surface::new(config, StdRng::seed_from_u64(42))
	}

	#[test]
	fn starts_uninitialized_and_inert() {
		let mut s = surface(BackgroundKind::Particles);
		s.tick();
		assert_eq!(s.phase(), SurfacePhase::Uninitialized);
		assert!(s.particles().is_empty());
	}

	#[test]
	fn resize_is_applied_on_next_tick() {
		let mut s = surface(BackgroundKind::Particles);
		s.request_resize(800.0, 600.0);
		assert!(s.particles().is_empty());

		s.tick();
		assert_eq!(s.phase(), SurfacePhase::Running);
		assert_eq!(s.bounds(), Bounds::new(800.0, 600.0));
		assert_eq!(s.particles().len(), 80);
	}

	#[test]
	fn resize_discards_and_reseeds() {
		let mut s = surface(BackgroundKind::Particles);
		s.request_resize(800.0, 600.0);
		s.tick();
		let before = s.particles().to_vec();

		s.request_resize(400.0, 300.0);
		// Old scene stays intact until the frame boundary.
		assert_eq!(s.particles(), &before[..]);

		s.tick();
		let bounds = Bounds::new(400.0, 300.0);
		assert_eq!(s.particles().len(), 40);
		assert!(s.particles().iter().all(|p| bounds.contains(p.rest)));
		assert!(s.particles().iter().all(|p| !before.contains(p)));
	}

	#[test]
	fn rest_positions_stay_in_bounds_across_resizes() {
		let mut s = surface(BackgroundKind::Particles);
		for (i, (w, h)) in [(1280.0, 720.0), (375.0, 812.0), (1920.0, 1080.0), (10.0, 10.0)]
			.into_iter()
			.enumerate()
		{
			s.request_resize(w, h);
			if i % 2 == 0 {
				s.pointer_move(w / 2.0, h / 2.0);
			} else {
				s.pointer_leave();
			}
			for _ in 0..300 {
				s.tick();
				let b = s.bounds();
				assert!(s.particles().iter().all(|p| b.contains(p.rest)));
			}
		}
	}

	#[test]
	fn tick_builds_links_from_current_positions() {
		let mut s = surface(BackgroundKind::Particles);
		s.request_resize(800.0, 600.0);
		s.tick();

		let threshold = s.config().network.link_threshold;
		let particles = s.particles();
		for link in s.links() {
			let d = particles[link.a].position.distance_to(particles[link.b].position);
			assert!(d < threshold);
			assert!((link.opacity - (1.0 - d / threshold)).abs() < 1e-12);
		}
		let expected = (0..particles.len())
			.flat_map(|a| (a + 1..particles.len()).map(move |b| (a, b)))
			.filter(|&(a, b)| particles[a].position.distance_to(particles[b].position) < threshold)
			.count();
		assert_eq!(s.links().len(), expected);
	}

	#[test]
	fn config_given_in_code_is_validated() {
		let mut config = BackgroundConfig::default();
		config.network.influence_radius = -3.0;
		config.network.link_threshold = 0.0;
		config.network.mass = Span::new(10.0, 2.0);
		let mut s = Surface::new(config, StdRng::seed_from_u64(5));

		assert_eq!(s.config().network.influence_radius, 150.0);
		assert_eq!(s.config().network.link_threshold, 120.0);
		assert_eq!(s.config().network.mass, Span::new(1.0, 31.0));
		assert_eq!(s.pointer().radius, 150.0);

		s.request_resize(800.0, 600.0);
		s.pointer_move(400.0, 300.0);
		s.tick();
		assert!(s.particles().iter().all(|p| p.position.x.is_finite() && p.position.y.is_finite()));
	}

	#[test]
	fn pointer_state_follows_input() {
		let mut s = surface(BackgroundKind::Particles);
		s.pointer_move(12.0, 34.0);
		assert_eq!(s.pointer().position, Some(Point::new(12.0, 34.0)));
		assert_eq!(s.pointer().radius, 150.0);
		s.pointer_leave();
		assert_eq!(s.pointer().position, None);
	}

	#[test]
	fn shapes_scene_has_no_particles() {
		let mut s = surface(BackgroundKind::Shapes);
		s.request_resize(1024.0, 768.0);
		s.tick();
		match s.scene() {
			Scene::Shapes(shapes) => assert_eq!(shapes.len(), 15),
			Scene::Network { .. } => panic!("expected shapes"),
		}
		assert!(s.particles().is_empty());
		assert!(s.links().is_empty());

		s.request_resize(500.0, 700.0);
		s.tick();
		match s.scene() {
			Scene::Shapes(shapes) => assert_eq!(shapes.len(), 8),
			Scene::Network { .. } => panic!("expected shapes"),
		}
	}
}
