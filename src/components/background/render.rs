//! Canvas rendering for the background.
//!
//! Drawing goes through the small [`Painter`] trait so frames can be recorded
//! in tests; the browser implementation sits on `CanvasRenderingContext2d`.
//! Pass order: clear, particles, then links on top (shapes have a single pass).

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::force::Bounds;
use super::particle::Point;
use super::surface::{Scene, Surface};
use super::theme::{Color, GLOW_BLUR, LINK_WIDTH, Palette, SHAPE_WIDTH};

/// Minimal set of 2-D drawing operations the background needs.
pub trait Painter {
	/// Erase the whole surface.
	fn clear(&self, bounds: Bounds);
	/// Filled disc with a soft glow of `glow` px in the same color.
	fn fill_disc(&self, center: Point, radius: f64, color: Color, glow: f64);
	/// Straight line segment.
	fn stroke_line(&self, from: Point, to: Point, color: Color, width: f64);
	/// Closed outline through `points`.
	fn stroke_polygon(&self, points: &[Point], color: Color, width: f64);
}

impl Painter for CanvasRenderingContext2d {
	fn clear(&self, bounds: Bounds) {
		self.clear_rect(0.0, 0.0, bounds.width, bounds.height);
	}

	fn fill_disc(&self, center: Point, radius: f64, color: Color, glow: f64) {
		let css = color.to_css();
		self.set_fill_style_str(&css);
		self.begin_path();
		let _ = self.arc(center.x, center.y, radius, 0.0, PI * 2.0);
		self.close_path();
		self.fill();

		if glow > 0.0 {
			self.set_shadow_blur(glow);
			self.set_shadow_color(&css);
			self.fill();
			self.set_shadow_blur(0.0);
		}
	}

	fn stroke_line(&self, from: Point, to: Point, color: Color, width: f64) {
		self.set_stroke_style_str(&color.to_css());
		self.set_line_width(width);
		self.begin_path();
		self.move_to(from.x, from.y);
		self.line_to(to.x, to.y);
		self.stroke();
	}

	fn stroke_polygon(&self, points: &[Point], color: Color, width: f64) {
		let Some((first, rest)) = points.split_first() else {
			return;
		};
		self.set_stroke_style_str(&color.to_css());
		self.set_line_width(width);
		self.begin_path();
		self.move_to(first.x, first.y);
		for p in rest {
			self.line_to(p.x, p.y);
		}
		self.close_path();
		self.stroke();
	}
}

/// Draw one frame of `surface`. `dark_mode` is read by the caller every frame.
pub fn render<P: Painter + ?Sized>(surface: &Surface, painter: &P, dark_mode: bool) {
	let palette = Palette::for_dark_mode(dark_mode);
	painter.clear(surface.bounds());

	match surface.scene() {
		Scene::Network { particles, links } => {
			let fill = palette.particle();
			for p in particles {
				painter.fill_disc(p.position, p.radius, fill, GLOW_BLUR);
			}
			for link in links {
				painter.stroke_line(
					particles[link.a].position,
					particles[link.b].position,
					palette.link(link.opacity),
					LINK_WIDTH,
				);
			}
		}
		Scene::Shapes(shapes) => {
			for s in shapes {
				painter.stroke_polygon(&s.outline(), palette.shape(s.opacity), SHAPE_WIDTH);
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use std::cell::RefCell;

	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;
	use crate::components::background::config::{BackgroundConfig, BackgroundKind, NetworkConfig};
	use crate::components::background::theme::{ACCENT_BLUE, WHITE};

	#[derive(Debug, PartialEq)]
	enum Op {
		Clear,
		Disc(Color),
		Line(Color),
		Polygon(usize, Color),
	}

	#[derive(Default)]
	struct Recorder(RefCell<Vec<Op>>);

	impl Painter for Recorder {
		fn clear(&self, _: Bounds) {
			self.0.borrow_mut().push(Op::Clear);
		}
		fn fill_disc(&self, _: Point, _: f64, color: Color, _: f64) {
			self.0.borrow_mut().push(Op::Disc(color));
		}
		fn stroke_line(&self, _: Point, _: Point, color: Color, _: f64) {
			self.0.borrow_mut().push(Op::Line(color));
		}
		fn stroke_polygon(&self, points: &[Point], color: Color, _: f64) {
			self.0.borrow_mut().push(Op::Polygon(points.len(), color));
		}
	}

	impl Recorder {
		fn lines(&self) -> usize {
			self.0.borrow().iter().filter(|op| matches!(op, Op::Line(_))).count()
		}
	}

	/// Two particles `gap` px apart that never drift.
	fn pair(gap: f64) -> Surface {
		let config = BackgroundConfig {
			network: NetworkConfig {
				particle_count: 2,
				narrow_particle_count: 2,
				speed: 0.0,
				..NetworkConfig::default()
			},
			..BackgroundConfig::default()
		};
		let mut s = Surface::new(config, StdRng::seed_from_u64(1));
		s.request_resize(800.0, 600.0);
		s.tick();
		s.place_particles_for_test(&[Point::new(100.0, 100.0), Point::new(100.0 + gap, 100.0)]);
		s.tick();
		s
	}

	#[test]
	fn close_pair_draws_one_line() {
		let rec = Recorder::default();
		render(&pair(60.0), &rec, false);

		let ops = rec.0.borrow();
		assert_eq!(ops[0], Op::Clear);
		assert_eq!(ops.iter().filter(|op| matches!(op, Op::Disc(_))).count(), 2);
		assert_eq!(rec.lines(), 1);
		assert_eq!(ops[3], Op::Line(ACCENT_BLUE.with_alpha(0.5 * 0.3)));
	}

	#[test]
	fn distant_pair_draws_no_lines() {
		let rec = Recorder::default();
		render(&pair(200.0), &rec, false);
		assert_eq!(rec.lines(), 0);
	}

	#[test]
	fn dark_mode_switches_every_frame() {
		let surface = pair(60.0);

		let light = Recorder::default();
		render(&surface, &light, false);
		assert_eq!(light.0.borrow()[1], Op::Disc(ACCENT_BLUE.with_alpha(0.8)));

		let dark = Recorder::default();
		render(&surface, &dark, true);
		assert_eq!(dark.0.borrow()[1], Op::Disc(WHITE.with_alpha(0.8)));
	}

	#[test]
	fn shapes_draw_outlines_only() {
		let config = BackgroundConfig {
			kind: BackgroundKind::Shapes,
			..BackgroundConfig::default()
		};
		let mut s = Surface::new(config, StdRng::seed_from_u64(9));
		s.request_resize(1200.0, 800.0);
		s.tick();

		let rec = Recorder::default();
		render(&s, &rec, true);
		let ops = rec.0.borrow();
		assert_eq!(ops.len(), 1 + 15);
		assert!(ops[1..].iter().all(|op| matches!(
			op,
			Op::Polygon(n, c) if [3, 4, 6].contains(n) && c.r == 255
		)));
	}
}
