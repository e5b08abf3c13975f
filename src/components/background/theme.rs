//! Light and dark palettes for the background.
//!
//! The host page owns the dark-mode flag; the renderer receives it every frame
//! and picks one of exactly two palettes.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha in `[0, 1]`.
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Same color with alpha replaced (clamped to `[0, 1]`).
	pub fn with_alpha(self, a: f64) -> Self {
		Self {
			a: a.clamp(0.0, 1.0),
			..self
		}
	}

	/// CSS color string: hex when opaque, `rgba(..)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Accent blue used on light pages.
pub const ACCENT_BLUE: Color = Color::rgb(54, 133, 251);
/// White used on dark pages.
pub const WHITE: Color = Color::rgb(255, 255, 255);

/// Particle fill alpha.
const PARTICLE_ALPHA: f64 = 0.8;
/// Link alpha at full opacity (distance 0).
const LINK_ALPHA: f64 = 0.3;

/// Shadow blur radius (px) for the particle glow.
pub const GLOW_BLUR: f64 = 10.0;
/// Link stroke width (px).
pub const LINK_WIDTH: f64 = 1.0;
/// Shape outline width (px).
pub const SHAPE_WIDTH: f64 = 2.0;

/// One of the two fixed palettes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Palette {
	/// Accent blue on light pages.
	Light,
	/// White on dark pages.
	Dark,
}

impl Palette {
	/// Palette for the host's dark-mode flag.
	pub fn for_dark_mode(dark: bool) -> Self {
		if dark { Palette::Dark } else { Palette::Light }
	}

	/// Opaque base color.
	pub fn base(self) -> Color {
		match self {
			Palette::Light => ACCENT_BLUE,
			Palette::Dark => WHITE,
		}
	}

	/// Fill (and glow) color for particle discs.
	pub fn particle(self) -> Color {
		self.base().with_alpha(PARTICLE_ALPHA)
	}

	/// Stroke color for a link with the given proximity opacity.
	pub fn link(self, opacity: f64) -> Color {
		self.base().with_alpha(opacity * LINK_ALPHA)
	}

	/// Stroke color for a shape outline.
	pub fn shape(self, opacity: f64) -> Color {
		self.base().with_alpha(opacity)
	}
}
