//! Animated canvas background.
//!
//! Two interchangeable scenes share one canvas lifecycle:
//! - a particle network: drifting points pushed away by the pointer, springing
//!   back to their anchors, and linked to neighbours within a threshold
//! - a geometric field: rotating outlined triangles, squares and hexagons that
//!   wrap around the edges
//!
//! The simulation ([`Surface`]) is plain Rust and runs anywhere; the browser
//! side ([`AnimationLoop`], [`BackgroundCanvas`]) drives it once per display
//! refresh and redraws with a light or dark palette chosen by the host page.
//!
//! # Example
//!
//! ```ignore
//! use portfolio_background::{BackgroundCanvas, BackgroundConfig};
//!
//! view! { <BackgroundCanvas config=BackgroundConfig::default() /> }
//! ```

mod animation;
mod component;
pub mod config;
mod error;
pub mod force;
pub mod links;
pub mod particle;
pub mod render;
pub mod shapes;
mod surface;
pub mod theme;

pub use animation::AnimationLoop;
pub use component::BackgroundCanvas;
pub use config::{BackgroundConfig, BackgroundKind};
pub use error::SurfaceError;
pub use surface::{Scene, Surface, SurfacePhase};
pub use theme::Palette;
