//! Errors raised while binding the background to a page.
//!
//! None of these are fatal to the host page: callers log them and leave the
//! background inert.

use thiserror::Error;

/// Why a background could not bind to its canvas.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SurfaceError {
	/// No `<canvas>` with this id exists in the document.
	#[error("canvas element not found: #{0}")]
	MissingTarget(String),

	/// The canvas exists but refused a 2-D rendering context.
	#[error("2d context not available on #{0}")]
	ContextUnavailable(String),

	/// No `window`/`document` (not running in a browser page).
	#[error("no browser window available")]
	NoWindow,
}
