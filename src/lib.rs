//! # driftfield - ambient particle-field backdrop
//!
//! A full-viewport constellation backdrop: a field of faint translucent
//! particles, connected by even fainter edges wherever two particles drift
//! within 70 px of each other. The field is regenerated and painted exactly
//! once per viewport resize - there is no animation loop, no motion, and no
//! state that survives a resize.
//!
//! ## Quick Start
//!
//! ```ignore
//! use driftfield::Viewer;
//!
//! fn main() -> Result<(), driftfield::ViewerError> {
//!     Viewer::new().run()
//! }
//! ```
//!
//! Or drive the lifecycle yourself against any [`Canvas`]:
//!
//! ```
//! use driftfield::{Backdrop, PixelSurface};
//!
//! let mut backdrop = Backdrop::new(PixelSurface::new(0, 0)).with_seed(42);
//! backdrop.mount(1920.0, 1080.0);          // synthetic initial resize
//! let rgba = backdrop.canvas().pixels();    // painted, ready to blit
//! # assert!(!rgba.is_empty());
//! ```
//!
//! ## Core Concepts
//!
//! ### Field
//!
//! [`Field::generate`] derives a particle count from the viewport width
//! (one particle per 30 px) and places each particle uniformly at random
//! with a small radius and a color from a fixed three-entry palette. The
//! random source is passed in, so seeded generation is fully deterministic.
//!
//! ### Renderer
//!
//! [`Renderer::paint`] does one background wash, one disc per particle, and
//! then the quadratic proximity pass: every pair closer than the threshold
//! gets a line whose opacity decays linearly to zero at the threshold.
//!
//! ### Backdrop
//!
//! [`Backdrop`] is the lifecycle controller: `mount` -> repaint per
//! `resize` -> `unmount`, after which resize events are ignored. [`Viewer`]
//! wires a backdrop to a real window and blits the painted pixels.
//!
//! ### Market feeds
//!
//! The dashboard content above the backdrop is simulated by [`market`]:
//! independent periodic tasks stepping bounded random walks and
//! broadcasting snapshots over channels.

pub mod backdrop;
pub mod canvas;
pub mod error;
pub mod field;
pub mod market;
pub mod raster;
pub mod render;
pub mod visuals;
pub mod window;

pub use backdrop::Backdrop;
pub use canvas::{Canvas, DrawOp, Recorder};
pub use error::{GpuError, ViewerError};
pub use field::{Field, FieldConfig, Particle};
pub use glam::Vec2;
pub use raster::PixelSurface;
pub use render::Renderer;
pub use visuals::{EdgeStyle, Rgba, BACKGROUND, PALETTE};
pub use window::Viewer;

/// Convenient re-exports for common usage.
///
/// # Usage
///
/// ```ignore
/// use driftfield::prelude::*;
/// ```
pub mod prelude {
    pub use crate::backdrop::Backdrop;
    pub use crate::canvas::{Canvas, DrawOp, Recorder};
    pub use crate::field::{Field, FieldConfig, Particle};
    pub use crate::market::{Coin, Feed, Prediction};
    pub use crate::raster::PixelSurface;
    pub use crate::render::Renderer;
    pub use crate::visuals::{EdgeStyle, Rgba, BACKGROUND, PALETTE};
    pub use crate::window::Viewer;
    pub use crate::Vec2;
}
