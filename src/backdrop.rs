//! Backdrop lifecycle: mount, resize, unmount.
//!
//! A [`Backdrop`] owns one drawing surface and the field most recently
//! generated for it, and moves between exactly two states:
//!
//! | State | Resize events |
//! |-----------|--------------------------------------------------|
//! | Unmounted | Ignored - nothing is generated, nothing is drawn |
//! | Mounted | Regenerate the field and paint it, once |
//!
//! Mounting runs one synthetic resize immediately so the first paint uses
//! real viewport dimensions instead of waiting for a genuine event. There is
//! no debouncing and no animation loop: each resize costs one bounded paint,
//! and nothing runs between events.

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::canvas::Canvas;
use crate::field::{Field, FieldConfig};
use crate::render::Renderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Unmounted,
    Mounted,
}

/// An ambient particle-field backdrop bound to one drawing surface.
///
/// # Example
///
/// ```
/// use driftfield::{Backdrop, Recorder};
///
/// let mut backdrop = Backdrop::new(Recorder::new(0.0, 0.0)).with_seed(7);
/// backdrop.mount(1280.0, 720.0);
/// assert_eq!(backdrop.field().len(), 42); // floor(1280 / 30)
/// backdrop.unmount();
/// ```
pub struct Backdrop<C: Canvas> {
    canvas: C,
    renderer: Renderer,
    config: FieldConfig,
    rng: SmallRng,
    field: Field,
    state: State,
}

impl<C: Canvas> Backdrop<C> {
    /// Create an unmounted backdrop owning `canvas`.
    pub fn new(canvas: C) -> Self {
        Self {
            canvas,
            renderer: Renderer::new(),
            config: FieldConfig::default(),
            rng: SmallRng::from_entropy(),
            field: Field::empty(),
            state: State::Unmounted,
        }
    }

    /// Use a deterministic random source. Fields regenerate identically for
    /// the same seed and resize sequence.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    /// Override the generation tunables.
    pub fn with_config(mut self, config: FieldConfig) -> Self {
        self.config = config;
        self
    }

    /// Override how the field is painted.
    pub fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn is_mounted(&self) -> bool {
        self.state == State::Mounted
    }

    /// Transition to Mounted and run one synthetic resize at the given
    /// viewport dimensions. Mounting an already-mounted backdrop just
    /// resizes it.
    pub fn mount(&mut self, width: f32, height: f32) {
        self.state = State::Mounted;
        self.resize(width, height);
    }

    /// Mirror new viewport dimensions: resize the surface, regenerate the
    /// field, paint once. Ignored while unmounted - this models the resize
    /// listener being deregistered.
    pub fn resize(&mut self, width: f32, height: f32) {
        if self.state != State::Mounted {
            return;
        }
        self.canvas.resize(width, height);
        self.field = Field::generate(&self.config, width, height, &mut self.rng);
        self.renderer.paint(&mut self.canvas, &self.field);
    }

    /// Transition back to Unmounted. Subsequent resize events draw nothing.
    /// The surface itself is owned by the caller's environment and needs no
    /// further cleanup.
    pub fn unmount(&mut self) {
        self.state = State::Unmounted;
    }

    /// The most recently generated field.
    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Recorder;

    #[test]
    fn mount_paints_immediately() {
        let mut backdrop = Backdrop::new(Recorder::new(0.0, 0.0)).with_seed(1);
        assert!(!backdrop.is_mounted());

        backdrop.mount(900.0, 600.0);
        assert!(backdrop.is_mounted());
        assert_eq!(backdrop.field().len(), 30);
        assert_eq!(backdrop.canvas().rect_count(), 1);
        assert_eq!(backdrop.canvas().circle_count(), 30);
    }

    #[test]
    fn resize_replaces_the_field_wholesale() {
        let mut backdrop = Backdrop::new(Recorder::new(0.0, 0.0)).with_seed(2);
        backdrop.mount(900.0, 600.0);
        let before = backdrop.field().clone();

        backdrop.resize(300.0, 200.0);
        let after = backdrop.field();
        assert_eq!(after.len(), 10);
        assert_ne!(&before, after);
        for p in after.particles() {
            assert!(p.position.x < 300.0);
            assert!(p.position.y < 200.0);
        }
    }

    #[test]
    fn resize_before_mount_is_ignored() {
        let mut backdrop = Backdrop::new(Recorder::new(0.0, 0.0)).with_seed(3);
        backdrop.resize(900.0, 600.0);
        assert!(backdrop.field().is_empty());
        assert!(backdrop.canvas().ops().is_empty());
    }

    #[test]
    fn resize_after_unmount_draws_nothing() {
        let mut backdrop = Backdrop::new(Recorder::new(0.0, 0.0)).with_seed(4);
        backdrop.mount(900.0, 600.0);
        backdrop.unmount();
        backdrop.canvas_mut().clear();

        backdrop.resize(500.0, 500.0);
        assert!(backdrop.canvas().ops().is_empty());
    }

    #[test]
    fn zero_width_viewport_is_degenerate_but_valid() {
        let mut backdrop = Backdrop::new(Recorder::new(0.0, 0.0)).with_seed(5);
        backdrop.mount(0.0, 600.0);
        assert!(backdrop.is_mounted());
        assert!(backdrop.field().is_empty());
        // The zero-area surface makes the paint a no-op, not an error.
        assert!(backdrop.canvas().ops().is_empty());
    }
}
