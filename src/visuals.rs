//! Visual constants for the backdrop.
//!
//! Everything the renderer paints with lives here: the translucent particle
//! palette, the dark background wash, and the styling of the faint edges that
//! connect nearby particles. Colors are deliberately dim - the backdrop sits
//! behind real page content and must never compete with it.

/// A non-premultiplied RGBA color with f32 channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::opaque(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Same color with a different alpha.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    /// Construct from 8-bit channels plus an f32 alpha (CSS `rgba()` style).
    pub const fn from_u8(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a,
        }
    }
}

/// Alpha shared by every palette entry.
pub const PALETTE_ALPHA: f32 = 0.15;

/// The fixed particle palette: dimmed purple, blue, and green.
pub const PALETTE: [Rgba; 3] = [
    Rgba::from_u8(139, 92, 246, PALETTE_ALPHA), // purple
    Rgba::from_u8(14, 165, 233, PALETTE_ALPHA), // blue
    Rgba::from_u8(16, 185, 129, PALETTE_ALPHA), // green
];

/// Translucent near-black wash painted before anything else.
pub const BACKGROUND: Rgba = Rgba::from_u8(10, 15, 24, 0.2);

/// Styling for the proximity edges between nearby particles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeStyle {
    /// Maximum distance (px) at which two particles are still connected.
    pub threshold: f32,
    /// Stroke width in pixels.
    pub width: f32,
    /// Opacity of an edge at zero distance; decays linearly to the threshold.
    pub max_opacity: f32,
    /// Base stroke color; alpha is replaced per edge by [`EdgeStyle::opacity`].
    pub color: Rgba,
}

impl Default for EdgeStyle {
    fn default() -> Self {
        Self {
            threshold: 70.0,
            width: 0.2,
            max_opacity: 0.01,
            color: Rgba::WHITE,
        }
    }
}

impl EdgeStyle {
    /// Whether two particles at distance `d` receive an edge at all.
    #[inline]
    pub fn connects(&self, d: f32) -> bool {
        d < self.threshold
    }

    /// Stroke opacity for an edge of length `d`.
    ///
    /// `max_opacity * (1 - d / threshold)`, clamped so it never goes negative.
    #[inline]
    pub fn opacity(&self, d: f32) -> f32 {
        (self.max_opacity * (1.0 - d / self.threshold)).max(0.0)
    }
}
