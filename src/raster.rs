//! CPU rasterizer backing the windowed presenter.
//!
//! [`PixelSurface`] is an RGBA8 pixel grid that mirrors the backdrop's
//! drawing surface, small enough to repaint wholesale on every resize. It
//! rasterizes with pixel-center coverage and source-over blending, no
//! antialiasing, so repeated identical paints are byte-identical and the
//! buffer can be uploaded to the GPU (or handed to any blitting API) as-is.

use glam::Vec2;

use crate::canvas::Canvas;
use crate::visuals::Rgba;

/// An owned RGBA8 pixel surface implementing [`Canvas`].
#[derive(Debug, Clone, PartialEq)]
pub struct PixelSurface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PixelSurface {
    /// Create a surface. Zero dimensions are valid and hold no pixels.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width as usize) * (height as usize) * 4],
        }
    }

    /// Raw RGBA bytes, row-major, ready for texture upload.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn pixel_width(&self) -> u32 {
        self.width
    }

    pub fn pixel_height(&self) -> u32 {
        self.height
    }

    /// Reset every pixel to transparent black.
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }

    /// Color of the pixel at `(x, y)` as raw RGBA bytes.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let texels: &[[u8; 4]] = bytemuck::cast_slice(&self.pixels);
        texels[(y * self.width + x) as usize]
    }

    /// Source-over blend `color` into the pixel at `(x, y)`.
    fn blend(&mut self, x: i64, y: i64, color: Rgba) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let a = color.a.clamp(0.0, 1.0);
        if a <= 0.0 {
            return;
        }

        let off = ((y as usize) * (self.width as usize) + x as usize) * 4;
        let src = [color.r, color.g, color.b];
        for (i, s) in src.iter().enumerate() {
            let d = self.pixels[off + i] as f32 / 255.0;
            let out = s * a + d * (1.0 - a);
            self.pixels[off + i] = (out * 255.0 + 0.5) as u8;
        }
        let da = self.pixels[off + 3] as f32 / 255.0;
        let out_a = a + da * (1.0 - a);
        self.pixels[off + 3] = (out_a * 255.0 + 0.5) as u8;
    }
}

impl Canvas for PixelSurface {
    fn width(&self) -> f32 {
        self.width as f32
    }

    fn height(&self) -> f32 {
        self.height as f32
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0).round() as u32;
        self.height = height.max(0.0).round() as u32;
        self.pixels = vec![0; (self.width as usize) * (self.height as usize) * 4];
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba) {
        if size.x <= 0.0 || size.y <= 0.0 {
            return;
        }
        let x0 = origin.x.max(0.0).floor() as i64;
        let y0 = origin.y.max(0.0).floor() as i64;
        let x1 = ((origin.x + size.x).ceil() as i64).min(self.width as i64);
        let y1 = ((origin.y + size.y).ceil() as i64).min(self.height as i64);

        for y in y0..y1 {
            for x in x0..x1 {
                let cx = x as f32 + 0.5;
                let cy = y as f32 + 0.5;
                if cx >= origin.x && cx < origin.x + size.x && cy >= origin.y && cy < origin.y + size.y
                {
                    self.blend(x, y, color);
                }
            }
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        if radius <= 0.0 {
            return;
        }
        let x0 = (center.x - radius).floor() as i64;
        let y0 = (center.y - radius).floor() as i64;
        let x1 = (center.x + radius).ceil() as i64;
        let y1 = (center.y + radius).ceil() as i64;

        let r2 = radius * radius;
        let mut covered = 0usize;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let d = Vec2::new(x as f32 + 0.5, y as f32 + 0.5) - center;
                if d.length_squared() <= r2 {
                    self.blend(x, y, color);
                    covered += 1;
                }
            }
        }

        // A sub-pixel disc can miss every pixel center; land it on the
        // nearest pixel with its area as coverage.
        if covered == 0 {
            let area = (std::f32::consts::PI * r2).min(1.0);
            self.blend(
                center.x.floor() as i64,
                center.y.floor() as i64,
                color.with_alpha(color.a * area),
            );
        }
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        // Thin-line approximation: one pixel of footprint, alpha scaled by
        // the sub-pixel stroke width.
        let color = color.with_alpha(color.a * width.clamp(0.0, 1.0));
        if color.a <= 0.0 {
            return;
        }

        let mut x = from.x.floor() as i64;
        let mut y = from.y.floor() as i64;
        let x_end = to.x.floor() as i64;
        let y_end = to.y.floor() as i64;

        let dx = (x_end - x).abs();
        let dy = -(y_end - y).abs();
        let sx = if x < x_end { 1 } else { -1 };
        let sy = if y < y_end { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.blend(x, y, color);
            if x == x_end && y == y_end {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }
}
