//! Particle field model and generation.
//!
//! A [`Field`] is the complete set of particles produced for one viewport
//! size. It is regenerated wholesale on every resize and never mutated in
//! place - particles do not move once placed.
//!
//! Generation is a pure function of the configuration, the surface
//! dimensions, and an explicitly passed random source, so tests can seed a
//! [`rand::rngs::SmallRng`] and get reproducible fields.

use glam::Vec2;
use rand::Rng;

use crate::visuals::{Rgba, PALETTE};

/// A single positioned, colored, radius-bearing point in the backdrop.
///
/// Immutable once created; the whole field is replaced instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Position in surface pixel coordinates.
    pub position: Vec2,
    /// Disc radius in pixels. Always within the configured range.
    pub radius: f32,
    /// One of the fixed palette entries.
    pub color: Rgba,
}

/// Tunables for field generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldConfig {
    /// One particle is generated per this many pixels of viewport width.
    pub px_per_particle: f32,
    /// Smallest particle radius.
    pub radius_min: f32,
    /// Largest particle radius. Kept visually negligible.
    pub radius_max: f32,
    /// Colors particles are drawn from, uniformly at random.
    pub palette: [Rgba; 3],
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            px_per_particle: 30.0,
            radius_min: 0.3,
            radius_max: 1.5,
            palette: PALETTE,
        }
    }
}

impl FieldConfig {
    /// Number of particles for a viewport of width `width`.
    ///
    /// `floor(width / px_per_particle)`; non-positive widths yield zero.
    pub fn particle_count(&self, width: f32) -> usize {
        if width <= 0.0 {
            return 0;
        }
        (width / self.px_per_particle).floor() as usize
    }
}

/// The ordered set of particles generated for one surface size.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
}

impl Field {
    /// An empty field for a zero-sized surface. What a backdrop holds before
    /// it is mounted.
    pub fn empty() -> Self {
        Self {
            particles: Vec::new(),
            width: 0.0,
            height: 0.0,
        }
    }

    /// Generate a fresh field for a `width x height` surface.
    ///
    /// Any non-negative dimensions are valid; a width below one particle's
    /// worth of pixels produces an empty field, not an error.
    pub fn generate(config: &FieldConfig, width: f32, height: f32, rng: &mut impl Rng) -> Self {
        let width = width.max(0.0);
        let height = height.max(0.0);
        let count = config.particle_count(width);

        let particles = (0..count)
            .map(|_| Particle {
                position: Vec2::new(
                    rng.gen_range(0.0..width),
                    if height > 0.0 {
                        rng.gen_range(0.0..height)
                    } else {
                        0.0
                    },
                ),
                radius: rng.gen_range(config.radius_min..=config.radius_max),
                color: config.palette[rng.gen_range(0..config.palette.len())],
            })
            .collect();

        Self {
            particles,
            width,
            height,
        }
    }

    /// Build a field from explicit particles, e.g. for composing fixed
    /// layouts. Callers are responsible for keeping positions within the
    /// stated dimensions.
    pub fn from_particles(particles: Vec<Particle>, width: f32, height: f32) -> Self {
        Self {
            particles,
            width,
            height,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// The surface dimensions this field was generated for.
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn count_is_floor_of_width_over_density() {
        let config = FieldConfig::default();
        assert_eq!(config.particle_count(0.0), 0);
        assert_eq!(config.particle_count(29.9), 0);
        assert_eq!(config.particle_count(30.0), 1);
        assert_eq!(config.particle_count(899.0), 29);
        assert_eq!(config.particle_count(900.0), 30);
        assert_eq!(config.particle_count(-100.0), 0);
    }

    #[test]
    fn generated_particles_stay_in_bounds() {
        let config = FieldConfig::default();
        let mut rng = SmallRng::seed_from_u64(7);
        let field = Field::generate(&config, 900.0, 600.0, &mut rng);

        assert_eq!(field.len(), 30);
        for p in field.particles() {
            assert!(p.position.x >= 0.0 && p.position.x < 900.0);
            assert!(p.position.y >= 0.0 && p.position.y < 600.0);
        }
    }

    #[test]
    fn radii_and_colors_come_from_the_config() {
        let config = FieldConfig::default();
        let mut rng = SmallRng::seed_from_u64(99);
        let field = Field::generate(&config, 3000.0, 400.0, &mut rng);

        for p in field.particles() {
            assert!(p.radius >= config.radius_min && p.radius <= config.radius_max);
            assert!(config.palette.contains(&p.color));
        }
    }

    #[test]
    fn zero_width_yields_an_empty_field() {
        let config = FieldConfig::default();
        let mut rng = SmallRng::seed_from_u64(1);
        let field = Field::generate(&config, 0.0, 600.0, &mut rng);
        assert!(field.is_empty());
        assert_eq!(field.size(), (0.0, 600.0));
    }

    #[test]
    fn zero_height_is_degenerate_but_valid() {
        let config = FieldConfig::default();
        let mut rng = SmallRng::seed_from_u64(2);
        let field = Field::generate(&config, 120.0, 0.0, &mut rng);
        assert_eq!(field.len(), 4);
        for p in field.particles() {
            assert_eq!(p.position.y, 0.0);
        }
    }

    #[test]
    fn seeded_generation_is_deterministic() {
        let config = FieldConfig::default();
        let a = Field::generate(&config, 640.0, 480.0, &mut SmallRng::seed_from_u64(42));
        let b = Field::generate(&config, 640.0, 480.0, &mut SmallRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
