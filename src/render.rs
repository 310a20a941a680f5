//! Single-shot field rendering.
//!
//! One paint is three passes in a fixed order: a translucent background wash,
//! a filled disc per particle, then the proximity pass that strokes a faint
//! edge between every pair of particles closer than the threshold. Edge
//! opacity decays linearly with distance, so the closest pairs read as the
//! strongest constellation lines.
//!
//! The proximity pass is the one genuinely quadratic piece of the crate.
//! At the configured density (viewport width / 30) a field holds tens to low
//! hundreds of particles, which is fine for a paint that happens once per
//! resize. An animated extension would want a spatial index instead; see the
//! criterion benchmark for where the time goes.

use glam::Vec2;

use crate::canvas::Canvas;
use crate::field::Field;
use crate::visuals::{EdgeStyle, Rgba, BACKGROUND};

/// Paints a [`Field`] onto a [`Canvas`].
///
/// Stateless between paints: rendering the same field onto the same surface
/// twice produces identical output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Renderer {
    /// Wash color painted across the whole surface first.
    pub background: Rgba,
    /// Styling for the proximity edges.
    pub edges: EdgeStyle,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            background: BACKGROUND,
            edges: EdgeStyle::default(),
        }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paint `field` onto `canvas`.
    ///
    /// A non-positive canvas size is a complete no-op, never an error; an
    /// empty field gets the background wash and nothing else.
    pub fn paint(&self, canvas: &mut dyn Canvas, field: &Field) {
        let (w, h) = (canvas.width(), canvas.height());
        if w <= 0.0 || h <= 0.0 {
            return;
        }

        canvas.fill_rect(Vec2::ZERO, Vec2::new(w, h), self.background);

        for particle in field.particles() {
            canvas.fill_circle(particle.position, particle.radius, particle.color);
        }

        self.proximity_pass(canvas, field);
    }

    /// Stroke an edge for every unordered pair closer than the threshold.
    fn proximity_pass(&self, canvas: &mut dyn Canvas, field: &Field) {
        let particles = field.particles();
        for i in 0..particles.len() {
            for j in (i + 1)..particles.len() {
                let a = particles[i].position;
                let b = particles[j].position;
                let d = a.distance(b);
                if self.edges.connects(d) {
                    canvas.stroke_line(
                        a,
                        b,
                        self.edges.width,
                        self.edges.color.with_alpha(self.edges.opacity(d)),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawOp, Recorder};
    use crate::field::Particle;
    use crate::visuals::PALETTE;

    fn particle_at(x: f32, y: f32) -> Particle {
        Particle {
            position: Vec2::new(x, y),
            radius: 1.0,
            color: PALETTE[0],
        }
    }

    #[test]
    fn passes_run_in_order_wash_discs_edges() {
        let field = Field::from_particles(
            vec![particle_at(10.0, 10.0), particle_at(20.0, 10.0)],
            100.0,
            100.0,
        );
        let mut rec = Recorder::new(100.0, 100.0);
        Renderer::new().paint(&mut rec, &field);

        assert!(matches!(rec.ops()[0], DrawOp::Rect { .. }));
        assert!(matches!(rec.ops()[1], DrawOp::Circle { .. }));
        assert!(matches!(rec.ops()[2], DrawOp::Circle { .. }));
        assert!(matches!(rec.ops()[3], DrawOp::Line { .. }));
        assert_eq!(rec.ops().len(), 4);
    }

    #[test]
    fn zero_sized_canvas_is_a_no_op() {
        let field = Field::from_particles(vec![particle_at(1.0, 1.0)], 100.0, 100.0);
        let mut rec = Recorder::new(0.0, 0.0);
        Renderer::new().paint(&mut rec, &field);
        assert!(rec.ops().is_empty());
    }

    #[test]
    fn empty_field_gets_the_wash_only() {
        let mut rec = Recorder::new(300.0, 200.0);
        Renderer::new().paint(&mut rec, &Field::empty());
        assert_eq!(rec.rect_count(), 1);
        assert_eq!(rec.circle_count(), 0);
        assert_eq!(rec.line_count(), 0);
    }

    #[test]
    fn edge_drawn_iff_distance_below_threshold() {
        let renderer = Renderer::new();

        // 69 px apart: connected.
        let near = Field::from_particles(
            vec![particle_at(0.0, 0.0), particle_at(69.0, 0.0)],
            100.0,
            100.0,
        );
        let mut rec = Recorder::new(100.0, 100.0);
        renderer.paint(&mut rec, &near);
        assert_eq!(rec.line_count(), 1);

        // Exactly at the threshold: not connected.
        let at = Field::from_particles(
            vec![particle_at(0.0, 0.0), particle_at(70.0, 0.0)],
            100.0,
            100.0,
        );
        rec.clear();
        renderer.paint(&mut rec, &at);
        assert_eq!(rec.line_count(), 0);
    }

    #[test]
    fn edge_opacity_matches_the_linear_decay() {
        let renderer = Renderer::new();
        let field = Field::from_particles(
            vec![particle_at(0.0, 0.0), particle_at(35.0, 0.0)],
            100.0,
            100.0,
        );
        let mut rec = Recorder::new(100.0, 100.0);
        renderer.paint(&mut rec, &field);

        let alpha = rec
            .ops()
            .iter()
            .find_map(|op| match op {
                DrawOp::Line { color, .. } => Some(color.a),
                _ => None,
            })
            .expect("one edge expected");
        assert!((alpha - 0.01 * (1.0 - 35.0 / 70.0)).abs() < 1e-6);
    }

    #[test]
    fn edges_are_symmetric_in_particle_order() {
        let renderer = Renderer::new();
        let a = particle_at(12.0, 30.0);
        let b = particle_at(40.0, 55.0);

        let mut fwd = Recorder::new(100.0, 100.0);
        renderer.paint(&mut fwd, &Field::from_particles(vec![a, b], 100.0, 100.0));
        let mut rev = Recorder::new(100.0, 100.0);
        renderer.paint(&mut rev, &Field::from_particles(vec![b, a], 100.0, 100.0));

        let line = |rec: &Recorder| {
            rec.ops()
                .iter()
                .find_map(|op| match op {
                    DrawOp::Line {
                        from, to, color, ..
                    } => Some((from.min(*to), from.max(*to), color.a)),
                    _ => None,
                })
                .expect("one edge expected")
        };
        assert_eq!(line(&fwd), line(&rev));
    }

    #[test]
    fn repainting_an_unchanged_field_is_identical() {
        let field = Field::from_particles(
            vec![
                particle_at(5.0, 5.0),
                particle_at(50.0, 20.0),
                particle_at(52.0, 24.0),
            ],
            100.0,
            100.0,
        );
        let renderer = Renderer::new();
        let mut first = Recorder::new(100.0, 100.0);
        let mut second = Recorder::new(100.0, 100.0);
        renderer.paint(&mut first, &field);
        renderer.paint(&mut second, &field);
        assert_eq!(first.ops(), second.ops());
    }
}
