use nannou::rand::RngCore;

use crate::catalog::Motif;
use crate::render::{FrameParams, MotifDrawer, Primitive};

const STEP: f32 = 2.0;
const WAVELENGTH: f32 = 50.0;
const SCROLL_SPEED: f32 = 2.0;
const STROKE_WEIGHT: f32 = 3.0;

/// Sine wave across the motif's width. Amplitude breathes, phase scrolls.
pub struct Wave;

impl MotifDrawer for Wave {
    fn motif(&self) -> Motif {
        Motif::Wave
    }

    fn draw(
        &self,
        params: &FrameParams,
        _rng: &mut dyn RngCore,
    ) -> Vec<Primitive> {
        let amplitude = params.radius();
        let offset = params.time * SCROLL_SPEED;
        let half_width = params.max_radius;
        let n_points = (half_width * 2.0 / STEP).ceil().max(0.0) as usize;

        let points = (0..n_points)
            .map(|i| {
                let x = -half_width + i as f32 * STEP;
                let y = ((x + offset) / WAVELENGTH).sin() * amplitude;
                params.canvas_point(x, y)
            })
            .collect();

        vec![Primitive::stroke(
            points,
            STROKE_WEIGHT,
            params.stroke_color(),
        )]
    }
}
