use nannou::rand::RngCore;

use crate::catalog::Motif;
use crate::core::util::with_opacity;
use crate::render::{FrameParams, Glow, MotifDrawer, Primitive};

const STROKE_WEIGHT: f32 = 3.0;
const GLOW_RADIUS: f32 = 20.0;

// (x in pixels, y as a fraction of the bolt height), top to bottom
const BOLT: [(f32, f32); 6] = [
    (0.0, 0.0),
    (-15.0, 0.3),
    (5.0, 0.3),
    (-10.0, 0.6),
    (10.0, 0.6),
    (0.0, 1.0),
];

/// Zig-zag bolt whose height follows the breath; width stays fixed
pub struct Lightning;

impl MotifDrawer for Lightning {
    fn motif(&self) -> Motif {
        Motif::Lightning
    }

    fn draw(
        &self,
        params: &FrameParams,
        _rng: &mut dyn RngCore,
    ) -> Vec<Primitive> {
        let height = params.radius() * 2.0;
        let top = -height / 2.0;

        let points = BOLT
            .iter()
            .map(|&(x, fy)| params.canvas_point(x, top + fy * height))
            .collect();

        vec![
            Primitive::stroke(points, STROKE_WEIGHT, params.stroke_color())
                .with_glow(Glow {
                    radius: GLOW_RADIUS,
                    color: with_opacity(params.color, 1.0),
                }),
        ]
    }
}
