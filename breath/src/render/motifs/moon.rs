use nannou::rand::RngCore;

use crate::catalog::Motif;
use crate::core::util::night;
use crate::render::{FrameParams, MotifDrawer, Primitive};

const SHADOW_OFFSET: f32 = 0.3;
const SHADOW_SIZE: f32 = 0.85;

/// A full disc with a darker disc laid over one side to carve a crescent
pub struct Moon;

impl MotifDrawer for Moon {
    fn motif(&self) -> Motif {
        Motif::Moon
    }

    fn draw(
        &self,
        params: &FrameParams,
        _rng: &mut dyn RngCore,
    ) -> Vec<Primitive> {
        let radius = params.radius();

        vec![
            Primitive::disc(
                params.canvas_point(0.0, 0.0),
                radius,
                params.stroke_color(),
            ),
            Primitive::disc(
                params.canvas_point(radius * SHADOW_OFFSET, 0.0),
                radius * SHADOW_SIZE,
                night(params.opacity * 0.5),
            ),
        ]
    }
}
