use nannou::rand::RngCore;

use crate::catalog::Motif;
use crate::render::shapes::rotate;
use crate::render::{FrameParams, MotifDrawer, Primitive};

const STROKE_WEIGHT: f32 = 4.0;
const SECONDS_PER_RADIAN: f32 = 4.0;

pub struct BoxOutline;

impl MotifDrawer for BoxOutline {
    fn motif(&self) -> Motif {
        Motif::Box
    }

    fn draw(
        &self,
        params: &FrameParams,
        _rng: &mut dyn RngCore,
    ) -> Vec<Primitive> {
        let half = params.radius();
        let rotation = params.time / SECONDS_PER_RADIAN;

        let points = [(-half, -half), (half, -half), (half, half), (-half, half)]
            .into_iter()
            .map(|(x, y)| {
                let (x, y) = rotate(x, y, rotation);
                params.canvas_point(x, y)
            })
            .collect();

        vec![Primitive::closed_stroke(
            points,
            STROKE_WEIGHT,
            params.stroke_color(),
        )]
    }
}
