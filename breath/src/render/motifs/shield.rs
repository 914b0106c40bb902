use nannou::rand::RngCore;

use crate::catalog::Motif;
use crate::render::{FrameParams, MotifDrawer, Primitive};

const STROKE_WEIGHT: f32 = 4.0;

const OUTLINE: [(f32, f32); 6] = [
    (0.0, -1.0),
    (0.7, -0.3),
    (0.7, 0.3),
    (0.0, 1.0),
    (-0.7, 0.3),
    (-0.7, -0.3),
];

pub struct Shield;

impl MotifDrawer for Shield {
    fn motif(&self) -> Motif {
        Motif::Shield
    }

    fn draw(
        &self,
        params: &FrameParams,
        _rng: &mut dyn RngCore,
    ) -> Vec<Primitive> {
        let size = params.radius();
        let points = OUTLINE
            .iter()
            .map(|&(x, y)| params.canvas_point(x * size, y * size))
            .collect();

        vec![Primitive::closed_stroke(
            points,
            STROKE_WEIGHT,
            params.stroke_color(),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;
    use crate::render::params::fixtures::params;
    use nannou::rand::SeedableRng;
    use nannou::rand::rngs::StdRng;

    #[test]
    fn test_shield_outline() {
        let mut rng = StdRng::seed_from_u64(1);
        let scene = Shield.draw(&params(0.5, 0.0), &mut rng);
        let points = scene[0].points();

        assert_eq!(points.len(), 6);
        assert_approx_eq!(points[0].y, 50.0);
        assert_approx_eq!(points[3].y, -50.0);
        assert_approx_eq!(points[1].x, 35.0);
        assert_approx_eq!(points[2].x, points[1].x);
        assert!(matches!(scene[0], Primitive::Stroke { closed: true, .. }));
    }
}
