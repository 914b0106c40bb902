use nannou::rand::RngCore;

use crate::catalog::Motif;
use crate::render::shapes::{CURVE_SEGMENTS, cubic_points, join_path};
use crate::render::{FrameParams, MotifDrawer, Primitive};

/// Filled heart made of two mirrored cubic lobes meeting at the top notch
/// and the bottom tip
pub struct Heart;

impl MotifDrawer for Heart {
    fn motif(&self) -> Motif {
        Motif::Heart
    }

    fn draw(
        &self,
        params: &FrameParams,
        _rng: &mut dyn RngCore,
    ) -> Vec<Primitive> {
        let size = params.radius();
        let lift = -size * 0.3;
        let p = |x: f32, y: f32| params.canvas_point(x * size, lift + y * size);

        let notch = p(0.0, 0.3);
        let tip = p(0.0, 0.8);

        let mut outline =
            cubic_points(notch, p(-0.6, -0.2), p(-0.6, 0.4), tip, CURVE_SEGMENTS);
        join_path(
            &mut outline,
            cubic_points(tip, p(0.6, 0.4), p(0.6, -0.2), notch, CURVE_SEGMENTS),
        );
        // Closing point duplicates the start
        outline.pop();

        vec![Primitive::fill(outline, params.stroke_color())]
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
    fn test_heart_is_mirrored() {
        let mut rng = StdRng::seed_from_u64(1);
        let scene = Heart.draw(&params(1.0, 0.0), &mut rng);
        let points = scene[0].points();

        assert_eq!(points.len(), CURVE_SEGMENTS * 2);

        let min_x = points.iter().map(|p| p.x).fold(f32::MAX, f32::min);
        let max_x = points.iter().map(|p| p.x).fold(f32::MIN, f32::max);
        assert_approx_eq!(min_x, -max_x, 0.01);
    }

    #[test]
    fn test_heart_tip_points_down() {
        let mut rng = StdRng::seed_from_u64(1);
        let scene = Heart.draw(&params(1.0, 0.0), &mut rng);
        let points = scene[0].points();

        // notch at y = -(0.3 - 0.3) * 100, tip at -(0.8 - 0.3) * 100
        assert_approx_eq!(points[0].y, 0.0);
        assert_approx_eq!(points[CURVE_SEGMENTS].y, -50.0);
        assert!(matches!(scene[0], Primitive::Fill { .. }));
    }
}
