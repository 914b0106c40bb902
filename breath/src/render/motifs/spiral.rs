use nannou::rand::RngCore;

use crate::catalog::Motif;
use crate::core::util::TWO_PI;
use crate::render::{FrameParams, MotifDrawer, Primitive};

const N_POINTS: usize = 200;
const SWEEP: f32 = TWO_PI * 2.0;
const STROKE_WEIGHT: f32 = 3.0;
const SECONDS_PER_RADIAN: f32 = 3.0;

/// Archimedean spiral over two turns, slowly rotating
pub struct Spiral;

impl MotifDrawer for Spiral {
    fn motif(&self) -> Motif {
        Motif::Spiral
    }

    fn draw(
        &self,
        params: &FrameParams,
        _rng: &mut dyn RngCore,
    ) -> Vec<Primitive> {
        let radius = params.radius();
        let rotation = params.time / SECONDS_PER_RADIAN;

        let points = (0..N_POINTS)
            .map(|i| {
                let t = (i as f32 / N_POINTS as f32) * SWEEP;
                let r = radius * t / SWEEP;
                let angle = t + rotation;
                params.canvas_point(r * angle.cos(), r * angle.sin())
            })
            .collect();

        vec![Primitive::stroke(
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
    fn test_spiral_radius_grows_to_scaled_max() {
        let mut rng = StdRng::seed_from_u64(1);
        let scene = Spiral.draw(&params(0.5, 0.0), &mut rng);
        let points = scene[0].points();

        assert_eq!(points.len(), N_POINTS);
        assert_approx_eq!(points[0].length(), 0.0);

        let last = points[N_POINTS - 1].length();
        assert_approx_eq!(last, 50.0 * 199.0 / 200.0, 0.01);

        let mid = points[N_POINTS / 2].length();
        assert_approx_eq!(mid, 25.0, 0.01);
    }

    #[test]
    fn test_spiral_rotates_with_time() {
        let mut rng = StdRng::seed_from_u64(1);
        let a = Spiral.draw(&params(1.0, 0.0), &mut rng);
        let b = Spiral.draw(&params(1.0, 4.5), &mut rng);
        let (pa, pb) = (a[0].points()[100], b[0].points()[100]);

        assert_approx_eq!(pa.length(), pb.length(), 0.01);
        assert!(pa.distance(pb) > 1.0);
    }
}
