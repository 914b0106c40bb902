use nannou::rand::{Rng, RngCore};

use crate::catalog::Motif;
use crate::core::util::TWO_PI;
use crate::render::shapes::{CURVE_SEGMENTS, join_path, quadratic_points};
use crate::render::{FrameParams, MotifDrawer, Primitive};

const N_FLAMES: usize = 5;
const RING: f32 = 0.3;
const BULGE: f32 = 10.0;
const ORBIT_SPEED: f32 = 5.0;
const MIN_HEIGHT: f32 = 0.8;
const MAX_HEIGHT: f32 = 1.2;

/// Ring of flickering teardrop flames. Heights are re-rolled every frame.
pub struct Fire;

impl MotifDrawer for Fire {
    fn motif(&self) -> Motif {
        Motif::Fire
    }

    fn draw(
        &self,
        params: &FrameParams,
        rng: &mut dyn RngCore,
    ) -> Vec<Primitive> {
        let radius = params.radius();
        let color = params.stroke_color();

        (0..N_FLAMES)
            .map(|i| {
                let angle = (i as f32 / N_FLAMES as f32) * TWO_PI
                    + params.time * ORBIT_SPEED;
                let height = radius * rng.gen_range(MIN_HEIGHT..MAX_HEIGHT);
                let x = angle.cos() * radius * RING;

                let base = params.canvas_point(x, 0.0);
                let crown = params.canvas_point(x, -height);

                let mut outline = quadratic_points(
                    base,
                    params.canvas_point(x + BULGE, -height * 0.5),
                    crown,
                    CURVE_SEGMENTS,
                );
                join_path(
                    &mut outline,
                    quadratic_points(
                        crown,
                        params.canvas_point(x - BULGE, -height * 0.5),
                        base,
                        CURVE_SEGMENTS,
                    ),
                );
                outline.pop();

                Primitive::fill(outline, color)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nannou::rand::SeedableRng;
    use nannou::rand::rngs::StdRng;

    use crate::render::params::fixtures::params;

    fn crown_height(primitive: &Primitive) -> f32 {
        primitive.points()[CURVE_SEGMENTS].y
    }

    #[test]
    fn test_five_flames_within_height_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let scene = Fire.draw(&params(0.5, 0.0), &mut rng);
        assert_eq!(scene.len(), N_FLAMES);

        for flame in &scene {
            let h = crown_height(flame);
            assert!((40.0..=60.0).contains(&h), "height {}", h);
            assert!(flame.points().iter().all(|p| p.y >= -0.001));
        }
    }

    #[test]
    fn test_flames_flicker_between_frames() {
        let mut rng = StdRng::seed_from_u64(7);
        let a = Fire.draw(&params(1.0, 0.0), &mut rng);
        let b = Fire.draw(&params(1.0, 0.0), &mut rng);
        let heights_a: Vec<_> = a.iter().map(crown_height).collect();
        let heights_b: Vec<_> = b.iter().map(crown_height).collect();
        assert_ne!(heights_a, heights_b);
    }

    #[test]
    fn test_flames_sit_on_ring() {
        let mut rng = StdRng::seed_from_u64(7);
        let scene = Fire.draw(&params(1.0, 0.0), &mut rng);
        for flame in &scene {
            assert!(flame.points()[0].x.abs() <= 30.0 + 0.001);
        }
        // First flame starts at angle 0
        assert!((scene[0].points()[0].x - 30.0).abs() < 0.001);
    }
}
