use std::collections::VecDeque;

use super::primitive::Primitive;
use super::surface::Surface;

pub const DEFAULT_VEIL: f32 = 0.2;
const MAX_FRAMES: usize = 64;
// Frames whose remaining weight falls below this are dropped
const CUTOFF: f32 = 0.02;

/// Motion trails without relying on the previous frame's pixels: the last
/// few scenes are replayed oldest first, each faded as if it had been
/// covered by a dark veil of opacity `veil` once per frame since.
#[derive(Debug)]
pub struct TrailBuffer {
    frames: VecDeque<Vec<Primitive>>,
    veil: f32,
    capacity: usize,
}

impl TrailBuffer {
    pub fn new(veil: f32) -> Self {
        let veil = veil.clamp(0.01, 1.0);
        let capacity = if veil >= 1.0 {
            1
        } else {
            let frames = (CUTOFF.ln() / (1.0 - veil).ln()).ceil();
            (frames as usize).clamp(1, MAX_FRAMES)
        };

        Self {
            frames: VecDeque::with_capacity(capacity),
            veil,
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }

    pub fn push(&mut self, scene: Vec<Primitive>) {
        self.frames.push_back(scene);
        while self.frames.len() > self.capacity {
            self.frames.pop_front();
        }
    }

    /// Weight of a scene painted `age` frames ago
    pub fn weight(&self, age: usize) -> f32 {
        (1.0 - self.veil).powi(age as i32)
    }

    pub fn paint(&self, surface: &mut impl Surface) {
        let newest = self.frames.len().saturating_sub(1);
        for (i, scene) in self.frames.iter().enumerate() {
            let age = newest - i;
            if age == 0 {
                surface.paint_all(scene);
                continue;
            }
            let weight = self.weight(age);
            for primitive in scene {
                surface.paint(&primitive.faded(weight));
            }
        }
    }
}

impl Default for TrailBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_VEIL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;
    use nannou::color::Srgba;
    use nannou::glam::vec2;

    fn scene(alpha: f32) -> Vec<Primitive> {
        vec![Primitive::disc(
            vec2(0.0, 0.0),
            1.0,
            Srgba::new(1.0, 1.0, 1.0, alpha),
        )]
    }

    #[test]
    fn test_default_capacity() {
        // 0.8^18 ≈ 0.018
        assert_eq!(TrailBuffer::default().capacity(), 18);
    }

    #[test]
    fn test_full_veil_keeps_one_frame() {
        let mut trail = TrailBuffer::new(1.0);
        trail.push(scene(1.0));
        trail.push(scene(1.0));
        assert_eq!(trail.len(), 1);
    }

    #[test]
    fn test_paint_fades_older_scenes() {
        let mut trail = TrailBuffer::new(0.5);
        trail.push(scene(1.0));
        trail.push(scene(1.0));
        trail.push(scene(1.0));

        let mut recorded: Vec<Primitive> = vec![];
        trail.paint(&mut recorded);

        let alphas: Vec<f32> = recorded.iter().map(|p| p.color().alpha).collect();
        assert_eq!(alphas.len(), 3);
        assert_approx_eq!(alphas[0], 0.25);
        assert_approx_eq!(alphas[1], 0.5);
        assert_approx_eq!(alphas[2], 1.0);
    }

    #[test]
    fn test_capacity_is_enforced() {
        let mut trail = TrailBuffer::new(0.5);
        for _ in 0..50 {
            trail.push(scene(1.0));
        }
        assert_eq!(trail.len(), trail.capacity());
        trail.clear();
        assert!(trail.is_empty());
    }
}
