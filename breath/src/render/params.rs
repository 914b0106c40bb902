use nannou::color::{Srgb, Srgba};
use nannou::geom::Rect;
use nannou::glam::{Vec2, vec2};

use super::modulation::Modulation;
use crate::core::util::with_opacity;

/// Fraction of the shorter window side used as the motif's full radius
pub const RADIUS_FACTOR: f32 = 0.3;

/// Everything a motif needs to produce one frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameParams {
    pub center: Vec2,
    pub max_radius: f32,
    pub scale: f32,
    pub opacity: f32,
    pub color: Srgb<u8>,
    /// Seconds of continuous time for rotations and scrolling that run
    /// independently of the breath phase
    pub time: f32,
}

impl FrameParams {
    pub fn new(
        bounds: Rect,
        modulation: Modulation,
        color: Srgb<u8>,
        time: f32,
    ) -> Self {
        Self {
            center: bounds.xy(),
            max_radius: bounds.w().min(bounds.h()) * RADIUS_FACTOR,
            scale: modulation.scale,
            opacity: modulation.opacity,
            color,
            time,
        }
    }

    /// `max_radius` modulated by the breath
    pub fn radius(&self) -> f32 {
        self.max_radius * self.scale
    }

    pub fn stroke_color(&self) -> Srgba {
        with_opacity(self.color, self.opacity)
    }

    /// Maps an offset from the center given in screen orientation (y grows
    /// downward) into window coordinates
    pub fn canvas_point(&self, x: f32, y: f32) -> Vec2 {
        vec2(self.center.x + x, self.center.y - y)
    }
}
