use nannou::Draw;
use nannou::color::Srgba;
use nannou::glam::Vec2;

use super::primitive::{Glow, Primitive};

const GLOW_PASSES: usize = 4;
const GLOW_PASS_ALPHA: f32 = 0.12;
const GRADIENT_RINGS: usize = 12;

/// Anything a scene can be painted onto
pub trait Surface {
    fn paint(&mut self, primitive: &Primitive);

    fn paint_all(&mut self, primitives: &[Primitive]) {
        for primitive in primitives {
            self.paint(primitive);
        }
    }
}

/// Records primitives as-is. Used to inspect what a frame would paint.
impl Surface for Vec<Primitive> {
    fn paint(&mut self, primitive: &Primitive) {
        self.push(primitive.clone());
    }
}

impl Surface for Draw {
    fn paint(&mut self, primitive: &Primitive) {
        match primitive {
            Primitive::Stroke {
                points,
                weight,
                closed,
                color,
                glow,
            } => {
                if points.len() < 2 {
                    return;
                }
                if let Some(glow) = glow {
                    paint_glow(self, points, *weight, *closed, glow);
                }
                paint_stroke(self, points, *weight, *closed, *color);
            }
            Primitive::Fill { points, color } => {
                if points.len() < 3 {
                    return;
                }
                self.polygon().color(*color).points(points.iter().copied());
            }
            Primitive::Disc {
                center,
                radius,
                color,
            } => {
                self.ellipse().xy(*center).radius(*radius).color(*color);
            }
            Primitive::RadialGlow {
                center,
                radius,
                color,
            } => {
                paint_radial_gradient(self, *center, *radius, *color);
            }
        }
    }
}

fn paint_stroke(
    draw: &Draw,
    points: &[Vec2],
    weight: f32,
    closed: bool,
    color: Srgba,
) {
    let polyline = draw.polyline().weight(weight);
    if closed {
        polyline.points_closed(points.iter().copied()).color(color);
    } else {
        polyline.points(points.iter().copied()).color(color);
    }
}

// Wide translucent passes underneath the stroke stand in for a blurred
// shadow
fn paint_glow(
    draw: &Draw,
    points: &[Vec2],
    weight: f32,
    closed: bool,
    glow: &Glow,
) {
    let mut color = glow.color;
    color.alpha *= GLOW_PASS_ALPHA;

    for pass in (1..=GLOW_PASSES).rev() {
        let spread = glow.radius * pass as f32 / GLOW_PASSES as f32;
        paint_stroke(draw, points, weight + spread, closed, color);
    }
}

// Stacked discs, largest first. Each layer's alpha is chosen so the fully
// stacked center lands on `color.alpha`.
fn paint_radial_gradient(draw: &Draw, center: Vec2, radius: f32, color: Srgba) {
    if radius <= 0.0 || color.alpha <= 0.0 {
        return;
    }

    let mut layer = color;
    layer.alpha = 1.0 - (1.0 - color.alpha).powf(1.0 / GRADIENT_RINGS as f32);

    for ring in 0..GRADIENT_RINGS {
        let r = radius * (1.0 - ring as f32 / GRADIENT_RINGS as f32);
        draw.ellipse().xy(center).radius(r).color(layer);
    }
}
