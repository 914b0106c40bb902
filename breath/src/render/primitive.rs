use nannou::color::Srgba;
use nannou::glam::Vec2;

/// Soft halo painted underneath a stroke
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub radius: f32,
    pub color: Srgba,
}

/// Backend-agnostic drawing instruction in window coordinates (origin at
/// the center, y up)
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Stroke {
        points: Vec<Vec2>,
        weight: f32,
        closed: bool,
        color: Srgba,
        glow: Option<Glow>,
    },
    Fill {
        points: Vec<Vec2>,
        color: Srgba,
    },
    Disc {
        center: Vec2,
        radius: f32,
        color: Srgba,
    },
    /// Disc fading from `color` at the center to transparent at `radius`
    RadialGlow {
        center: Vec2,
        radius: f32,
        color: Srgba,
    },
}

impl Primitive {
    pub fn stroke(points: Vec<Vec2>, weight: f32, color: Srgba) -> Self {
        Self::Stroke {
            points,
            weight,
            closed: false,
            color,
            glow: None,
        }
    }

    pub fn closed_stroke(points: Vec<Vec2>, weight: f32, color: Srgba) -> Self {
        Self::Stroke {
            points,
            weight,
            closed: true,
            color,
            glow: None,
        }
    }

    pub fn fill(points: Vec<Vec2>, color: Srgba) -> Self {
        Self::Fill { points, color }
    }

    pub fn disc(center: Vec2, radius: f32, color: Srgba) -> Self {
        Self::Disc {
            center,
            radius,
            color,
        }
    }

    pub fn with_glow(self, glow: Glow) -> Self {
        match self {
            Self::Stroke {
                points,
                weight,
                closed,
                color,
                ..
            } => Self::Stroke {
                points,
                weight,
                closed,
                color,
                glow: Some(glow),
            },
            other => other,
        }
    }

    pub fn color(&self) -> Srgba {
        match self {
            Self::Stroke { color, .. }
            | Self::Fill { color, .. }
            | Self::Disc { color, .. }
            | Self::RadialGlow { color, .. } => *color,
        }
    }

    /// Vertices for path primitives, empty for round ones
    pub fn points(&self) -> &[Vec2] {
        match self {
            Self::Stroke { points, .. } | Self::Fill { points, .. } => points,
            Self::Disc { .. } | Self::RadialGlow { .. } => &[],
        }
    }

    /// Copy with every alpha multiplied by `factor`
    pub fn faded(&self, factor: f32) -> Self {
        let fade = |c: Srgba| {
            let mut c = c;
            c.alpha *= factor;
            c
        };

        match self {
            Self::Stroke {
                points,
                weight,
                closed,
                color,
                glow,
            } => Self::Stroke {
                points: points.clone(),
                weight: *weight,
                closed: *closed,
                color: fade(*color),
                glow: glow.map(|g| Glow {
                    radius: g.radius,
                    color: fade(g.color),
                }),
            },
            Self::Fill { points, color } => Self::Fill {
                points: points.clone(),
                color: fade(*color),
            },
            Self::Disc {
                center,
                radius,
                color,
            } => Self::Disc {
                center: *center,
                radius: *radius,
                color: fade(*color),
            },
            Self::RadialGlow {
                center,
                radius,
                color,
            } => Self::RadialGlow {
                center: *center,
                radius: *radius,
                color: fade(*color),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;
    use nannou::glam::vec2;

    fn red(alpha: f32) -> Srgba {
        Srgba::new(1.0, 0.0, 0.0, alpha)
    }

    #[test]
    fn faded_scales_alpha_including_glow() {
        let p = Primitive::stroke(vec![vec2(0.0, 0.0)], 3.0, red(0.8))
            .with_glow(Glow {
                radius: 20.0,
                color: red(1.0),
            });

        match p.faded(0.5) {
            Primitive::Stroke { color, glow, .. } => {
                assert_approx_eq!(color.alpha, 0.4);
                assert_approx_eq!(glow.unwrap().color.alpha, 0.5);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn with_glow_ignores_non_strokes() {
        let d = Primitive::disc(vec2(0.0, 0.0), 4.0, red(1.0));
        let glowing = d.clone().with_glow(Glow {
            radius: 1.0,
            color: red(1.0),
        });
        assert_eq!(d, glowing);
    }
}
