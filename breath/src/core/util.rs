use nannou::color::{Srgb, Srgba};
use std::f32::consts::PI;
use std::sync::atomic::{AtomicU32, Ordering};

pub const TWO_PI: f32 = PI * 2.0;

/// Background of the visualization, `#0a0e27`
pub const NIGHT: (u8, u8, u8) = (10, 14, 39);

#[derive(Debug)]
pub struct AtomicF32 {
    inner: AtomicU32,
}

impl AtomicF32 {
    pub const fn new(value: f32) -> Self {
        Self {
            inner: AtomicU32::new(value.to_bits()),
        }
    }

    pub fn load(&self, order: Ordering) -> f32 {
        f32::from_bits(self.inner.load(order))
    }

    pub fn store(&self, value: f32, order: Ordering) {
        self.inner.store(value.to_bits(), order)
    }
}

/// `ternary!(cond, true_case, false_case)`
#[macro_export]
macro_rules! ternary {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition { $_true } else { $_false }
    };
}

/// Linear interpolation between two values. Returns a value between `start` and
/// `end` based on the interpolation parameter `t` (typically 0.0 to 1.0).
pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}

/// Unpacks a `0xRRGGBB` literal
pub fn rgb_from_hex(hex: u32) -> Srgb<u8> {
    Srgb::new(
        ((hex >> 16) & 0xff) as u8,
        ((hex >> 8) & 0xff) as u8,
        (hex & 0xff) as u8,
    )
}

/// `#rrggbb` form of a color, as printed on the dashboard and in logs
pub fn hex_string(color: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

/// Combines an 8-bit color with a 0..1 opacity
pub fn with_opacity(color: Srgb<u8>, opacity: f32) -> Srgba {
    Srgba::new(
        color.red as f32 / 255.0,
        color.green as f32 / 255.0,
        color.blue as f32 / 255.0,
        opacity.clamp(0.0, 1.0),
    )
}

pub fn night(alpha: f32) -> Srgba {
    with_opacity(Srgb::new(NIGHT.0, NIGHT.1, NIGHT.2), alpha)
}
