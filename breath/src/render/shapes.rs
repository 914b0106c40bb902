use nannou::glam::Vec2;

pub const CURVE_SEGMENTS: usize = 24;

/// Point on a quadratic bézier at `t`
pub fn quadratic(p0: Vec2, c: Vec2, p1: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    p0 * (u * u) + c * (2.0 * u * t) + p1 * (t * t)
}

/// Point on a cubic bézier at `t`
pub fn cubic(p0: Vec2, c0: Vec2, c1: Vec2, p1: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    p0 * (u * u * u)
        + c0 * (3.0 * u * u * t)
        + c1 * (3.0 * u * t * t)
        + p1 * (t * t * t)
}

/// Flattens a quadratic curve into `segments + 1` points, endpoints included
pub fn quadratic_points(
    p0: Vec2,
    c: Vec2,
    p1: Vec2,
    segments: usize,
) -> Vec<Vec2> {
    let segments = segments.max(1);
    (0..=segments)
        .map(|i| quadratic(p0, c, p1, i as f32 / segments as f32))
        .collect()
}

/// Flattens a cubic curve into `segments + 1` points, endpoints included
pub fn cubic_points(
    p0: Vec2,
    c0: Vec2,
    c1: Vec2,
    p1: Vec2,
    segments: usize,
) -> Vec<Vec2> {
    let segments = segments.max(1);
    (0..=segments)
        .map(|i| cubic(p0, c0, c1, p1, i as f32 / segments as f32))
        .collect()
}

/// Appends `next` to `path`, dropping `next`'s first point when it repeats
/// the end of `path`
pub fn join_path(path: &mut Vec<Vec2>, next: Vec<Vec2>) {
    let skip = match (path.last(), next.first()) {
        (Some(a), Some(b)) => usize::from(a.distance_squared(*b) < 1e-6),
        _ => 0,
    };
    path.extend(next.into_iter().skip(skip));
}

/// Rotates `(x, y)` by `angle` radians around the origin
pub fn rotate(x: f32, y: f32, angle: f32) -> (f32, f32) {
    let (sin, cos) = angle.sin_cos();
    (x * cos - y * sin, x * sin + y * cos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_approx_eq;
    use nannou::glam::vec2;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_curve_endpoints() {
        let a = vec2(0.0, 0.0);
        let b = vec2(10.0, 0.0);
        let c = vec2(5.0, 10.0);

        assert_eq!(quadratic(a, c, b, 0.0), a);
        assert_eq!(quadratic(a, c, b, 1.0), b);
        assert_eq!(cubic(a, c, c, b, 0.0), a);
        assert_eq!(cubic(a, c, c, b, 1.0), b);
    }

    #[test]
    fn test_quadratic_midpoint() {
        let mid = quadratic(vec2(0.0, 0.0), vec2(5.0, 10.0), vec2(10.0, 0.0), 0.5);
        assert_approx_eq!(mid.x, 5.0);
        assert_approx_eq!(mid.y, 5.0);
    }

    #[test]
    fn test_points_count() {
        let a = vec2(0.0, 0.0);
        let b = vec2(1.0, 1.0);
        assert_eq!(quadratic_points(a, a, b, 8).len(), 9);
        assert_eq!(cubic_points(a, a, b, b, 0).len(), 2);
    }

    #[test]
    fn test_join_path_skips_duplicate() {
        let mut path = vec![vec2(0.0, 0.0), vec2(1.0, 0.0)];
        join_path(&mut path, vec![vec2(1.0, 0.0), vec2(2.0, 0.0)]);
        assert_eq!(path.len(), 3);
        join_path(&mut path, vec![vec2(5.0, 0.0)]);
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn test_rotate() {
        let (x, y) = rotate(1.0, 0.0, FRAC_PI_2);
        assert_approx_eq!(x, 0.0);
        assert_approx_eq!(y, 1.0);
    }
}
