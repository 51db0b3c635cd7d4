//! Geometry helpers for ring and interaction checks.
//!
//! Points are plain `[f64; 3]` coordinates. Angles are in radians.

use std::f64::consts::FRAC_PI_2;

pub type Point3 = [f64; 3];

fn sub(a: Point3, b: Point3) -> Point3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

pub fn dot(a: Point3, b: Point3) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

pub fn cross(a: Point3, b: Point3) -> Point3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

pub fn norm(a: Point3) -> f64 {
    dot(a, a).sqrt()
}

/// Arithmetic mean of the points, `None` for an empty slice.
pub fn centroid(points: &[Point3]) -> Option<Point3> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let sum = points.iter().fold([0.0; 3], |acc, p| {
        [acc[0] + p[0], acc[1] + p[1], acc[2] + p[2]]
    });
    Some([sum[0] / n, sum[1] / n, sum[2] / n])
}

/// Vector normal to a ring plane.
///
/// Cross product of centroid→first point and centroid→second point. Not
/// normalized; swapping the two points flips its direction.
pub fn ring_normal(centroid: Point3, points: &[Point3]) -> Option<Point3> {
    match points {
        [a, b, ..] => Some(cross(sub(*a, centroid), sub(*b, centroid))),
        _ => None,
    }
}

/// Angle between two vectors in `[0, π]`; `None` if either is zero.
pub fn angle_between(a: Point3, b: Point3) -> Option<f64> {
    let denom = norm(a) * norm(b);
    if denom < 1e-12 {
        return None;
    }
    Some((dot(a, b) / denom).clamp(-1.0, 1.0).acos())
}

/// Inclusive range check on an angle.
///
/// A ring normal can point either way, so for rings an angle above π/2 is
/// also tested as the mirrored angle `π/2 - (angle mod π/2)`.
pub fn angle_between_limits(angle: f64, min_angle: f64, max_angle: f64, ring: bool) -> bool {
    let within = |a: f64| min_angle <= a && a <= max_angle;
    if ring && angle > FRAC_PI_2 {
        let mirror = FRAC_PI_2 - (angle % FRAC_PI_2);
        within(angle) || within(mirror)
    } else {
        within(angle)
    }
}
