//! Closed-form Bezier evaluation and path sampling.
//!
//! The solver materializes curved marker paths as sampled quadratic Beziers;
//! the spread-layout helper uses the cubic form. Pure functions, no state.

use nalgebra::Vector3;

/// Evaluates a quadratic Bezier at `t` (clamped to [0, 1]).
#[inline]
pub fn quadratic_point(
    p0: Vector3<f32>,
    p1: Vector3<f32>,
    p2: Vector3<f32>,
    t: f32,
) -> Vector3<f32> {
    let t = t.clamp(0.0, 1.0);
    let u = 1.0 - t;
    p0 * (u * u) + p1 * (2.0 * u * t) + p2 * (t * t)
}

/// Evaluates a cubic Bezier at `t` (clamped to [0, 1]).
#[inline]
pub fn cubic_point(
    p0: Vector3<f32>,
    p1: Vector3<f32>,
    p2: Vector3<f32>,
    p3: Vector3<f32>,
    t: f32,
) -> Vector3<f32> {
    let t = t.clamp(0.0, 1.0);
    let u = 1.0 - t;
    let uu = u * u;
    let tt = t * t;
    p0 * (uu * u) + p1 * (3.0 * uu * t) + p2 * (3.0 * u * tt) + p3 * (tt * t)
}

/// Samples a quadratic Bezier into `segments + 1` points, endpoints included.
///
/// `segments` below 1 is treated as 1, so the result always contains at least
/// the start and end points.
pub fn sample_quadratic(
    p0: Vector3<f32>,
    p1: Vector3<f32>,
    p2: Vector3<f32>,
    segments: usize,
) -> Vec<Vector3<f32>> {
    let segments = segments.max(1);
    let mut points = Vec::with_capacity(segments + 1);
    for i in 0..=segments {
        let t = i as f32 / segments as f32;
        points.push(quadratic_point(p0, p1, p2, t));
    }
    points
}

/// Samples a cubic Bezier into `segments + 1` points, endpoints included.
pub fn sample_cubic(
    p0: Vector3<f32>,
    p1: Vector3<f32>,
    p2: Vector3<f32>,
    p3: Vector3<f32>,
    segments: usize,
) -> Vec<Vector3<f32>> {
    let segments = segments.max(1);
    let mut points = Vec::with_capacity(segments + 1);
    for i in 0..=segments {
        let t = i as f32 / segments as f32;
        points.push(cubic_point(p0, p1, p2, p3, t));
    }
    points
}
