//! Angle utilities used across the layout solver.
//!
//! Screen-space target angles are handled in degrees throughout, matching the
//! grouping thresholds exposed in [`SolverParams`](crate::SolverParams).

/// Normalizes an angle in degrees into the range (-180, 180].
#[inline]
pub fn normalize_deg(angle: f32) -> f32 {
    let mut norm = angle.rem_euclid(360.0);
    if norm > 180.0 {
        norm -= 360.0;
    }
    norm
}

/// Signed shortest angular difference `to - from` in degrees, range (-180, 180].
#[inline]
pub fn delta_angle_deg(from: f32, to: f32) -> f32 {
    normalize_deg(to - from)
}

/// Unsigned shortest angular distance between two angles in degrees, range [0, 180].
#[inline]
pub fn angular_distance_deg(a: f32, b: f32) -> f32 {
    delta_angle_deg(a, b).abs()
}
