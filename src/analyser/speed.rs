//! Speed extraction and velocity-similarity scoring.

use nalgebra::Vector2;

/// Timestamp gaps below this contribute zero speed instead of blowing up.
/// Duplicate-timestamp samples from coalesced input events hit this path.
const MIN_DT: f32 = 1e-4;

/// Speeds below this are treated as stationary by the similarity metrics.
const STATIONARY_SPEED: f32 = 1.0;

/// Per-step speeds along a path: `distance / dt` for each consecutive pair,
/// zero when the gap is degenerate. Empty for paths with fewer than 2 points.
pub fn speed_profile(points: &[Vector2<f32>], timestamps: &[f32]) -> Vec<f32> {
    if points.len() < 2 || timestamps.len() < points.len() {
        return Vec::new();
    }
    let mut speeds = Vec::with_capacity(points.len() - 1);
    for i in 1..points.len() {
        let dist = (points[i] - points[i - 1]).norm();
        let dt = timestamps[i] - timestamps[i - 1];
        speeds.push(if dt > MIN_DT { dist / dt } else { 0.0 });
    }
    speeds
}

/// Mean per-step speed, or 0 for degenerate paths.
pub fn average_speed(points: &[Vector2<f32>], timestamps: &[f32]) -> f32 {
    let speeds = speed_profile(points, timestamps);
    if speeds.is_empty() {
        0.0
    } else {
        speeds.iter().sum::<f32>() / speeds.len() as f32
    }
}

/// Linearly resamples `data` to `new_len` samples. Inputs shorter than 2
/// yield an all-zero profile of the requested length.
pub fn resample(data: &[f32], new_len: usize) -> Vec<f32> {
    if new_len == 0 {
        return Vec::new();
    }
    if data.len() < 2 {
        return vec![0.0; new_len];
    }
    let mut out = Vec::with_capacity(new_len);
    let last = (data.len() - 1) as f32;
    for i in 0..new_len {
        let t = if new_len > 1 {
            i as f32 / (new_len - 1) as f32
        } else {
            0.0
        };
        let pos = t * last;
        let i0 = pos.floor() as usize;
        let i1 = (i0 + 1).min(data.len() - 1);
        let frac = pos - i0 as f32;
        out.push(data[i0] + (data[i1] - data[i0]) * frac);
    }
    out
}

/// Similarity of two average speeds in [0, 1].
///
/// A corrected target speed below the stationary cutoff models a marker that
/// barely moved on screen: the score is 1 when the user also held still and
/// 0 otherwise, sidestepping the division. Otherwise the absolute speed gap
/// is normalized by the target speed and squashed through `exp(-k·diff)`.
pub fn velocity_similarity(user_speed: f32, corrected_target_speed: f32, sensitivity: f32) -> f32 {
    if corrected_target_speed < STATIONARY_SPEED {
        return if user_speed < STATIONARY_SPEED { 1.0 } else { 0.0 };
    }
    let normalized_diff = (user_speed - corrected_target_speed).abs() / corrected_target_speed;
    (-sensitivity * normalized_diff).exp()
}

/// Profile-shaped velocity similarity: resamples both speed profiles to a
/// common length and scores the mean absolute difference normalized by the
/// target's average speed. Finer-grained than [`velocity_similarity`]; kept
/// for callers that care about tempo changes within the gesture, not just
/// the overall pace.
pub fn velocity_profile_similarity(
    user: (&[Vector2<f32>], &[f32]),
    target: (&[Vector2<f32>], &[f32]),
    samples: usize,
) -> f32 {
    let user_speeds = speed_profile(user.0, user.1);
    let target_speeds = speed_profile(target.0, target.1);
    if user_speeds.is_empty() || target_speeds.is_empty() || samples == 0 {
        return 0.0;
    }

    let target_avg =
        (target_speeds.iter().sum::<f32>() / target_speeds.len() as f32).max(STATIONARY_SPEED);

    let user_rs = resample(&user_speeds, samples);
    let target_rs = resample(&target_speeds, samples);
    let avg_diff = user_rs
        .iter()
        .zip(&target_rs)
        .map(|(u, t)| (u - t).abs())
        .sum::<f32>()
        / samples as f32;

    (-avg_diff / target_avg).exp()
}
