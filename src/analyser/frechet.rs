//! Discrete Fréchet distance between 2D point sequences.

use nalgebra::Vector2;

/// Classic dynamic-programming discrete Fréchet distance.
///
/// Runs in O(n·m) time with a rolling O(m) row. Degenerate inputs (either
/// sequence empty) return `f32::MAX` so downstream normalization has a
/// defined worst case instead of an error path.
pub fn frechet_distance(path_a: &[Vector2<f32>], path_b: &[Vector2<f32>]) -> f32 {
    if path_a.is_empty() || path_b.is_empty() {
        return f32::MAX;
    }

    let m = path_b.len();
    let mut prev = vec![0.0f32; m];
    let mut cur = vec![0.0f32; m];

    for (i, a) in path_a.iter().enumerate() {
        for (j, b) in path_b.iter().enumerate() {
            let cost = (a - b).norm();
            cur[j] = if i == 0 && j == 0 {
                cost
            } else if i == 0 {
                cur[j - 1].max(cost)
            } else if j == 0 {
                prev[j].max(cost)
            } else {
                prev[j].min(prev[j - 1]).min(cur[j - 1]).max(cost)
            };
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    prev[m - 1]
}
