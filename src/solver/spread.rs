//! Index-fanned spread layout.
//!
//! The simple precursor to the grouping solver: every target gets a cubic
//! Bezier whose two inner control points are pushed sideways in proportion to
//! the target's index distance from the middle of the list. No clustering, no
//! phases; useful for quick demos and as a deterministic baseline layout.

use super::params::SpreadParams;
use crate::bezier::sample_cubic;
use crate::camera::CameraView;
use crate::types::{TargetPath, TargetSample};
use nalgebra::Vector3;

/// Builds one fanned cubic path per target. Targets keep their input order;
/// the middle target runs straight ahead, neighbours fan out symmetrically.
pub fn spread_paths(
    start: Vector3<f32>,
    targets: &[TargetSample],
    camera: &CameraView,
    params: &SpreadParams,
) -> Vec<TargetPath> {
    let count = targets.len();
    let mut paths = Vec::with_capacity(count);

    for (index, target) in targets.iter().enumerate() {
        let direction = target.world_pos - start;

        // Side vector relative to the viewer; falls back to world-up when the
        // camera looks straight down the path.
        let mut side = direction.cross(&camera.up);
        if side.norm_squared() < 0.01 {
            side = direction.cross(&Vector3::new(0.0, 1.0, 0.0));
        }
        let side = side.try_normalize(1e-6).unwrap_or_else(Vector3::zeros);

        let fan = (index as f32 - (count as f32 - 1.0) / 2.0) * params.spread_factor;
        let offset = side * fan;

        let p1 = start + direction * 0.25 + offset;
        let p2 = target.world_pos - direction * 0.25 + offset;
        let points = sample_cubic(start, p1, p2, target.world_pos, params.path_resolution);

        paths.push(TargetPath {
            id: target.id,
            points,
            phase: 0.0,
            color: None,
            straight: false,
        });
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> CameraView {
        CameraView::look_at(
            Vector3::zeros(),
            Vector3::new(0.0, 0.0, 10.0),
            Vector3::new(0.0, 1.0, 0.0),
            60.0,
            1920.0,
            1080.0,
        )
    }

    #[test]
    fn middle_target_path_stays_on_axis() {
        let targets: Vec<TargetSample> = (0..3)
            .map(|i| TargetSample {
                id: i,
                world_pos: Vector3::new(0.0, 0.0, 8.0),
            })
            .collect();
        let paths = spread_paths(Vector3::zeros(), &targets, &camera(), &SpreadParams::default());
        assert_eq!(paths.len(), 3);
        // middle path runs straight down the z axis
        for p in &paths[1].points {
            assert!(p.x.abs() < 1e-5 && p.y.abs() < 1e-5);
        }
        // outer paths fan to opposite sides
        let mid = paths[0].points.len() / 2;
        assert!(paths[0].points[mid].x * paths[2].points[mid].x < 0.0);
    }

    #[test]
    fn endpoints_are_exact() {
        let targets = [TargetSample {
            id: 5,
            world_pos: Vector3::new(2.0, 1.0, 6.0),
        }];
        let start = Vector3::new(0.5, 0.0, 1.0);
        let paths = spread_paths(start, &targets, &camera(), &SpreadParams::default());
        let pts = &paths[0].points;
        assert!((pts.first().unwrap() - start).norm() < 1e-5);
        assert!((pts.last().unwrap() - targets[0].world_pos).norm() < 1e-5);
        assert_eq!(pts.len(), SpreadParams::default().path_resolution + 1);
    }
}
