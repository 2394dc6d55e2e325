//! Per-target metadata derived during one solve call.

use crate::camera::CameraView;
use crate::types::{Color, TargetSample};
use nalgebra::{Vector2, Vector3};

/// Working record for one visible target. Built fresh per solve; never
/// reused across calls.
#[derive(Clone, Debug)]
pub(crate) struct TargetMeta {
    pub id: u32,
    pub world_pos: Vector3<f32>,
    pub screen_pos: Vector2<f32>,
    /// Euclidean start→target distance in world units.
    pub distance3d: f32,
    /// atan2 of the screen-space direction from the start point, degrees.
    pub raw_angle: f32,
    /// `raw_angle` recentred against the median pivot, degrees.
    pub relative_angle: f32,
    pub group_id: Option<usize>,
    pub phase: f32,
    pub control_point: Vector3<f32>,
    pub straight: bool,
    pub color: Option<Color>,
}

/// Projects the start point and all targets, dropping entries behind the
/// camera. Returns the surviving metadata, the start's screen position and
/// the number of excluded targets.
pub(crate) fn project_targets(
    start: Vector3<f32>,
    targets: &[TargetSample],
    camera: &CameraView,
) -> (Vec<TargetMeta>, Vector2<f32>, usize) {
    let start_screen = camera.world_to_screen(start).screen;
    let mut metas = Vec::with_capacity(targets.len());
    let mut excluded = 0usize;

    for target in targets {
        let proj = camera.world_to_screen(target.world_pos);
        if proj.depth <= 0.0 {
            excluded += 1;
            continue;
        }
        let dir = proj.screen - start_screen;
        metas.push(TargetMeta {
            id: target.id,
            world_pos: target.world_pos,
            screen_pos: proj.screen,
            distance3d: (target.world_pos - start).norm(),
            raw_angle: dir.y.atan2(dir.x).to_degrees(),
            relative_angle: 0.0,
            group_id: None,
            phase: 0.0,
            control_point: Vector3::zeros(),
            straight: false,
            color: None,
        });
    }

    (metas, start_screen, excluded)
}
