//! Synthetic scene builders for integration tests.

use nalgebra::{Vector2, Vector3};
use pursuit_core::camera::CameraView;
use pursuit_core::types::{GesturePath, TargetPath, TargetSample};

/// Camera at the origin looking down +z with a 60° vertical FOV.
pub fn standard_camera() -> CameraView {
    CameraView::look_at(
        Vector3::zeros(),
        Vector3::new(0.0, 0.0, 10.0),
        Vector3::new(0.0, 1.0, 0.0),
        60.0,
        1920.0,
        1080.0,
    )
}

/// Places one target so that, seen from `start`, it sits at `angle_deg` in
/// screen space. `radius` is the lateral world offset and `depth_offset`
/// pushes the target away from the start along the view axis, controlling
/// the 3D distance without changing the screen angle.
///
/// Relies on the start point projecting to the viewport center (start on
/// the camera's view axis).
pub fn target_at_screen_angle(
    id: u32,
    start: Vector3<f32>,
    angle_deg: f32,
    radius: f32,
    depth_offset: f32,
) -> TargetSample {
    let rad = angle_deg.to_radians();
    TargetSample {
        id,
        world_pos: start
            + Vector3::new(radius * rad.cos(), radius * rad.sin(), depth_offset),
    }
}

/// Simulates an externally animated marker: walks the solved path at uniform
/// speed over `duration` seconds and records the projected screen position
/// every frame, exactly what the per-frame mover hands back after a round.
pub fn record_marker(
    path: &TargetPath,
    camera: &CameraView,
    duration: f32,
    samples: usize,
) -> GesturePath {
    let mut recording = GesturePath::default();
    if path.points.is_empty() || samples == 0 {
        return recording;
    }
    let last = (path.points.len() - 1) as f32;
    for i in 0..samples {
        let t = i as f32 / (samples - 1).max(1) as f32;
        // linear interpolation between the pre-sampled path points
        let pos = t * last;
        let i0 = pos.floor() as usize;
        let i1 = (i0 + 1).min(path.points.len() - 1);
        let frac = pos - i0 as f32;
        let world = path.points[i0] + (path.points[i1] - path.points[i0]) * frac;
        let proj = camera.world_to_screen(world);
        recording.push(proj.screen, t * duration);
    }
    recording
}

/// A jittered copy of a recorded trajectory, standing in for the user's
/// finger tracing that marker.
pub fn traced_copy(recording: &GesturePath, jitter_px: f32) -> GesturePath {
    let mut traced = GesturePath::default();
    for (i, (point, &ts)) in recording
        .points
        .iter()
        .zip(&recording.timestamps)
        .enumerate()
    {
        // deterministic alternating jitter, no RNG needed
        let offset = if i % 2 == 0 { jitter_px } else { -jitter_px };
        traced.push(point + Vector2::new(offset * 0.5, offset), ts);
    }
    traced
}
