//! Pinhole camera abstraction feeding the layout solver.
//!
//! The solver only needs a world→screen projection plus the orientation basis
//! used to derive camera-relative bend directions. Both live here, decoupled
//! from any engine-owned camera object: callers describe the view with plain
//! vectors and the solver consumes it read-only.

use nalgebra::{Vector2, Vector3};
use serde::{Deserialize, Serialize};

/// Result of projecting a world point onto the viewport.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Projection {
    /// Viewport coordinates in pixels, origin at the bottom-left.
    pub screen: Vector2<f32>,
    /// Forward-axis camera-space coordinate. Non-positive values mean the
    /// point sits behind the camera and must be excluded from layout.
    pub depth: f32,
}

/// Camera view description: position, orthonormal basis and projection knobs.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraView {
    pub position: Vector3<f32>,
    pub right: Vector3<f32>,
    pub up: Vector3<f32>,
    pub forward: Vector3<f32>,
    /// Vertical field of view in degrees.
    pub fov_y_deg: f32,
    pub viewport_width: f32,
    pub viewport_height: f32,
}

impl CameraView {
    /// Builds a view at `position` looking at `target`, deriving an
    /// orthonormal basis from the supplied world-up hint.
    pub fn look_at(
        position: Vector3<f32>,
        target: Vector3<f32>,
        world_up: Vector3<f32>,
        fov_y_deg: f32,
        viewport_width: f32,
        viewport_height: f32,
    ) -> Self {
        let forward = (target - position)
            .try_normalize(1e-6)
            .unwrap_or_else(|| Vector3::new(0.0, 0.0, 1.0));
        let right = world_up
            .cross(&forward)
            .try_normalize(1e-6)
            .unwrap_or_else(|| Vector3::new(1.0, 0.0, 0.0));
        let up = forward.cross(&right).normalize();
        Self {
            position,
            right,
            up,
            forward,
            fov_y_deg,
            viewport_width,
            viewport_height,
        }
    }

    /// Projects a world point onto the viewport.
    ///
    /// The returned screen coordinates are only meaningful when `depth > 0`;
    /// callers gate on the depth sign before using them.
    pub fn world_to_screen(&self, world: Vector3<f32>) -> Projection {
        let rel = world - self.position;
        let x = rel.dot(&self.right);
        let y = rel.dot(&self.up);
        let depth = rel.dot(&self.forward);

        let focal = 0.5 * self.viewport_height / (0.5 * self.fov_y_deg.to_radians()).tan();
        let safe_depth = if depth.abs() < 1e-6 { 1e-6 } else { depth };
        let screen = Vector2::new(
            0.5 * self.viewport_width + focal * x / safe_depth,
            0.5 * self.viewport_height + focal * y / safe_depth,
        );
        Projection { screen, depth }
    }
}
