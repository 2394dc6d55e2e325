//! Structured trace of one layout solve.
//!
//! The original interaction study pushed free-form log lines into a UI
//! singleton while solving; here every decision the solver makes is returned
//! as data next to the result, and the caller picks the sink.

use super::timing::TimingBreakdown;
use crate::types::TargetPath;
use serde::Serialize;

/// Shape of the input as the solver saw it.
#[derive(Clone, Copy, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub supplied_targets: usize,
    /// Targets dropped because they projected behind the camera.
    pub excluded_behind_camera: usize,
    pub visible_targets: usize,
}

/// One formed angular group.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupDescriptor {
    pub group_id: usize,
    /// Member target ids in left-to-right (relative angle descending) order.
    pub member_ids: Vec<u32>,
    /// Angular span first→last member, degrees.
    pub span_deg: f32,
    /// Mean relative angle of the members, degrees.
    pub mean_relative_angle_deg: f32,
    /// Curvature scaling applied to the group (1-ish at center, larger at
    /// the periphery). Zero when the high-density fallback fired.
    pub zone_multiplier: f32,
    /// True when the group was forced straight by the high-density fallback.
    pub high_density_fallback: bool,
}

/// Full trace of one `solve_with_diagnostics` call.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveTrace {
    pub input: InputDescriptor,
    /// Raw angle (degrees) of the median target chosen as the re-centering
    /// pivot. `None` when no target was visible.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pivot_angle_deg: Option<f32>,
    pub groups: Vec<GroupDescriptor>,
    pub timings: TimingBreakdown,
}

/// Result bundle returned by [`Solver::solve_with_diagnostics`](crate::Solver).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveReport {
    pub paths: Vec<TargetPath>,
    pub trace: SolveTrace,
}
