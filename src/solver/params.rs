//! Parameter types configuring the layout solver stages.
//!
//! Defaults reproduce the tuning of the reference interaction study: 15°
//! neighbour gap, 45° group span, weak/strong curvature ratios of 0.05/0.15
//! and a high-density cutover at 8 members.

use serde::{Deserialize, Serialize};

/// Solver-wide parameters controlling grouping, phase staggering and curve
/// shaping.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SolverParams {
    /// Maximum angular gap (degrees) between a candidate and the last
    /// accepted member of the current group.
    pub angle_threshold_deg: f32,
    /// Maximum angular span (degrees) from a group's first member to any
    /// later candidate.
    pub max_group_span_deg: f32,
    /// Relative angle (degrees) at which the zone multiplier saturates to
    /// its strong value. Groups near 0° curve weakly, peripheral groups
    /// curve strongly.
    pub center_zone_max_angle_deg: f32,
    /// Zone multiplier at screen center / at the periphery.
    pub zone_multiplier_weak: f32,
    pub zone_multiplier_strong: f32,
    /// Control-point offset ratios relative to the start→target distance.
    pub curve_ratio_weak: f32,
    pub curve_ratio_strong: f32,
    /// Curvature amplification applied to a group's farthest member.
    pub farthest_boost: f32,
    /// Member count at which the high-density fallback may trigger.
    pub high_density_count: usize,
    /// On-screen bounding width ÷ viewport width below which a high-density
    /// group is forced straight.
    pub high_density_width_ratio: f32,
    /// Segment count used when sampling curved paths.
    pub curve_resolution: usize,
}

impl Default for SolverParams {
    fn default() -> Self {
        Self {
            angle_threshold_deg: 15.0,
            max_group_span_deg: 45.0,
            center_zone_max_angle_deg: 45.0,
            zone_multiplier_weak: 0.5,
            zone_multiplier_strong: 2.5,
            curve_ratio_weak: 0.05,
            curve_ratio_strong: 0.15,
            farthest_boost: 1.2,
            high_density_count: 8,
            high_density_width_ratio: 0.2,
            curve_resolution: 20,
        }
    }
}

/// Parameters for the index-fanned spread layout (the simple non-clustering
/// helper predating the grouping solver).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpreadParams {
    /// Sideways fan distance per index step away from the middle target.
    pub spread_factor: f32,
    /// Segment count used when sampling the cubic paths.
    pub path_resolution: usize,
}

impl Default for SpreadParams {
    fn default() -> Self {
        Self {
            spread_factor: 2.5,
            path_resolution: 100,
        }
    }
}
