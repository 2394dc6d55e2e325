//! Curvature and zone shaping for formed groups.
//!
//! Each curved member gets a quadratic-Bezier control point: the start→target
//! midpoint displaced sideways along a camera-relative bend direction. Groups
//! near the screen center curve weakly, peripheral groups more aggressively;
//! crowded tight clusters skip curving entirely and fall back to straight
//! fan-out with hue-spaced colors.

use super::grouping::Group;
use super::meta::TargetMeta;
use super::params::SolverParams;
use crate::camera::CameraView;
use crate::types::Color;
use log::debug;
use nalgebra::{Vector2, Vector3};

/// Shaping outcome for one group, reported in the solve trace.
pub(crate) struct GroupShaping {
    pub zone_multiplier: f32,
    pub high_density: bool,
}

/// Projects `v` onto the plane perpendicular to `axis` and normalizes.
/// Falls back to an arbitrary perpendicular when the projection degenerates
/// (camera axis nearly parallel to the path direction).
fn project_perp(v: Vector3<f32>, axis: Vector3<f32>) -> Vector3<f32> {
    let projected = v - axis * v.dot(&axis);
    projected.try_normalize(1e-6).unwrap_or_else(|| {
        let fallback = axis.cross(&Vector3::new(0.0, 1.0, 0.0));
        fallback
            .try_normalize(1e-6)
            .unwrap_or_else(|| axis.cross(&Vector3::new(1.0, 0.0, 0.0)).normalize())
    })
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

/// Applies phase-independent curve shaping to one group: high-density
/// straight fallback, zone-scaled bend magnitudes and per-member bend
/// directions. `centroid_screen` is the mean screen position of all visible
/// targets, used to orient loner bends.
pub(crate) fn shape_group(
    metas: &mut [TargetMeta],
    group: &Group,
    start: Vector3<f32>,
    centroid_screen: Vector2<f32>,
    camera: &CameraView,
    params: &SolverParams,
) -> GroupShaping {
    let n = group.len();
    if n == 0 {
        return GroupShaping {
            zone_multiplier: 0.0,
            high_density: false,
        };
    }

    let mean_rel: f32 =
        group.iter().map(|&i| metas[i].relative_angle).sum::<f32>() / n as f32;
    let zone_factor = (mean_rel.abs() / params.center_zone_max_angle_deg).clamp(0.0, 1.0);
    let zone_multiplier = lerp(
        params.zone_multiplier_weak,
        params.zone_multiplier_strong,
        zone_factor,
    );

    // High-density fallback: many members squeezed into a narrow screen band
    // read better as a straight fan with distinct hues.
    if n >= params.high_density_count {
        let min_x = group
            .iter()
            .map(|&i| metas[i].screen_pos.x)
            .fold(f32::INFINITY, f32::min);
        let max_x = group
            .iter()
            .map(|&i| metas[i].screen_pos.x)
            .fold(f32::NEG_INFINITY, f32::max);
        let width_ratio = (max_x - min_x) / camera.viewport_width.max(1.0);
        if width_ratio < params.high_density_width_ratio {
            debug!(
                "high-density group n={} width_ratio={:.3} -> all straight",
                n, width_ratio
            );
            for (k, &idx) in group.iter().enumerate() {
                metas[idx].straight = true;
                metas[idx].color = Some(Color::from_hue(k as f32 / n as f32));
            }
            return GroupShaping {
                zone_multiplier,
                high_density: true,
            };
        }
    }

    if n == 1 {
        shape_loner(metas, group[0], start, centroid_screen, camera, zone_multiplier, params);
        return GroupShaping {
            zone_multiplier,
            high_density: false,
        };
    }

    let (nearest, farthest) = distance_extremes(metas, group);
    let center_idx = n / 2;

    for (i, &idx) in group.iter().enumerate() {
        if n % 2 == 1 && i == center_idx {
            metas[idx].straight = true;
            continue;
        }

        let dir = (metas[idx].world_pos - start)
            .try_normalize(1e-6)
            .unwrap_or(camera.forward);
        let visual_right = project_perp(camera.right, dir);
        let visual_up = project_perp(camera.up, dir);

        let bend = bend_direction(i, center_idx, n, visual_right, visual_up);

        let mut ratio = params.curve_ratio_strong;
        if idx == nearest {
            ratio = params.curve_ratio_weak;
        } else if idx == farthest {
            ratio = params.curve_ratio_strong * params.farthest_boost;
        }

        let offset = metas[idx].distance3d * ratio * zone_multiplier;
        let midpoint = (start + metas[idx].world_pos) * 0.5;
        metas[idx].control_point = midpoint + bend * offset;
    }

    GroupShaping {
        zone_multiplier,
        high_density: false,
    }
}

/// Bend direction for member `i` of a group in left-to-right order.
///
/// Small groups split plainly into left/right lanes. Larger groups alternate
/// between sideways and twisted up/down blends so more than two lanes stay
/// visually separated.
fn bend_direction(
    i: usize,
    center_idx: usize,
    n: usize,
    visual_right: Vector3<f32>,
    visual_up: Vector3<f32>,
) -> Vector3<f32> {
    let is_left = i < center_idx;
    if n <= 4 {
        return if is_left { -visual_right } else { visual_right };
    }

    if is_left {
        if i % 2 == 0 {
            -visual_right
        } else {
            (visual_up * 0.8 - visual_right * 0.2).normalize()
        }
    } else {
        let r = i - center_idx;
        if r % 2 == 0 {
            visual_right
        } else {
            (-visual_up * 0.8 + visual_right * 0.2).normalize()
        }
    }
}

/// Loners curve weakly, bending away from the crowd: the side of the global
/// target centroid decides left or right.
fn shape_loner(
    metas: &mut [TargetMeta],
    idx: usize,
    start: Vector3<f32>,
    centroid_screen: Vector2<f32>,
    camera: &CameraView,
    zone_multiplier: f32,
    params: &SolverParams,
) {
    let dir = (metas[idx].world_pos - start)
        .try_normalize(1e-6)
        .unwrap_or(camera.forward);
    let visual_right = project_perp(camera.right, dir);
    let bend = if metas[idx].screen_pos.x < centroid_screen.x {
        -visual_right
    } else {
        visual_right
    };

    let offset = metas[idx].distance3d * params.curve_ratio_weak * zone_multiplier;
    let midpoint = (start + metas[idx].world_pos) * 0.5;
    metas[idx].control_point = midpoint + bend * offset;
}

fn distance_extremes(metas: &[TargetMeta], group: &Group) -> (usize, usize) {
    let mut nearest = group[0];
    let mut farthest = group[0];
    for &idx in group.iter().skip(1) {
        if metas[idx].distance3d < metas[nearest].distance3d {
            nearest = idx;
        }
        if metas[idx].distance3d > metas[farthest].distance3d {
            farthest = idx;
        }
    }
    (nearest, farthest)
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

    fn meta(id: u32, world_pos: Vector3<f32>, screen_x: f32, rel_angle: f32) -> TargetMeta {
        TargetMeta {
            id,
            world_pos,
            screen_pos: Vector2::new(screen_x, 540.0),
            distance3d: world_pos.norm(),
            raw_angle: 0.0,
            relative_angle: rel_angle,
            group_id: None,
            phase: 0.0,
            control_point: Vector3::zeros(),
            straight: false,
            color: None,
        }
    }

    #[test]
    fn odd_group_center_member_is_straight() {
        let cam = camera();
        let mut metas = vec![
            meta(0, Vector3::new(-1.0, 0.0, 5.0), 700.0, 10.0),
            meta(1, Vector3::new(0.0, 0.0, 6.0), 960.0, 0.0),
            meta(2, Vector3::new(1.0, 0.0, 7.0), 1200.0, -10.0),
        ];
        let group: Group = vec![0, 1, 2];
        shape_group(
            &mut metas,
            &group,
            Vector3::zeros(),
            Vector2::new(960.0, 540.0),
            &cam,
            &SolverParams::default(),
        );
        assert!(metas[1].straight);
        assert!(!metas[0].straight && !metas[2].straight);
        // curved members got finite control points
        for m in [&metas[0], &metas[2]] {
            assert!(m.control_point.iter().all(|c| c.is_finite()));
            assert!(m.control_point.norm() > 0.0);
        }
    }

    #[test]
    fn left_and_right_members_bend_apart() {
        let cam = camera();
        let mut metas = vec![
            meta(0, Vector3::new(-0.5, 0.0, 5.0), 800.0, 5.0),
            meta(1, Vector3::new(0.5, 0.0, 5.0), 1100.0, -5.0),
        ];
        let group: Group = vec![0, 1];
        shape_group(
            &mut metas,
            &group,
            Vector3::zeros(),
            Vector2::new(960.0, 540.0),
            &cam,
            &SolverParams::default(),
        );
        // both curved, pushed to opposite sides of the camera-right axis
        let side0 = (metas[0].control_point
            - (metas[0].world_pos * 0.5))
            .dot(&cam.right);
        let side1 = (metas[1].control_point
            - (metas[1].world_pos * 0.5))
            .dot(&cam.right);
        assert!(side0 < 0.0, "left member should bend left, got {side0}");
        assert!(side1 > 0.0, "right member should bend right, got {side1}");
    }

    #[test]
    fn tight_crowd_falls_back_to_straight_hues() {
        let cam = camera();
        let mut metas: Vec<TargetMeta> = (0..9)
            .map(|i| {
                meta(
                    i,
                    Vector3::new(i as f32 * 0.02, 0.0, 5.0),
                    950.0 + i as f32 * 10.0,
                    i as f32 * 0.5,
                )
            })
            .collect();
        let group: Group = (0..9).collect();
        let shaping = shape_group(
            &mut metas,
            &group,
            Vector3::zeros(),
            Vector2::new(960.0, 540.0),
            &cam,
            &SolverParams::default(),
        );
        assert!(shaping.high_density);
        for m in &metas {
            assert!(m.straight);
            assert!(m.color.is_some());
        }
        // hues are distinct per member
        let first = metas[0].color.unwrap();
        let last = metas[8].color.unwrap();
        assert!(first != last);
    }

    #[test]
    fn peripheral_groups_curve_harder_than_central_ones() {
        let cam = camera();
        let params = SolverParams::default();
        let mut central = vec![
            meta(0, Vector3::new(-0.5, 0.0, 5.0), 800.0, 2.0),
            meta(1, Vector3::new(0.5, 0.0, 5.0), 1100.0, -2.0),
        ];
        let mut peripheral = vec![
            meta(0, Vector3::new(-0.5, 0.0, 5.0), 300.0, 60.0),
            meta(1, Vector3::new(0.5, 0.0, 5.0), 500.0, 50.0),
        ];
        let group: Group = vec![0, 1];
        let c = shape_group(
            &mut central,
            &group,
            Vector3::zeros(),
            Vector2::new(960.0, 540.0),
            &cam,
            &params,
        );
        let p = shape_group(
            &mut peripheral,
            &group,
            Vector3::zeros(),
            Vector2::new(960.0, 540.0),
            &cam,
            &params,
        );
        assert!(p.zone_multiplier > c.zone_multiplier);
    }

    #[test]
    fn loner_bends_away_from_centroid() {
        let cam = camera();
        let mut metas = vec![meta(0, Vector3::new(-1.0, 0.0, 5.0), 600.0, 30.0)];
        let group: Group = vec![0];
        shape_group(
            &mut metas,
            &group,
            Vector3::zeros(),
            Vector2::new(1200.0, 540.0), // crowd sits to the right
            &cam,
            &SolverParams::default(),
        );
        assert!(!metas[0].straight);
        let side = (metas[0].control_point - metas[0].world_pos * 0.5).dot(&cam.right);
        assert!(side < 0.0, "loner left of centroid should bend left");
    }
}
