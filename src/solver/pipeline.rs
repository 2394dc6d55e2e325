//! Layout solve pipeline: projection → re-centering → grouping → phases →
//! shaping → path materialization.
//!
//! All working state lives inside a single [`Solver::solve`] call; the solver
//! itself only carries parameters and can be shared freely.

use super::grouping::{group_sequential, recenter};
use super::meta::{project_targets, TargetMeta};
use super::params::SolverParams;
use super::phase::assign_phases;
use super::shaping::shape_group;
use crate::angle::angular_distance_deg;
use crate::bezier::sample_quadratic;
use crate::camera::CameraView;
use crate::diagnostics::{GroupDescriptor, InputDescriptor, SolveReport, SolveTrace};
use crate::types::{Color, TargetPath, TargetSample};
use log::debug;
use nalgebra::{Vector2, Vector3};
use std::time::Instant;

/// Debug palette cycled across multi-member groups; loners stay white.
const GROUP_PALETTE: [Color; 7] = [
    Color::new(1.0, 0.0, 0.0),
    Color::new(0.0, 0.0, 1.0),
    Color::new(0.0, 1.0, 0.0),
    Color::new(1.0, 1.0, 0.0),
    Color::new(0.0, 1.0, 1.0),
    Color::new(1.0, 0.0, 1.0),
    Color::new(1.0, 0.5, 0.0),
];

/// Target layout solver. Stateless per invocation: every call derives fresh
/// per-target metadata and returns an independent result.
#[derive(Clone, Debug, Default)]
pub struct Solver {
    params: SolverParams,
}

impl Solver {
    pub fn new(params: SolverParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &SolverParams {
        &self.params
    }

    /// Solves the layout, returning one path per visible target.
    pub fn solve(
        &self,
        start: Vector3<f32>,
        targets: &[TargetSample],
        camera: &CameraView,
    ) -> Vec<TargetPath> {
        self.solve_with_diagnostics(start, targets, camera).paths
    }

    /// Solves the layout and returns the full stage trace next to the paths.
    pub fn solve_with_diagnostics(
        &self,
        start: Vector3<f32>,
        targets: &[TargetSample],
        camera: &CameraView,
    ) -> SolveReport {
        let total_start = Instant::now();
        let mut trace = SolveTrace::default();
        debug!("Solver::solve start targets={}", targets.len());

        let stage_start = Instant::now();
        let (mut metas, _start_screen, excluded) = project_targets(start, targets, camera);
        trace.timings.record("projection", stage_start);
        trace.input = InputDescriptor {
            supplied_targets: targets.len(),
            excluded_behind_camera: excluded,
            visible_targets: metas.len(),
        };

        if metas.is_empty() {
            debug!("Solver::solve no visible targets");
            trace.timings.finish(total_start);
            return SolveReport {
                paths: Vec::new(),
                trace,
            };
        }

        let stage_start = Instant::now();
        trace.pivot_angle_deg = recenter(&mut metas);
        let groups = group_sequential(&mut metas, &self.params);
        trace.timings.record("grouping", stage_start);
        debug!(
            "Solver::solve visible={} groups={} pivot={:.1}",
            metas.len(),
            groups.len(),
            trace.pivot_angle_deg.unwrap_or(0.0)
        );

        // Group colors: palette entry per multi-member group, white loners.
        let mut palette_cursor = 0usize;
        for group in &groups {
            let color = if group.len() == 1 {
                Color::WHITE
            } else {
                let c = GROUP_PALETTE[palette_cursor % GROUP_PALETTE.len()];
                palette_cursor += 1;
                c
            };
            for &idx in group {
                metas[idx].color = Some(color);
            }
        }

        let centroid_screen = screen_centroid(&metas);

        let stage_start = Instant::now();
        for (gid, group) in groups.iter().enumerate() {
            assign_phases(&mut metas, group);
            let shaping = shape_group(
                &mut metas,
                group,
                start,
                centroid_screen,
                camera,
                &self.params,
            );

            let first = metas[group[0]].relative_angle;
            let last = metas[*group.last().unwrap_or(&group[0])].relative_angle;
            let mean_rel =
                group.iter().map(|&i| metas[i].relative_angle).sum::<f32>() / group.len() as f32;
            trace.groups.push(GroupDescriptor {
                group_id: gid,
                member_ids: group.iter().map(|&i| metas[i].id).collect(),
                span_deg: angular_distance_deg(first, last),
                mean_relative_angle_deg: mean_rel,
                zone_multiplier: shaping.zone_multiplier,
                high_density_fallback: shaping.high_density,
            });
        }
        trace.timings.record("shaping", stage_start);

        let stage_start = Instant::now();
        let paths = metas
            .iter()
            .map(|meta| self.materialize(meta, start))
            .collect();
        trace.timings.record("materialization", stage_start);

        trace.timings.finish(total_start);
        debug!(
            "Solver::solve done groups={} total_ms={:.3}",
            groups.len(),
            trace.timings.total_ms
        );
        SolveReport { paths, trace }
    }

    fn materialize(&self, meta: &TargetMeta, start: Vector3<f32>) -> TargetPath {
        let points = if meta.straight {
            vec![start, meta.world_pos]
        } else {
            sample_quadratic(
                start,
                meta.control_point,
                meta.world_pos,
                self.params.curve_resolution,
            )
        };
        TargetPath {
            id: meta.id,
            points,
            phase: meta.phase,
            color: meta.color,
            straight: meta.straight,
        }
    }
}

fn screen_centroid(metas: &[TargetMeta]) -> Vector2<f32> {
    let sum: Vector2<f32> = metas.iter().map(|m| m.screen_pos).sum();
    sum / metas.len().max(1) as f32
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
    fn empty_input_yields_empty_result() {
        let solver = Solver::default();
        let paths = solver.solve(Vector3::zeros(), &[], &camera());
        assert!(paths.is_empty());
    }

    #[test]
    fn behind_camera_targets_are_dropped_silently() {
        let solver = Solver::default();
        let targets = [
            TargetSample {
                id: 0,
                world_pos: Vector3::new(0.3, 0.2, 5.0),
            },
            TargetSample {
                id: 1,
                world_pos: Vector3::new(0.0, 0.0, -4.0),
            },
        ];
        let report = solver.solve_with_diagnostics(Vector3::new(0.0, 0.0, 3.0), &targets, &camera());
        assert_eq!(report.paths.len(), 1);
        assert_eq!(report.trace.input.excluded_behind_camera, 1);
        assert_eq!(report.paths[0].id, 0);
    }

    #[test]
    fn single_target_becomes_loner_with_curve() {
        let solver = Solver::default();
        let targets = [TargetSample {
            id: 42,
            world_pos: Vector3::new(1.0, 0.5, 6.0),
        }];
        let report = solver.solve_with_diagnostics(Vector3::zeros(), &targets, &camera());
        assert_eq!(report.paths.len(), 1);
        assert_eq!(report.trace.groups.len(), 1);
        let path = &report.paths[0];
        assert_eq!(path.color, Some(Color::WHITE));
        assert!((path.phase - 1.0 / 3.0).abs() < 1e-6);
        // weakly curved, not straight
        assert!(!path.straight);
        assert_eq!(path.points.len(), 21);
        for p in &path.points {
            assert!(p.iter().all(|c| c.is_finite()));
        }
    }

    #[test]
    fn paths_start_and_end_on_the_segment_endpoints() {
        let solver = Solver::default();
        let start = Vector3::new(0.0, -0.5, 1.0);
        let targets: Vec<TargetSample> = (0..4)
            .map(|i| TargetSample {
                id: i,
                world_pos: Vector3::new(i as f32 - 1.5, 0.4, 5.0 + i as f32),
            })
            .collect();
        let paths = solver.solve(start, &targets, &camera());
        assert_eq!(paths.len(), 4);
        for path in &paths {
            let first = path.points.first().unwrap();
            let last = path.points.last().unwrap();
            assert!((first - start).norm() < 1e-5);
            let target = targets.iter().find(|t| t.id == path.id).unwrap();
            assert!((last - target.world_pos).norm() < 1e-5);
        }
    }

    #[test]
    fn multi_member_groups_share_a_palette_color() {
        let solver = Solver::default();
        // Three targets tightly packed on screen -> one group.
        let targets: Vec<TargetSample> = (0..3)
            .map(|i| TargetSample {
                id: i,
                world_pos: Vector3::new(1.0 + 0.1 * i as f32, 1.0, 5.0),
            })
            .collect();
        let report = solver.solve_with_diagnostics(Vector3::zeros(), &targets, &camera());
        assert_eq!(report.trace.groups.len(), 1);
        let color = report.paths[0].color;
        assert!(color.is_some());
        assert_ne!(color, Some(Color::WHITE));
        for path in &report.paths {
            assert_eq!(path.color, color);
        }
    }
}
