//! Dynamic re-centering and sequential angular grouping.
//!
//! Targets are sorted left-to-right by recentred screen angle, then grouped
//! in a single forward pass: a candidate joins the open group while both the
//! gap to the last accepted member and the span from the group's first
//! member stay under their thresholds. Closed groups are never revisited.

use super::meta::TargetMeta;
use super::params::SolverParams;
use crate::angle::{angular_distance_deg, delta_angle_deg};
use log::debug;

/// Groups are index lists into the meta slice, in left-to-right order.
pub(crate) type Group = Vec<usize>;

/// Picks the median raw angle as the re-centering pivot, computes relative
/// angles against it and re-sorts the metas by relative angle descending.
///
/// Recentring on the median keeps the ordering stable when targets straddle
/// the ±180° wrap of the raw atan2 range. Returns the pivot angle, or `None`
/// for an empty slice.
pub(crate) fn recenter(metas: &mut [TargetMeta]) -> Option<f32> {
    if metas.is_empty() {
        return None;
    }

    metas.sort_by(|a, b| {
        b.raw_angle
            .partial_cmp(&a.raw_angle)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    let pivot = metas[metas.len() / 2].raw_angle;

    for meta in metas.iter_mut() {
        meta.relative_angle = delta_angle_deg(pivot, meta.raw_angle);
    }
    metas.sort_by(|a, b| {
        b.relative_angle
            .partial_cmp(&a.relative_angle)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Some(pivot)
}

/// Single left-to-right grouping pass with span pruning. Expects metas
/// already sorted by relative angle descending; assigns `group_id` on every
/// member and returns the formed groups.
pub(crate) fn group_sequential(metas: &mut [TargetMeta], params: &SolverParams) -> Vec<Group> {
    let mut groups: Vec<Group> = Vec::new();
    if metas.is_empty() {
        return groups;
    }

    let mut current: Group = vec![0];
    for i in 1..metas.len() {
        let last = *current.last().expect("open group is never empty");
        let first = current[0];
        let gap = angular_distance_deg(metas[last].relative_angle, metas[i].relative_angle);
        let span = angular_distance_deg(metas[first].relative_angle, metas[i].relative_angle);

        if gap <= params.angle_threshold_deg && span <= params.max_group_span_deg {
            current.push(i);
        } else {
            debug!(
                "group break before target {}: gap={:.1} span={:.1}",
                metas[i].id, gap, span
            );
            groups.push(std::mem::replace(&mut current, vec![i]));
        }
    }
    groups.push(current);

    for (gid, group) in groups.iter().enumerate() {
        for &idx in group {
            metas[idx].group_id = Some(gid);
        }
    }
    groups
}
