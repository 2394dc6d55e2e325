//! Phase staggering within a group.
//!
//! Members of one group share a travel duration; each gets a fractional
//! start offset so simultaneous markers never pile up at the destination.
//! For a group of size N the farthest member (rank 0 by distance) receives
//! `N/(N+2)`, the nearest `1/(N+2)`, which reserves at least `2/(N+2)` of
//! the duration after the last start.

use super::grouping::Group;
use super::meta::TargetMeta;

/// Assigns `phase = (N - rank)/(N + 2)` per member, rank 0 = farthest.
pub(crate) fn assign_phases(metas: &mut [TargetMeta], group: &Group) {
    let n = group.len();
    if n == 0 {
        return;
    }

    let mut by_distance: Vec<usize> = group.clone();
    by_distance.sort_by(|&a, &b| {
        metas[b]
            .distance3d
            .partial_cmp(&metas[a].distance3d)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let denom = (n + 2) as f32;
    for (rank, &idx) in by_distance.iter().enumerate() {
        metas[idx].phase = (n - rank) as f32 / denom;
    }
}
