//! Lane assignment: side-by-side columns for overlapping intervals.
//!
//! Within a cluster, intervals are placed greedily in start order into the
//! leftmost lane that is free by their start. At most [`MAX_LANES`] lanes
//! are opened; beyond that an interval shares the lane that frees up
//! soonest, and the cluster stays at three columns instead of shrinking
//! further.
//!
//! Every member of a cluster reports the same `lane_count` so the grid
//! draws equal-width columns across the whole cluster.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::interval::Interval;
use crate::overlap;

/// Most columns a cluster is ever split into.
pub const MAX_LANES: usize = 3;

/// Where an interval sits within its cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaneAssignment {
    /// Zero-based column, always below `lane_count`.
    pub lane_index: usize,

    /// Columns the cluster is split into: cluster size, capped at [`MAX_LANES`].
    pub lane_count: usize,

    /// The interval shares its time with at least one other.
    pub has_collision: bool,
}

/// Assigns lanes within one overlap cluster.
///
/// The cluster is put in layout order first, so the result is the same
/// whatever order it was passed in. Output follows that order.
pub fn assign_lanes(cluster: &[Interval]) -> Vec<(Interval, LaneAssignment)> {
    let mut sorted = cluster.to_vec();
    sorted.sort_by(Interval::layout_order);

    let lane_count = sorted.len().min(MAX_LANES);
    let has_collision = lane_count > 1;

    // End time of whatever currently occupies each lane.
    let mut lanes: Vec<Timestamp> = Vec::with_capacity(lane_count);

    sorted
        .into_iter()
        .map(|interval| {
            let lane_index = place(&mut lanes, &interval);
            (
                interval,
                LaneAssignment {
                    lane_index,
                    lane_count,
                    has_collision,
                },
            )
        })
        .collect()
}

/// Clusters `intervals` and assigns lanes in each cluster.
///
/// Output is grouped by cluster, in cluster order.
pub fn layout(intervals: &[Interval]) -> Vec<(Interval, LaneAssignment)> {
    overlap::clusters(intervals)
        .into_iter()
        .flat_map(|cluster| assign_lanes(&cluster))
        .collect()
}

fn place(lanes: &mut Vec<Timestamp>, interval: &Interval) -> usize {
    if let Some(free) = lanes.iter().position(|end| *end <= interval.start) {
        lanes[free] = interval.end;
        return free;
    }

    if lanes.len() < MAX_LANES {
        lanes.push(interval.end);
        return lanes.len() - 1;
    }

    // Overflow: share the lane that frees up first, lowest index on ties.
    let (soonest, _) = lanes
        .iter()
        .enumerate()
        .min_by_key(|(_, end)| **end)
        .unwrap_or((0, &interval.end));
    lanes[soonest] = lanes[soonest].max(interval.end);
    soonest
}
