//! Overlap detection: group intervals into transitive overlap clusters.
//!
//! A cluster is a maximal set connected by pairwise overlap. If A overlaps B
//! and B overlaps C, all three share a cluster even when A and C are apart.
//!
//! Intervals are sorted by [`Interval::layout_order`] before sweeping, so
//! membership and member order never depend on the order records arrived in.

use crate::interval::Interval;

/// Partitions `intervals` into overlap clusters.
///
/// Intervals for different staff members never share a cluster. Each
/// cluster is sorted by start then id; clusters are ordered by staff id and
/// then by their first member.
pub fn clusters(intervals: &[Interval]) -> Vec<Vec<Interval>> {
    let mut sorted = intervals.to_vec();
    sorted.sort_by(|a, b| {
        a.staff_id
            .cmp(&b.staff_id)
            .then_with(|| a.layout_order(b))
    });

    let mut clusters: Vec<Vec<Interval>> = Vec::new();
    // The latest end seen in the open cluster. Anything starting before it
    // overlaps the member that ends there.
    let mut reach = None;

    for interval in sorted {
        let joins_open = match (clusters.last(), reach) {
            (Some(open), Some(end)) => open[0].staff_id == interval.staff_id && interval.start < end,
            _ => false,
        };

        if joins_open {
            reach = reach.max(Some(interval.end));
            if let Some(open) = clusters.last_mut() {
                open.push(interval);
            }
        } else {
            reach = Some(interval.end);
            clusters.push(vec![interval]);
        }
    }

    clusters
}

/// Returns the cluster containing `target` among `candidates`.
///
/// Only candidates for the target's staff member are considered. The target
/// is always part of the result, even when it is missing from `candidates`;
/// a candidate carrying the target's id is replaced by the target itself.
pub fn cluster_of(target: &Interval, candidates: &[Interval]) -> Vec<Interval> {
    let mut pool: Vec<Interval> = candidates
        .iter()
        .filter(|c| c.staff_id == target.staff_id && c.id != target.id)
        .copied()
        .collect();
    pool.push(*target);

    clusters(&pool)
        .into_iter()
        .find(|cluster| cluster.iter().any(|i| i.id == target.id))
        .unwrap_or_else(|| vec![*target])
}
