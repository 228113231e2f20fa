//! Two-phase grouping of merged segments into sticks.
//!
//! Phase 1 collects every segment without crossings together with its
//! parallel-connected component. Phase 2 buckets the remaining segments by
//! their crossing points, merges nearby buckets into crossing clusters and
//! splits each cluster by orientation into at most two groups, each expanded
//! through parallel connectivity.
//!
//! Assignment is tracked by an explicit [`UsedSet`] handed from phase to
//! phase; once a segment is used it is never reassigned, so the returned
//! groups partition the input.

mod connectivity;
mod crossing;

pub use connectivity::{connected_component, expand_through_parallels, UsedSet};
pub use crossing::{crossing_clusters, split_by_angle, CrossingCluster};

use crate::graph::RelationGraph;
use crate::segments::Segment;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// How a group was discovered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupOrigin {
    /// Parallel component of a segment without crossings.
    Parallel,
    /// One side of a crossing-cluster split.
    Crossing,
}

/// Set of merged-segment indices believed to form one stick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineGroup {
    /// Ascending merged-segment indices.
    pub members: Vec<usize>,
    pub origin: GroupOrigin,
}

impl LineGroup {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Member segments resolved against the merged segment list.
    pub fn segments<'a>(
        &'a self,
        merged: &'a [Segment],
    ) -> impl Iterator<Item = &'a Segment> + 'a {
        self.members.iter().map(move |&i| &merged[i])
    }
}

/// Thresholds used only during crossing resolution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CrossingParams {
    pub split_angle_deg: f32,
    pub merge_distance_px: f32,
}

/// Groups plus the crossing clusters that produced the phase-2 groups.
#[derive(Clone, Debug, Default)]
pub struct GroupingOutcome {
    pub groups: Vec<LineGroup>,
    pub clusters: Vec<CrossingCluster>,
}

/// Run both phases over `segments` and their relation graph.
pub fn group_segments(
    segments: &[Segment],
    graph: &RelationGraph,
    params: &CrossingParams,
) -> GroupingOutcome {
    let mut used = UsedSet::new(segments.len());
    let mut groups = group_non_crossing(graph, &mut used);
    let phase1 = groups.len();

    let clusters = crossing_clusters(graph, &used, params.merge_distance_px);
    groups.extend(resolve_crossings(
        segments,
        graph,
        &clusters,
        params.split_angle_deg,
        &mut used,
    ));

    debug_assert!(used.is_complete(), "every segment must be assigned");
    debug!(
        "group_segments segments={} parallel_groups={} crossing_clusters={} crossing_groups={}",
        segments.len(),
        phase1,
        clusters.len(),
        groups.len() - phase1
    );
    GroupingOutcome { groups, clusters }
}

/// Phase 1: parallel components seeded by segments without crossings.
pub fn group_non_crossing(graph: &RelationGraph, used: &mut UsedSet) -> Vec<LineGroup> {
    let mut groups = Vec::new();
    for idx in 0..graph.len() {
        if used.contains(idx) || graph.has_crossings(idx) {
            continue;
        }
        let component =
            connected_component(idx, &graph.parallel_partners, |i| !used.contains(i));
        used.mark_all(&component);
        groups.push(LineGroup {
            members: component.into_iter().collect(),
            origin: GroupOrigin::Parallel,
        });
    }
    groups
}

/// Phase 2: split each cluster by angle and grow both sides along parallels.
pub fn resolve_crossings(
    segments: &[Segment],
    graph: &RelationGraph,
    clusters: &[CrossingCluster],
    split_angle_deg: f32,
    used: &mut UsedSet,
) -> Vec<LineGroup> {
    let mut groups = Vec::new();
    for cluster in clusters {
        let members: Vec<usize> = cluster
            .members
            .iter()
            .copied()
            .filter(|&i| !used.contains(i))
            .collect();
        if members.is_empty() {
            continue;
        }

        let (first, second) = split_by_angle(segments, &members, split_angle_deg);
        for side in [first, second] {
            let side: BTreeSet<usize> = side.into_iter().filter(|&i| !used.contains(i)).collect();
            if side.is_empty() {
                continue;
            }
            let expanded =
                expand_through_parallels(&side, &graph.parallel_partners, |i| !used.contains(i));
            used.mark_all(&expanded);
            groups.push(LineGroup {
                members: expanded.into_iter().collect(),
                origin: GroupOrigin::Crossing,
            });
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segments::ParallelParams;

    fn seg(x1: i32, y1: i32, x2: i32, y2: i32) -> Segment {
        Segment::from_coords([x1, y1, x2, y2])
    }

    fn run(segs: &[Segment]) -> GroupingOutcome {
        let parallel = ParallelParams::default().with_distance(50.0);
        let graph = RelationGraph::build(segs, 30.0, &parallel);
        group_segments(
            segs,
            &graph,
            &CrossingParams {
                split_angle_deg: 25.0,
                merge_distance_px: 50.0,
            },
        )
    }

    fn assert_partition(segs: &[Segment], groups: &[LineGroup]) {
        let mut seen = vec![0usize; segs.len()];
        for g in groups {
            for &m in &g.members {
                seen[m] += 1;
            }
        }
        assert!(seen.iter().all(|&c| c == 1), "not a partition: {seen:?}");
    }

    #[test]
    fn no_segments_no_groups() {
        let out = run(&[]);
        assert!(out.groups.is_empty());
        assert!(out.clusters.is_empty());
    }

    #[test]
    fn isolated_segments_are_singletons() {
        let segs = vec![seg(0, 0, 300, 0), seg(0, 500, 300, 500)];
        let out = run(&segs);
        assert_eq!(out.groups.len(), 2);
        assert!(out.groups.iter().all(|g| g.len() == 1 && g.origin == GroupOrigin::Parallel));
    }

    #[test]
    fn parallel_chain_is_one_group() {
        let segs = vec![seg(0, 0, 300, 0), seg(0, 30, 300, 30), seg(0, 60, 300, 60)];
        let out = run(&segs);
        assert_eq!(out.groups.len(), 1);
        assert_eq!(out.groups[0].members, vec![0, 1, 2]);
    }

    #[test]
    fn plus_crossing_gives_two_sticks() {
        let segs = vec![seg(0, 150, 300, 150), seg(150, 0, 150, 300)];
        let out = run(&segs);
        assert_eq!(out.clusters.len(), 1);
        assert_eq!(out.groups.len(), 2);
        assert_eq!(out.groups[0].members, vec![0]);
        assert_eq!(out.groups[1].members, vec![1]);
        assert_partition(&segs, &out.groups);
    }

    #[test]
    fn similar_angles_share_a_side_of_the_split() {
        // Two shallow diagonals and one steep line meeting near (200, 200).
        let segs = vec![
            seg(0, 0, 400, 400),
            seg(0, 40, 400, 360),
            seg(200, 0, 205, 400),
        ];
        let out = run(&segs);
        assert_eq!(out.groups.len(), 2, "groups: {:?}", out.groups);
        assert_eq!(out.groups[0].members, vec![0, 1]);
        assert_eq!(out.groups[1].members, vec![2]);
        assert_partition(&segs, &out.groups);
    }

    #[test]
    fn parallel_continuation_is_claimed_in_phase_one() {
        let segs = vec![
            seg(0, 150, 300, 150),
            seg(150, 0, 150, 160),
            // Runs alongside the horizontal stick and crosses nothing.
            seg(50, 180, 350, 180),
        ];
        let out = run(&segs);
        assert_eq!(out.groups.len(), 2);
        assert_eq!(out.groups[0].members, vec![0, 2]);
        assert_eq!(out.groups[0].origin, GroupOrigin::Parallel);
        assert_eq!(out.groups[1].members, vec![1]);
        assert_partition(&segs, &out.groups);
    }

    #[test]
    fn crossing_side_pulls_in_parallel_continuation() {
        let segs = vec![
            seg(0, 150, 300, 150),
            seg(150, 0, 150, 160),
            seg(50, 180, 350, 180),
            seg(330, 100, 330, 300),
        ];
        let out = run(&segs);
        assert_eq!(out.clusters.len(), 2);
        let members: Vec<Vec<usize>> = out.groups.iter().map(|g| g.members.clone()).collect();
        assert_eq!(members, vec![vec![0, 2], vec![1], vec![3]]);
        assert!(out.groups.iter().all(|g| g.origin == GroupOrigin::Crossing));
        assert_partition(&segs, &out.groups);
    }

    #[test]
    fn parallel_partner_across_the_split_joins_the_first_side() {
        // C lands on the second side of the angle split but runs alongside B,
        // so the first side's expansion claims it.
        let segs = vec![
            seg(0, 500, 1000, 500),
            seg(30, 329, 970, 671),
            seg(420, 448, 596, 562),
            seg(500, 0, 500, 1000),
        ];
        let parallel = ParallelParams::default().with_distance(50.0);
        let graph = RelationGraph::build(&segs, 30.0, &parallel);
        assert!(graph.parallel_partners[1].contains(&2));
        assert!(graph.crossing_partners[2].contains(&0));

        let out = run(&segs);
        let members: Vec<Vec<usize>> = out.groups.iter().map(|g| g.members.clone()).collect();
        assert_eq!(members, vec![vec![0, 1, 2], vec![3]]);
        assert_partition(&segs, &out.groups);
    }

    #[test]
    fn segment_in_two_clusters_is_assigned_once() {
        // A long horizontal crossed by two far-apart verticals.
        let segs = vec![
            seg(0, 100, 1000, 100),
            seg(100, 0, 100, 300),
            seg(900, 0, 900, 300),
        ];
        let out = run(&segs);
        assert_eq!(out.clusters.len(), 2);
        assert_eq!(out.groups.len(), 3);
        assert_partition(&segs, &out.groups);
    }
}
