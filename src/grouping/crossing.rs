//! Crossing clusters: intersection points that lie close together are treated
//! as one physical crossing, and the segments meeting there are split by
//! orientation into at most two sticks.

use super::connectivity::UsedSet;
use crate::angle::angular_difference_deg;
use crate::graph::RelationGraph;
use crate::segments::{Point, Segment};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

/// Segments sharing one or more nearby crossing points.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrossingCluster {
    /// Bucket keys absorbed into the cluster; the first one seeded it.
    pub points: Vec<Point>,
    pub members: BTreeSet<usize>,
}

/// Bucket every unassigned crossing segment by its crossing points (first
/// insertion order), then greedily merge buckets whose keys lie within
/// `merge_distance_px` of an unvisited seed bucket.
pub fn crossing_clusters(
    graph: &RelationGraph,
    used: &UsedSet,
    merge_distance_px: f32,
) -> Vec<CrossingCluster> {
    let mut buckets: Vec<(Point, BTreeSet<usize>)> = Vec::new();
    let mut index: HashMap<Point, usize> = HashMap::new();
    for (seg_idx, points) in graph.crossing_points.iter().enumerate() {
        if used.contains(seg_idx) {
            continue;
        }
        for &p in points {
            let slot = *index.entry(p).or_insert_with(|| {
                buckets.push((p, BTreeSet::new()));
                buckets.len() - 1
            });
            buckets[slot].1.insert(seg_idx);
        }
    }

    let mut visited = vec![false; buckets.len()];
    let mut clusters = Vec::new();
    for i in 0..buckets.len() {
        if visited[i] {
            continue;
        }
        visited[i] = true;
        let seed = buckets[i].0;
        let mut cluster = CrossingCluster {
            points: vec![seed],
            members: buckets[i].1.clone(),
        };
        for j in 0..buckets.len() {
            if visited[j] {
                continue;
            }
            let other = buckets[j].0;
            if seed.distance(&other) < merge_distance_px {
                cluster.points.push(other);
                cluster.members.extend(buckets[j].1.iter().copied());
                visited[j] = true;
            }
        }
        clusters.push(cluster);
    }
    clusters
}

/// Split crossing members into the smallest-angle member plus everything
/// within `split_angle_deg` of it, and the remainder.
pub fn split_by_angle(
    segments: &[Segment],
    members: &[usize],
    split_angle_deg: f32,
) -> (BTreeSet<usize>, BTreeSet<usize>) {
    let mut angles: Vec<(usize, f32)> = members
        .iter()
        .map(|&i| (i, segments[i].angle_deg()))
        .collect();
    angles.sort_by(|a, b| {
        a.1.partial_cmp(&b.1)
            .unwrap_or(Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });

    let mut first = BTreeSet::new();
    let mut second = BTreeSet::new();
    let Some(&(base_idx, base_angle)) = angles.first() else {
        return (first, second);
    };
    first.insert(base_idx);
    for &(idx, angle) in &angles[1..] {
        if angular_difference_deg(angle, base_angle) < split_angle_deg {
            first.insert(idx);
        } else {
            second.insert(idx);
        }
    }
    (first, second)
}
