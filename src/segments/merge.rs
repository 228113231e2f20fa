//! Consolidation of fragmented detections into representative segments.
//!
//! Fragments are seeded longest-first. Each seed absorbs every remaining
//! fragment that is parallel and close to the seed itself (never to the
//! growing group), and the group is replaced by the segment joining its two
//! most distant endpoints.

use super::options::ParallelParams;
use super::relations::parallel_and_close;
use super::segment::{Point, Segment};
use log::debug;
use std::cmp::Ordering;

/// Output of [`merge_segments`].
#[derive(Clone, Debug, Default)]
pub struct MergeOutcome {
    /// One representative segment per group, in seed order.
    pub merged: Vec<Segment>,
    /// Input indices contributing to each merged segment.
    pub members: Vec<Vec<usize>>,
    /// Zero-length inputs dropped before merging.
    pub degenerate: usize,
}

/// Merge near-collinear fragments. An empty input yields an empty outcome.
pub fn merge_segments(raw: &[Segment], params: &ParallelParams) -> MergeOutcome {
    let mut order: Vec<(usize, f32)> = raw
        .iter()
        .enumerate()
        .filter(|(_, s)| !s.is_degenerate())
        .map(|(i, s)| (i, s.length()))
        .collect();
    let degenerate = raw.len() - order.len();
    if degenerate > 0 {
        debug!("merge_segments dropped {degenerate} zero-length segments");
    }
    // Stable sort keeps input order among equal lengths.
    order.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let mut used = vec![false; raw.len()];
    let mut outcome = MergeOutcome {
        degenerate,
        ..MergeOutcome::default()
    };

    for &(seed_idx, _) in &order {
        if used[seed_idx] {
            continue;
        }
        used[seed_idx] = true;
        let seed = &raw[seed_idx];
        let mut group = vec![seed_idx];

        for &(idx, _) in &order {
            if used[idx] {
                continue;
            }
            if parallel_and_close(seed, &raw[idx], params) {
                group.push(idx);
                used[idx] = true;
            }
        }

        let points: Vec<Point> = group.iter().flat_map(|&i| raw[i].endpoints()).collect();
        if let Some(span) = farthest_pair(&points) {
            outcome.merged.push(span);
            outcome.members.push(group);
        }
    }

    debug!(
        "merge_segments raw={} merged={}",
        raw.len(),
        outcome.merged.len()
    );
    outcome
}

/// Segment joining the first pair of points at maximal distance, or `None`
/// when all points coincide.
fn farthest_pair(points: &[Point]) -> Option<Segment> {
    let mut best: Option<(i128, usize, usize)> = None;
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let d = points[i].distance_sq(&points[j]);
            if d > 0 && best.map_or(true, |(bd, _, _)| d > bd) {
                best = Some((d, i, j));
            }
        }
    }
    best.map(|(_, i, j)| {
        Segment::new([points[i].x, points[i].y], [points[j].x, points[j].y])
    })
}
