//! Pairwise relationship graph over merged segments.
//!
//! Every unordered pair is classified once: an intersection test first, and
//! only when that fails the parallel-and-close test. Adjacency is stored in
//! index-addressed side tables next to the flat segment slice, with ordered
//! sets so traversal order is reproducible.

use crate::segments::{intersection, parallel_and_close, ParallelParams, Point, Segment};
use log::debug;
use std::collections::BTreeSet;

/// Intersection and parallel adjacency of a segment set.
#[derive(Clone, Debug, Default)]
pub struct RelationGraph {
    /// One entry per intersecting pair, in pair order (not deduplicated).
    pub intersections: Vec<Point>,
    /// Intersecting partner indices per segment.
    pub crossing_partners: Vec<BTreeSet<usize>>,
    /// Intersection points per segment, in pair order.
    pub crossing_points: Vec<Vec<Point>>,
    /// Parallel-and-close partner indices per segment.
    pub parallel_partners: Vec<BTreeSet<usize>>,
}

impl RelationGraph {
    /// Classify all pairs `(i, j)` with `i < j`.
    pub fn build(
        segments: &[Segment],
        min_intersection_angle_deg: f32,
        parallel: &ParallelParams,
    ) -> Self {
        let n = segments.len();
        let mut graph = RelationGraph {
            intersections: Vec::new(),
            crossing_partners: vec![BTreeSet::new(); n],
            crossing_points: vec![Vec::new(); n],
            parallel_partners: vec![BTreeSet::new(); n],
        };

        for i in 0..n {
            for j in (i + 1)..n {
                let (a, b) = (&segments[i], &segments[j]);
                if let Some(p) = intersection(a, b, min_intersection_angle_deg) {
                    graph.intersections.push(p);
                    graph.crossing_partners[i].insert(j);
                    graph.crossing_partners[j].insert(i);
                    graph.crossing_points[i].push(p);
                    graph.crossing_points[j].push(p);
                } else if parallel_and_close(a, b, parallel) {
                    graph.parallel_partners[i].insert(j);
                    graph.parallel_partners[j].insert(i);
                }
            }
        }

        debug!(
            "RelationGraph::build segments={} crossings={} parallel_pairs={}",
            n,
            graph.intersections.len(),
            graph.parallel_pair_count()
        );
        graph
    }

    pub fn len(&self) -> usize {
        self.crossing_partners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crossing_partners.is_empty()
    }

    pub fn has_crossings(&self, idx: usize) -> bool {
        !self.crossing_partners[idx].is_empty()
    }

    pub fn parallel_pair_count(&self) -> usize {
        self.parallel_partners.iter().map(BTreeSet::len).sum::<usize>() / 2
    }

    /// Number of distinct crossing locations.
    pub fn distinct_intersection_count(&self) -> usize {
        self.intersections.iter().collect::<BTreeSet<_>>().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(x1: i32, y1: i32, x2: i32, y2: i32) -> Segment {
        Segment::from_coords([x1, y1, x2, y2])
    }

    fn build(segs: &[Segment]) -> RelationGraph {
        RelationGraph::build(segs, 30.0, &ParallelParams::default().with_distance(50.0))
    }

    #[test]
    fn empty_graph() {
        let g = build(&[]);
        assert!(g.is_empty());
        assert!(g.intersections.is_empty());
    }

    #[test]
    fn cross_and_parallel_edges_are_symmetric() {
        let segs = vec![
            seg(0, 0, 300, 0),
            seg(0, 20, 300, 20),
            seg(150, -100, 150, 100),
        ];
        let g = build(&segs);
        for i in 0..segs.len() {
            for &j in &g.parallel_partners[i] {
                assert!(g.parallel_partners[j].contains(&i));
            }
            for &j in &g.crossing_partners[i] {
                assert!(g.crossing_partners[j].contains(&i));
                assert!(!g.parallel_partners[i].contains(&j));
            }
        }
        assert_eq!(g.parallel_pair_count(), 1);
        assert_eq!(
            g.intersections,
            vec![Point::new(150, 0), Point::new(150, 20)]
        );
        assert_eq!(g.crossing_points[2], vec![Point::new(150, 0), Point::new(150, 20)]);
        assert!(g.has_crossings(2));
        assert_eq!(g.len(), 3);
    }

    #[test]
    fn shared_crossing_points_are_kept_per_pair() {
        // Three lines through (100, 100).
        let segs = vec![
            seg(0, 100, 200, 100),
            seg(100, 0, 100, 200),
            seg(0, 0, 200, 200),
        ];
        let g = build(&segs);
        assert_eq!(g.intersections.len(), 3);
        assert_eq!(g.distinct_intersection_count(), 1);
    }
}
