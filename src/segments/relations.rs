//! Pairwise geometric relations: bounded intersection and the
//! parallel-and-close predicate.

use super::options::ParallelParams;
use super::segment::{Point, Segment};
use crate::angle::angular_difference_deg;

/// Intersection of two finite segments.
///
/// Returns `None` when the orientations differ by less than `min_angle_diff_deg`
/// (near-parallel crossings are not reported), when the infinite lines are
/// exactly parallel, or when the crossing falls outside either bounding box.
/// The returned coordinates are truncated toward zero.
pub fn intersection(a: &Segment, b: &Segment, min_angle_diff_deg: f32) -> Option<Point> {
    if a.is_degenerate() || b.is_degenerate() {
        return None;
    }
    let diff = angular_difference_deg(a.angle_deg(), b.angle_deg());
    if diff < min_angle_diff_deg {
        return None;
    }

    let [a1, b1, c1] = a.implicit_line();
    let [a2, b2, c2] = b.implicit_line();
    let det = a1 * b2 - a2 * b1;
    if det == 0 {
        return None;
    }

    let det = det as f64;
    let x = (b2 * c1 - b1 * c2) as f64 / det;
    let y = (a1 * c2 - a2 * c1) as f64 / det;
    if a.bbox_contains(x, y) && b.bbox_contains(x, y) {
        Some(Point::new(x as i32, y as i32))
    } else {
        None
    }
}

/// True when `b` runs alongside `a`: similar orientation, close to the line
/// through `a`, nearby midpoints and aligned directions.
///
/// The distance gate is measured from `b`'s endpoints to `a`'s line, so the
/// test is not symmetric in general.
pub fn parallel_and_close(a: &Segment, b: &Segment, params: &ParallelParams) -> bool {
    if a.is_degenerate() || b.is_degenerate() {
        return false;
    }
    let diff = angular_difference_deg(a.angle_deg(), b.angle_deg());
    if diff > params.max_angle_diff_deg {
        return false;
    }

    let mid_dist = (a.midpoint() - b.midpoint()).norm();

    let dir_a = a.direction();
    let dir_b = b.direction();
    // Anti-parallel directions describe the same orientation.
    let dot = dir_a.dot(&dir_b).abs();

    let d0 = a.line_distance(b.p0[0] as f32, b.p0[1] as f32);
    let d1 = a.line_distance(b.p1[0] as f32, b.p1[1] as f32);
    let min_dist = d0.min(d1);

    min_dist < params.max_distance_px
        && mid_dist < params.max_distance_px * 2.0
        && dot > params.min_direction_dot
}
