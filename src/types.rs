use crate::grouping::LineGroup;
use crate::segments::{Point, Segment};
use serde::Serialize;

/// Final grouping of one segment set.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StickResult {
    /// Merged segments that passed the length filter; groups index into it.
    pub merged: Vec<Segment>,
    /// Stick groups in discovery order.
    pub groups: Vec<LineGroup>,
    /// One crossing per intersecting pair of merged segments.
    pub intersections: Vec<Point>,
    pub latency_ms: f64,
}

impl StickResult {
    pub fn stick_count(&self) -> usize {
        self.groups.len()
    }

    pub fn crossing_count(&self) -> usize {
        self.intersections.len()
    }

    /// Segments of group `idx`, resolved against [`StickResult::merged`];
    /// `None` when there is no such group.
    pub fn group_segments(&self, idx: usize) -> Option<Vec<Segment>> {
        let group = self.groups.get(idx)?;
        Some(group.segments(&self.merged).copied().collect())
    }
}
