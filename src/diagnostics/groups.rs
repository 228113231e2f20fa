use crate::grouping::{GroupOrigin, LineGroup};
use crate::segments::Segment;
use serde::Serialize;

/// Summary of one stick group, including the anchor a renderer uses for its
/// label (mean of member midpoints).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupDescriptor {
    pub members: Vec<usize>,
    pub origin: GroupOrigin,
    pub total_length: f32,
    pub centroid: [f32; 2],
}

impl GroupDescriptor {
    pub fn from_group(group: &LineGroup, merged: &[Segment]) -> Self {
        let mut total_length = 0.0f32;
        let mut sum = [0.0f32; 2];
        for seg in group.segments(merged) {
            total_length += seg.length();
            let mid = seg.midpoint();
            sum[0] += mid.x;
            sum[1] += mid.y;
        }
        let n = group.len().max(1) as f32;
        Self {
            members: group.members.clone(),
            origin: group.origin,
            total_length,
            centroid: [sum[0] / n, sum[1] / n],
        }
    }
}
