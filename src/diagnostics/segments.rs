use crate::segments::Segment;
use serde::{Deserialize, Serialize};

/// Geometry snapshot of a merged segment.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentDescriptor {
    pub p0: [i32; 2],
    pub p1: [i32; 2],
    pub length: f32,
    pub angle_deg: f32,
    /// Number of raw fragments merged into this segment.
    pub fragments: usize,
    /// False when the segment was dropped by the minimum length filter.
    pub kept: bool,
}

impl SegmentDescriptor {
    pub fn from_segment(seg: &Segment, fragments: usize, kept: bool) -> Self {
        Self {
            p0: seg.p0,
            p1: seg.p1,
            length: seg.length(),
            angle_deg: seg.angle_deg(),
            fragments,
            kept,
        }
    }
}
