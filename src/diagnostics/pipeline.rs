use super::groups::GroupDescriptor;
use super::segments::SegmentDescriptor;
use super::timing::TimingBreakdown;
use crate::detector::StickParams;
use crate::grouping::CrossingCluster;
use crate::types::StickResult;
use serde::Serialize;

/// Result produced by [`StickDetector::process_with_diagnostics`](crate::StickDetector).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    pub result: StickResult,
    pub trace: PipelineTrace,
}

impl DetectionReport {
    /// Human-readable summary printed by the demo tools.
    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("sticks found: {}", self.result.stick_count()),
            format!(
                "crossings found: {} ({} distinct)",
                self.result.crossing_count(),
                self.trace.relations.distinct_intersections
            ),
            format!(
                "segments: raw={} degenerate={} merged={} kept={}",
                self.trace.input.raw_segments,
                self.trace.input.degenerate_segments,
                self.trace.merged.len(),
                self.result.merged.len()
            ),
        ];
        for (i, g) in self.trace.groups.iter().enumerate() {
            lines.push(format!(
                "  group {i}: {} segment(s), {:?}, length {:.1}px at ({:.0}, {:.0})",
                g.members.len(),
                g.origin,
                g.total_length,
                g.centroid[0],
                g.centroid[1]
            ));
        }
        lines.push(format!("latency: {:.3} ms", self.trace.timings.total_ms));
        lines
    }
}

/// End-to-end trace describing the internal execution of the detector.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineTrace {
    pub input: InputDescriptor,
    pub params: StickParams,
    pub timings: TimingBreakdown,
    /// Every merged segment, including those dropped by the length filter.
    pub merged: Vec<SegmentDescriptor>,
    pub relations: RelationStage,
    pub clusters: Vec<CrossingCluster>,
    pub groups: Vec<GroupDescriptor>,
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub raw_segments: usize,
    pub degenerate_segments: usize,
}

/// Counts from the pairwise relation pass.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationStage {
    pub intersecting_pairs: usize,
    pub distinct_intersections: usize,
    pub parallel_pairs: usize,
}
