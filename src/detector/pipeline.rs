//! Detector pipeline driving stick grouping end-to-end.
//!
//! The [`StickDetector`] exposes a simple API: feed raw segments and get the
//! stick groups and crossing points, optionally with a full diagnostics trace.
//!
//! Typical usage:
//! ```no_run
//! use stick_detector::{StickDetector, StickParams};
//!
//! # fn example(raw: &[[i32; 4]]) -> Result<(), stick_detector::ConfigError> {
//! let detector = StickDetector::new(StickParams::default())?;
//! let result = detector.process_coords(raw);
//! println!("sticks: {} crossings: {}", result.stick_count(), result.crossing_count());
//! # Ok(())
//! # }
//! ```
use super::params::{ConfigError, StickParams};
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{
    DetectionReport, GroupDescriptor, InputDescriptor, PipelineTrace, RelationStage,
    SegmentDescriptor, TimingBreakdown,
};
use crate::graph::RelationGraph;
use crate::grouping::group_segments;
use crate::segments::{merge_segments, Segment};
use crate::types::StickResult;
use log::debug;
use std::time::Instant;

/// Stick detector: merge → length filter → relations → grouping.
///
/// Holds only validated parameters, so a single instance can serve any number
/// of independent calls, including from several threads.
#[derive(Clone, Debug)]
pub struct StickDetector {
    params: StickParams,
}

impl StickDetector {
    /// Create a detector, rejecting invalid thresholds up front.
    pub fn new(params: StickParams) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &StickParams {
        &self.params
    }

    /// Group raw segments, returning a compact result.
    pub fn process(&self, raw: &[Segment]) -> StickResult {
        self.process_with_diagnostics(raw).result
    }

    /// Convenience wrapper for `[x1, y1, x2, y2]` input.
    pub fn process_coords(&self, raw: &[[i32; 4]]) -> StickResult {
        let segments: Vec<Segment> = raw.iter().copied().map(Segment::from_coords).collect();
        self.process(&segments)
    }

    /// Run the pipeline and return both the result and a detailed report.
    pub fn process_with_diagnostics(&self, raw: &[Segment]) -> DetectionReport {
        debug!("StickDetector::process start raw_segments={}", raw.len());
        let total_start = Instant::now();
        let mut timings = TimingBreakdown::default();

        let merge = timings.time("merge", || merge_segments(raw, &self.params.merge));

        let min_len = self.params.min_segment_length_px;
        let mut merged = Vec::with_capacity(merge.merged.len());
        let mut descriptors = Vec::with_capacity(merge.merged.len());
        for (seg, members) in merge.merged.iter().zip(&merge.members) {
            let kept = seg.length() > min_len;
            descriptors.push(SegmentDescriptor::from_segment(seg, members.len(), kept));
            if kept {
                merged.push(*seg);
            }
        }
        debug!(
            "StickDetector::process merged={} kept={} (min_len={:.1})",
            merge.merged.len(),
            merged.len(),
            min_len
        );

        let graph = timings.time("relations", || {
            RelationGraph::build(
                &merged,
                self.params.min_intersection_angle_deg,
                &self.params.adjacency,
            )
        });
        let relations = RelationStage {
            intersecting_pairs: graph.intersections.len(),
            distinct_intersections: graph.distinct_intersection_count(),
            parallel_pairs: graph.parallel_pair_count(),
        };

        let crossing = self.params.crossing();
        let grouping = timings.time("grouping", || group_segments(&merged, &graph, &crossing));
        let groups: Vec<GroupDescriptor> = grouping
            .groups
            .iter()
            .map(|g| GroupDescriptor::from_group(g, &merged))
            .collect();

        timings.total_ms = elapsed_ms(total_start);
        debug!(
            "StickDetector::process done sticks={} crossings={} latency_ms={:.3}",
            grouping.groups.len(),
            graph.intersections.len(),
            timings.total_ms
        );

        DetectionReport {
            result: StickResult {
                merged,
                groups: grouping.groups,
                intersections: graph.intersections,
                latency_ms: timings.total_ms,
            },
            trace: PipelineTrace {
                input: InputDescriptor {
                    raw_segments: raw.len(),
                    degenerate_segments: merge.degenerate,
                },
                params: self.params.clone(),
                timings,
                merged: descriptors,
                relations,
                clusters: grouping.clusters,
                groups,
            },
        }
    }
}
