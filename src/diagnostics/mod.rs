//! Diagnostics data model exposed by the detector and the demo tools.
//!
//! `DetectionReport` is the main entry point: the compact [`StickResult`]
//! plus a `PipelineTrace` describing what every stage did (merging, length
//! filter, relations, crossing clusters, groups) and how long it took.
//!
//! [`StickResult`]: crate::StickResult

pub mod groups;
pub mod pipeline;
pub mod segments;
pub mod timing;

pub use groups::GroupDescriptor;
pub use pipeline::{DetectionReport, InputDescriptor, PipelineTrace, RelationStage};
pub use segments::SegmentDescriptor;
pub use timing::{StageTiming, TimingBreakdown};
