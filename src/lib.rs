#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod diagnostics;
pub mod types;

// Building blocks – public for tools and tests, considered internals.
pub mod angle;
pub mod config;
pub mod graph;
pub mod grouping;
pub mod io;
pub mod render;
pub mod segments;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{ConfigError, StickDetector, StickParams};
pub use crate::types::StickResult;

// High-level diagnostics returned by the detector.
pub use crate::diagnostics::{DetectionReport, PipelineTrace};

// Core geometry and grouping types.
pub use crate::grouping::{GroupOrigin, LineGroup};
pub use crate::segments::{Point, Segment};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use stick_detector::prelude::*;
///
/// let detector = StickDetector::new(StickParams::default()).unwrap();
/// let result = detector.process(&[
///     Segment::from_coords([0, 150, 300, 150]),
///     Segment::from_coords([150, 0, 150, 300]),
/// ]);
/// assert_eq!(result.stick_count(), 2);
/// assert_eq!(result.crossing_count(), 1);
/// ```
pub mod prelude {
    pub use crate::segments::{Point, Segment};
    pub use crate::{StickDetector, StickParams, StickResult};
}
