//! Segment model and pairwise geometry.
//!
//! Segments arrive from an upstream line detector as integer endpoint pairs
//! and are treated as undirected: orientation is folded into `[0, 180)`
//! degrees, see [`crate::angle::normalize_half_turn_deg`].
//!
//! - [`Segment`] / [`Point`]: integer pixel geometry with derived length,
//!   orientation, direction, midpoint and implicit line.
//! - [`intersection`]: crossing of two finite segments, suppressed for
//!   near-parallel pairs.
//! - [`parallel_and_close`]: the "runs alongside" predicate shared by the
//!   merger and the relation graph.
//! - [`merge_segments`]: longest-first consolidation of fragmented detections
//!   into representative spans.

mod merge;
mod options;
mod relations;
mod segment;

pub use merge::{merge_segments, MergeOutcome};
pub use options::ParallelParams;
pub use relations::{intersection, parallel_and_close};
pub use segment::{Point, Segment};
