//! Stick detector orchestrating the segment grouping pipeline.
//!
//! Overview
//! - Merges raw fragments longest-first into representative spans.
//! - Drops merged segments not longer than the configured minimum.
//! - Classifies every pair of remaining segments as crossing (with a bounded
//!   intersection point) or parallel-and-close.
//! - Groups parallel components of non-crossing segments, then resolves
//!   crossing clusters by splitting them into at most two sticks.
//!
//! Modules
//! - [`params`] – configuration types and validation.
//! - `pipeline` – the main [`StickDetector`] implementation.

pub mod params;
mod pipeline;

pub use params::{ConfigError, StickParams};
pub use pipeline::StickDetector;
