//! Parameter types configuring the stick detector stages.
//!
//! Merging, post-merge adjacency, crossing detection and crossing splitting
//! each have their own threshold.
//! Validation runs once in [`StickDetector::new`](crate::StickDetector::new);
//! processing never fails afterwards.

use crate::grouping::CrossingParams;
use crate::segments::ParallelParams;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a parameter set is rejected before any processing.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must be a finite, non-negative distance (got {value})")]
    InvalidDistance { name: &'static str, value: f32 },
    #[error("{name} must be an angle within [0, 90] degrees (got {value})")]
    InvalidAngle { name: &'static str, value: f32 },
    #[error("{name} must lie within [0, 1] (got {value})")]
    InvalidDirectionDot { name: &'static str, value: f32 },
}

/// Detector-wide parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StickParams {
    /// Crossings between segments closer than this to parallel are ignored.
    pub min_intersection_angle_deg: f32,
    /// Parallel test used while merging raw fragments.
    pub merge: ParallelParams,
    /// Parallel test used between merged segments.
    pub adjacency: ParallelParams,
    /// Crossing members within this angle of the smallest one share its side.
    pub crossing_split_angle_deg: f32,
    /// Crossing points closer than this belong to one crossing cluster.
    pub crossing_merge_distance_px: f32,
    /// Merged segments must be strictly longer than this.
    pub min_segment_length_px: f32,
}

impl Default for StickParams {
    fn default() -> Self {
        Self {
            min_intersection_angle_deg: 30.0,
            merge: ParallelParams::default(),
            adjacency: ParallelParams::default().with_distance(50.0),
            crossing_split_angle_deg: 25.0,
            crossing_merge_distance_px: 50.0,
            min_segment_length_px: 200.0,
        }
    }
}

impl StickParams {
    /// Check every threshold; the first offending field is reported.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_angle("min_intersection_angle_deg", self.min_intersection_angle_deg)?;
        check_parallel(
            &self.merge,
            [
                "merge.max_angle_diff_deg",
                "merge.max_distance_px",
                "merge.min_direction_dot",
            ],
        )?;
        check_parallel(
            &self.adjacency,
            [
                "adjacency.max_angle_diff_deg",
                "adjacency.max_distance_px",
                "adjacency.min_direction_dot",
            ],
        )?;
        check_angle("crossing_split_angle_deg", self.crossing_split_angle_deg)?;
        check_distance("crossing_merge_distance_px", self.crossing_merge_distance_px)?;
        check_distance("min_segment_length_px", self.min_segment_length_px)?;
        Ok(())
    }

    pub fn crossing(&self) -> CrossingParams {
        CrossingParams {
            split_angle_deg: self.crossing_split_angle_deg,
            merge_distance_px: self.crossing_merge_distance_px,
        }
    }
}

fn check_parallel(p: &ParallelParams, names: [&'static str; 3]) -> Result<(), ConfigError> {
    let [angle, dist, dot] = names;
    check_angle(angle, p.max_angle_diff_deg)?;
    check_distance(dist, p.max_distance_px)?;
    if !(0.0..=1.0).contains(&p.min_direction_dot) {
        return Err(ConfigError::InvalidDirectionDot {
            name: dot,
            value: p.min_direction_dot,
        });
    }
    Ok(())
}

fn check_angle(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=90.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidAngle { name, value })
    }
}

fn check_distance(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidDistance { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(StickParams::default().validate(), Ok(()));
    }

    #[test]
    fn negative_distance_is_rejected() {
        let mut params = StickParams::default();
        params.adjacency.max_distance_px = -1.0;
        assert_eq!(
            params.validate(),
            Err(ConfigError::InvalidDistance {
                name: "adjacency.max_distance_px",
                value: -1.0
            })
        );
    }

    #[test]
    fn nan_threshold_is_rejected() {
        let params = StickParams {
            crossing_split_angle_deg: f32::NAN,
            ..StickParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::InvalidAngle { name: "crossing_split_angle_deg", .. })
        ));
    }

    #[test]
    fn direction_dot_must_be_a_cosine() {
        let mut params = StickParams::default();
        params.merge.min_direction_dot = 1.5;
        let err = params.validate().unwrap_err();
        assert!(err.to_string().contains("merge.min_direction_dot"));
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let json = r#"{"min_segment_length_px": 120, "adjacency": {"max_distance_px": 40}}"#;
        let params: StickParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.min_segment_length_px, 120.0);
        assert_eq!(params.adjacency.max_distance_px, 40.0);
        assert_eq!(params.adjacency.max_angle_diff_deg, 15.0);
        assert_eq!(params.merge.max_distance_px, 60.0);
    }
}
