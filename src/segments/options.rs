use serde::{Deserialize, Serialize};

/// Thresholds of the "parallel and close" test between two segments.
///
/// - `max_angle_diff_deg`: largest acute-complement orientation difference.
/// - `max_distance_px`: bound on the perpendicular gap between the lines; the
///   midpoints must also lie within twice this distance.
/// - `min_direction_dot`: sign-aligned unit direction agreement.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParallelParams {
    pub max_angle_diff_deg: f32,
    pub max_distance_px: f32,
    pub min_direction_dot: f32,
}

impl Default for ParallelParams {
    fn default() -> Self {
        Self {
            max_angle_diff_deg: 15.0,
            max_distance_px: 60.0,
            min_direction_dot: 0.85,
        }
    }
}

impl ParallelParams {
    /// Same angle and direction gates with a different distance bound.
    pub fn with_distance(mut self, max_distance_px: f32) -> Self {
        self.max_distance_px = max_distance_px;
        self
    }
}
