//! Angle utilities used across the stick grouping pipeline.
//!
//! Orientations are expressed in degrees and folded into `[0, 180)`, so a
//! segment and its reversed copy share the same angle.

/// Normalizes an angle in degrees into the range [0, 180).
#[inline]
pub fn normalize_half_turn_deg(angle: f32) -> f32 {
    let norm = angle.rem_euclid(180.0);
    if norm >= 180.0 - 1e-4 {
        0.0
    } else {
        norm
    }
}

/// Orientation in degrees of the direction `(dx, dy)`, folded into [0, 180).
#[inline]
pub fn orientation_deg(dx: f32, dy: f32) -> f32 {
    normalize_half_turn_deg(dy.atan2(dx).to_degrees())
}

/// Computes the acute-complement difference `min(|a-b|, 180-|a-b|)` between
/// two orientations in degrees. Returns a value in [0, 90].
#[inline]
pub fn angular_difference_deg(a: f32, b: f32) -> f32 {
    let mut diff = (a - b).abs();
    if diff > 180.0 {
        diff = diff.rem_euclid(180.0);
    }
    if diff > 90.0 {
        180.0 - diff
    } else {
        diff
    }
}
