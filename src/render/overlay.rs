use super::colors::group_palette;
use crate::diagnostics::GroupDescriptor;
use crate::segments::Segment;
use crate::types::StickResult;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_hollow_circle_mut, draw_line_segment_mut};
use serde::Deserialize;

/// Drawing options for the result overlay.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct OverlayStyle {
    pub line_thickness: u32,
    pub crossing_radius: i32,
    pub crossing_color: [u8; 3],
    /// Radius of the ring marking each group's centroid; 0 disables it.
    pub centroid_radius: i32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            line_thickness: 2,
            crossing_radius: 5,
            crossing_color: [255, 0, 0],
            centroid_radius: 8,
        }
    }
}

/// Largest side of a generated canvas; geometry beyond it is clipped.
pub const MAX_CANVAS_SIDE: u32 = 8192;

/// Blank canvas large enough for every merged segment plus `margin` pixels,
/// capped at [`MAX_CANVAS_SIDE`] per side.
pub fn blank_canvas(result: &StickResult, margin: u32) -> RgbImage {
    let (mut w, mut h) = (1u32, 1u32);
    for seg in &result.merged {
        for p in [seg.p0, seg.p1] {
            w = w.max((p[0].max(0) as u32).saturating_add(margin));
            h = h.max((p[1].max(0) as u32).saturating_add(margin));
        }
    }
    RgbImage::new(w.min(MAX_CANVAS_SIDE), h.min(MAX_CANVAS_SIDE))
}

/// Draw each group in its own colour, mark group centroids and crossings.
pub fn draw_result(canvas: &mut RgbImage, result: &StickResult, style: &OverlayStyle) {
    let palette = group_palette(result.groups.len());
    for (group, &color) in result.groups.iter().zip(palette.iter()) {
        for seg in group.segments(&result.merged) {
            draw_thick_segment(canvas, seg, color, style.line_thickness);
        }
        if style.centroid_radius > 0 && !group.is_empty() {
            let c = GroupDescriptor::from_group(group, &result.merged).centroid;
            draw_hollow_circle_mut(
                canvas,
                (c[0] as i32, c[1] as i32),
                style.centroid_radius,
                color,
            );
        }
    }
    let crossing = Rgb(style.crossing_color);
    for p in &result.intersections {
        draw_filled_circle_mut(canvas, (p.x, p.y), style.crossing_radius, crossing);
    }
}

/// Parallel one-pixel strokes offset across the dominant axis.
fn draw_thick_segment(canvas: &mut RgbImage, seg: &Segment, color: Rgb<u8>, thickness: u32) {
    let d = seg.delta();
    let across_y = d.x.abs() >= d.y.abs();
    let half = thickness.max(1) as i32 / 2;
    for k in 0..thickness.max(1) as i32 {
        let off = (k - half) as f32;
        let (ox, oy) = if across_y { (0.0, off) } else { (off, 0.0) };
        draw_line_segment_mut(
            canvas,
            (seg.p0[0] as f32 + ox, seg.p0[1] as f32 + oy),
            (seg.p1[0] as f32 + ox, seg.p1[1] as f32 + oy),
            color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouping::{GroupOrigin, LineGroup};
    use crate::segments::Point;

    fn sample_result() -> StickResult {
        StickResult {
            merged: vec![
                Segment::from_coords([10, 50, 90, 50]),
                Segment::from_coords([50, 10, 50, 90]),
            ],
            groups: vec![
                LineGroup {
                    members: vec![0],
                    origin: GroupOrigin::Crossing,
                },
                LineGroup {
                    members: vec![1],
                    origin: GroupOrigin::Crossing,
                },
            ],
            intersections: vec![Point::new(50, 50)],
            latency_ms: 0.0,
        }
    }

    #[test]
    fn canvas_fits_segments() {
        let canvas = blank_canvas(&sample_result(), 10);
        assert_eq!(canvas.dimensions(), (100, 100));
    }

    #[test]
    fn canvas_size_is_capped() {
        let mut result = sample_result();
        result.merged.push(Segment::from_coords([0, 0, i32::MAX, 50]));
        let canvas = blank_canvas(&result, 10);
        assert_eq!(canvas.dimensions(), (MAX_CANVAS_SIDE, 100));
    }

    #[test]
    fn overlay_paints_groups_and_crossings() {
        let result = sample_result();
        let mut canvas = blank_canvas(&result, 10);
        draw_result(&mut canvas, &result, &OverlayStyle::default());
        let palette = group_palette(2);
        assert_eq!(*canvas.get_pixel(20, 50), palette[0]);
        assert_eq!(*canvas.get_pixel(50, 20), palette[1]);
        assert_eq!(*canvas.get_pixel(50, 50), Rgb([255, 0, 0]));
        assert_eq!(*canvas.get_pixel(5, 5), Rgb([0, 0, 0]));
    }
}
