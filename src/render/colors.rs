use image::Rgb;

/// `n` colours spread evenly over the hue circle at full saturation and value.
pub fn distinct_colors(n: usize) -> Vec<Rgb<u8>> {
    (0..n)
        .map(|i| hsv_to_rgb(360.0 * i as f32 / n as f32, 1.0, 1.0))
        .collect()
}

/// Palette for `groups` sticks; never fewer than nine entries so small
/// results still get well separated hues.
pub fn group_palette(groups: usize) -> Vec<Rgb<u8>> {
    distinct_colors(groups.max(9))
}

/// Convert HSV (hue in degrees, saturation and value in [0, 1]) to RGB.
pub fn hsv_to_rgb(hue_deg: f32, saturation: f32, value: f32) -> Rgb<u8> {
    let h = hue_deg.rem_euclid(360.0) / 60.0;
    let c = value * saturation;
    let x = c * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = value - c;
    let to_u8 = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgb([to_u8(r), to_u8(g), to_u8(b)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_hues() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), Rgb([255, 0, 0]));
        assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), Rgb([0, 255, 0]));
        assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), Rgb([0, 0, 255]));
    }

    #[test]
    fn palette_colors_are_pairwise_distinct() {
        let colors = group_palette(4);
        assert_eq!(colors.len(), 9);
        for (i, a) in colors.iter().enumerate() {
            for b in colors.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
        assert_eq!(group_palette(12).len(), 12);
    }
}
