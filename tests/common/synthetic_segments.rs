/// Raw segments for the two long edges of a stick of width `2 * half_width`
/// running from `p0` to `p1`, as an edge detector followed by a Hough
/// transform would report them.
pub fn stick_edges(p0: [i32; 2], p1: [i32; 2], half_width: f32) -> Vec<[i32; 4]> {
    let dx = (p1[0] - p0[0]) as f32;
    let dy = (p1[1] - p0[1]) as f32;
    let len = (dx * dx + dy * dy).sqrt();
    assert!(len > 0.0, "stick must have a positive length");
    let ox = (-dy / len * half_width).round() as i32;
    let oy = (dx / len * half_width).round() as i32;
    vec![
        [p0[0] + ox, p0[1] + oy, p1[0] + ox, p1[1] + oy],
        [p0[0] - ox, p0[1] - oy, p1[0] - ox, p1[1] - oy],
    ]
}

/// Short piece of the centreline between fractions `t0` and `t1`.
pub fn fragment(p0: [i32; 2], p1: [i32; 2], t0: f32, t1: f32) -> [i32; 4] {
    let lerp = |a: i32, b: i32, t: f32| (a as f32 + (b - a) as f32 * t).round() as i32;
    [
        lerp(p0[0], p1[0], t0),
        lerp(p0[1], p1[1], t0),
        lerp(p0[0], p1[0], t1),
        lerp(p0[1], p1[1], t1),
    ]
}
