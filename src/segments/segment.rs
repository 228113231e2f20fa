use crate::angle::orientation_deg;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Integer pixel location, e.g. a crossing between two segments.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Point) -> f32 {
        (self.distance_sq(other) as f64).sqrt() as f32
    }

    /// Exact squared distance; widened so any pair of `i32` points fits.
    pub(crate) fn distance_sq(&self, other: &Point) -> i128 {
        let dx = self.x as i128 - other.x as i128;
        let dy = self.y as i128 - other.y as i128;
        dx * dx + dy * dy
    }
}

/// Line segment with integer endpoints in image pixel coordinates.
///
/// Length, orientation and direction are derived on demand; a segment whose
/// endpoints coincide is degenerate and must be filtered before any of them is
/// queried (see [`Segment::is_degenerate`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    pub p0: [i32; 2],
    pub p1: [i32; 2],
}

impl Segment {
    pub fn new(p0: [i32; 2], p1: [i32; 2]) -> Self {
        Self { p0, p1 }
    }

    /// Build from the `[x1, y1, x2, y2]` layout emitted by Hough-style detectors.
    pub fn from_coords(coords: [i32; 4]) -> Self {
        Self {
            p0: [coords[0], coords[1]],
            p1: [coords[2], coords[3]],
        }
    }

    pub fn coords(&self) -> [i32; 4] {
        [self.p0[0], self.p0[1], self.p1[0], self.p1[1]]
    }

    pub fn reversed(&self) -> Self {
        Self {
            p0: self.p1,
            p1: self.p0,
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.p0 == self.p1
    }

    pub fn endpoints(&self) -> [Point; 2] {
        [
            Point::new(self.p0[0], self.p0[1]),
            Point::new(self.p1[0], self.p1[1]),
        ]
    }

    pub fn delta(&self) -> Vector2<f32> {
        Vector2::new(
            (self.p1[0] as f64 - self.p0[0] as f64) as f32,
            (self.p1[1] as f64 - self.p0[1] as f64) as f32,
        )
    }

    pub fn length(&self) -> f32 {
        self.delta().norm()
    }

    /// Orientation in degrees within [0, 180).
    pub fn angle_deg(&self) -> f32 {
        let d = self.delta();
        orientation_deg(d.x, d.y)
    }

    /// Unit direction from `p0` to `p1`; zero for a degenerate segment.
    pub fn direction(&self) -> Vector2<f32> {
        let d = self.delta();
        let len = d.norm();
        if len > 0.0 {
            d / len
        } else {
            Vector2::zeros()
        }
    }

    pub fn midpoint(&self) -> Vector2<f32> {
        Vector2::new(
            ((self.p0[0] as f64 + self.p1[0] as f64) * 0.5) as f32,
            ((self.p0[1] as f64 + self.p1[1] as f64) * 0.5) as f32,
        )
    }

    /// Implicit line `a*x + b*y = c` with exact integer coefficients.
    ///
    /// `i128` keeps `c` and the products of two lines' coefficients exact over
    /// the whole `i32` coordinate range.
    pub fn implicit_line(&self) -> [i128; 3] {
        let (x1, y1) = (self.p0[0] as i128, self.p0[1] as i128);
        let (x2, y2) = (self.p1[0] as i128, self.p1[1] as i128);
        let a = y2 - y1;
        let b = x1 - x2;
        [a, b, a * x1 + b * y1]
    }

    /// Inclusive axis-aligned bounding box test.
    pub fn bbox_contains(&self, x: f64, y: f64) -> bool {
        let (xmin, xmax) = min_max(self.p0[0], self.p1[0]);
        let (ymin, ymax) = min_max(self.p0[1], self.p1[1]);
        xmin as f64 <= x && x <= xmax as f64 && ymin as f64 <= y && y <= ymax as f64
    }

    /// Perpendicular distance from `(x, y)` to the infinite line through the segment.
    pub fn line_distance(&self, x: f32, y: f32) -> f32 {
        let dir = self.direction();
        ((x - self.p0[0] as f32) * dir.y - (y - self.p0[1] as f32) * dir.x).abs()
    }
}

#[inline]
fn min_max(a: i32, b: i32) -> (i32, i32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
