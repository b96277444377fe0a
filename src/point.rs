#[cfg(test)]
#[path = "point_test.rs"]
mod point_test;

use serde::{Deserialize, Serialize};

/// A single pointer sample in canvas world coordinates.
///
/// Samples are ordered by insertion; duplicates are permitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn dist(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.hypot(dy)
    }
}

/// Axis-aligned bounding box in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    /// Min/max accumulation over a point slice.
    ///
    /// An empty slice yields a zero-sized box at the origin.
    #[must_use]
    pub fn from_points(points: &[Point]) -> Self {
        let Some(first) = points.first() else {
            return Self { x: 0.0, y: 0.0, width: 0.0, height: 0.0 };
        };
        let mut min_x = first.x;
        let mut max_x = first.x;
        let mut min_y = first.y;
        let mut max_y = first.y;
        for pt in &points[1..] {
            min_x = min_x.min(pt.x);
            max_x = max_x.max(pt.x);
            min_y = min_y.min(pt.y);
            max_y = max_y.max(pt.y);
        }
        Self { x: min_x, y: min_y, width: max_x - min_x, height: max_y - min_y }
    }

    /// Center of the box.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// The larger of width and height.
    #[must_use]
    pub fn max_dim(&self) -> f64 {
        self.width.max(self.height)
    }

    /// This box grown by `pad` on every side.
    #[must_use]
    pub fn expanded(&self, pad: f64) -> Self {
        Self {
            x: self.x - pad,
            y: self.y - pad,
            width: self.width + pad * 2.0,
            height: self.height + pad * 2.0,
        }
    }

    /// Whether `pt` lies inside or on the edge of the box.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x && pt.x <= self.x + self.width && pt.y >= self.y && pt.y <= self.y + self.height
    }
}

/// Arithmetic mean of a point set (not area-weighted).
///
/// An empty slice yields the origin.
#[must_use]
pub fn centroid(points: &[Point]) -> Point {
    if points.is_empty() {
        return Point::new(0.0, 0.0);
    }
    let mut sx = 0.0;
    let mut sy = 0.0;
    for pt in points {
        sx += pt.x;
        sy += pt.y;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = points.len() as f64;
    Point::new(sx / n, sy / n)
}

/// Perpendicular distance from `pt` to the infinite line through `a` and `b`.
///
/// When `a` and `b` coincide the chord is degenerate and this falls back to
/// the Euclidean distance to that single point.
#[must_use]
pub fn perpendicular_distance(pt: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len = dx.hypot(dy);
    if len == 0.0 {
        return pt.dist(a);
    }
    ((pt.x - a.x) * dy - (pt.y - a.y) * dx).abs() / len
}
