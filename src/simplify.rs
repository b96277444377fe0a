//! Ramer–Douglas–Peucker stroke simplification.
//!
//! Reduces a raw sample buffer to its geometrically salient points before
//! feature extraction. Deterministic: the same input and tolerance always
//! produce the same output, and endpoints are never moved.

#[cfg(test)]
#[path = "simplify_test.rs"]
mod simplify_test;

use crate::point::{Point, perpendicular_distance};

/// Reduce `points` to the subset whose removal would deviate the path by
/// more than `tolerance` world units.
///
/// Inputs of length ≤ 2 are returned unchanged.
#[must_use]
pub fn simplify(points: &[Point], tolerance: f64) -> Vec<Point> {
    if points.len() <= 2 {
        return points.to_vec();
    }
    let mut out = Vec::new();
    rdp(points, tolerance, &mut out);
    out.push(points[points.len() - 1]);
    out
}

/// Recursive RDP over one segment. Pushes every kept point except the
/// segment's final endpoint, so concatenated sub-segments don't duplicate
/// their shared split point.
fn rdp(points: &[Point], tolerance: f64, out: &mut Vec<Point>) {
    if points.len() <= 2 {
        out.push(points[0]);
        return;
    }
    let first = points[0];
    let last = points[points.len() - 1];

    let mut max_dist = 0.0;
    let mut max_index = 0;
    for (i, pt) in points.iter().enumerate().take(points.len() - 1).skip(1) {
        let dist = perpendicular_distance(*pt, first, last);
        if dist > max_dist {
            max_dist = dist;
            max_index = i;
        }
    }

    if max_dist > tolerance {
        rdp(&points[..=max_index], tolerance, out);
        rdp(&points[max_index..], tolerance, out);
    } else {
        out.push(first);
    }
}
