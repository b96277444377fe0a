//! Geometric feature extraction from a stroke's point set.
//!
//! `analyze` computes the fixed feature bundle both classifiers share:
//! bounding box, centroid, closure, aspect ratio, circularity, and detected
//! corners. Corner detection runs twice — once on the raw samples and once
//! on the simplified points — because simplification tends to erase exactly
//! the points that mark sharp corners, and the classifiers prefer the
//! raw-point count for rectangle/triangle discrimination.
//!
//! Everything here is purely functional; no state survives between calls.

#[cfg(test)]
#[path = "features_test.rs"]
mod features_test;

use crate::config::RecognizerConfig;
use crate::point::{Bounds, Point, centroid};

/// A point where the stroke's local direction changes sharply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corner {
    /// Index into the analyzed point sequence.
    pub index: usize,
    /// The corner point itself.
    pub point: Point,
    /// Angle between the look-behind and look-ahead vectors, in degrees.
    pub angle: f64,
}

/// Immutable feature bundle, computed once per recognition pass.
#[derive(Debug, Clone)]
pub struct Features {
    /// Min/max bounding box of the raw samples.
    pub bounds: Bounds,
    /// Arithmetic mean of the raw samples.
    pub centroid: Point,
    /// Whether the stroke's endpoints nearly meet.
    pub is_closed: bool,
    /// `bounds.width / bounds.height`, both dimensions floored at 1.
    pub aspect_ratio: f64,
    /// Radial-variance score in `[0, 1]`; 1.0 is a perfect circle.
    pub circularity: f64,
    /// Corners detected on the simplified points.
    pub corners: Vec<Corner>,
    /// Corners detected on the raw samples; preferred by classifiers.
    pub corners_raw: Vec<Corner>,
}

impl Features {
    /// The corner count classifiers should gate on: raw-point corners when
    /// any were found, otherwise the simplified-point corners.
    #[must_use]
    pub fn preferred_corner_count(&self) -> usize {
        if self.corners_raw.is_empty() {
            self.corners.len()
        } else {
            self.corners_raw.len()
        }
    }
}

/// Compute the feature bundle for one stroke.
///
/// `raw` is the full sample buffer; `simplified` its RDP reduction.
#[must_use]
pub fn analyze(raw: &[Point], simplified: &[Point], cfg: &RecognizerConfig) -> Features {
    let bounds = Bounds::from_points(raw);
    let center = centroid(raw);
    let is_closed = is_closed(raw, cfg.closure_threshold);
    let aspect_ratio = bounds.width.max(1.0) / bounds.height.max(1.0);
    let circularity = circularity(raw, center);
    let corners = detect_corners(simplified, cfg.corner_look_ahead, cfg.corner_angle_deg);
    let corners_raw = detect_corners(raw, cfg.corner_look_ahead, cfg.corner_angle_deg);
    Features {
        bounds,
        centroid: center,
        is_closed,
        aspect_ratio,
        circularity,
        corners,
        corners_raw,
    }
}

/// Whether the first and last points are within `threshold` of each other.
///
/// Strokes of fewer than three points can never be closed.
#[must_use]
pub fn is_closed(points: &[Point], threshold: f64) -> bool {
    if points.len() < 3 {
        return false;
    }
    points[0].dist(points[points.len() - 1]) < threshold
}

/// Radial-variance circularity: `max(0, 1 − var(radii) / mean(radii)²)`.
///
/// Approaches 1 for points on a circle; lands around 0.3–0.7 for a line,
/// depending on how the samples are distributed. Only the lower bound is
/// hard-clamped. Degenerate strokes (all points on the centroid) score 0.
#[must_use]
pub fn circularity(points: &[Point], center: Point) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = points.len() as f64;
    let radii: Vec<f64> = points.iter().map(|pt| pt.dist(center)).collect();
    let mean = radii.iter().sum::<f64>() / n;
    if mean <= f64::EPSILON {
        return 0.0;
    }
    let variance = radii.iter().map(|r| (r - mean) * (r - mean)).sum::<f64>() / n;
    (1.0 - variance / (mean * mean)).max(0.0)
}

/// Slide a window of half-width `look_ahead` over the sequence and record a
/// corner wherever the angle between the vector to the point `look_ahead`
/// behind and the vector to the point `look_ahead` ahead drops below
/// `angle_threshold_deg`.
///
/// The first and last `look_ahead` points are excluded (the window would
/// run off the ends). Corners within `2 × look_ahead` indices of an already
/// recorded corner are merged into it — the earlier detection wins.
#[must_use]
pub fn detect_corners(points: &[Point], look_ahead: usize, angle_threshold_deg: f64) -> Vec<Corner> {
    let mut corners: Vec<Corner> = Vec::new();
    if look_ahead == 0 || points.len() < 2 * look_ahead + 1 {
        return corners;
    }
    for i in look_ahead..points.len() - look_ahead {
        let angle = angle_at(points, i, look_ahead);
        if angle >= angle_threshold_deg {
            continue;
        }
        let duplicate = corners
            .last()
            .is_some_and(|prev| i - prev.index < 2 * look_ahead);
        if !duplicate {
            corners.push(Corner { index: i, point: points[i], angle });
        }
    }
    corners
}

/// Angle in degrees at `points[i]` between the vectors toward the points
/// `look_ahead` indices behind and ahead. A straight run reads 180°.
fn angle_at(points: &[Point], i: usize, look_ahead: usize) -> f64 {
    let center = points[i];
    let prev = points[i - look_ahead];
    let next = points[i + look_ahead];
    let v1 = (prev.x - center.x, prev.y - center.y);
    let v2 = (next.x - center.x, next.y - center.y);
    let len1 = v1.0.hypot(v1.1);
    let len2 = v2.0.hypot(v2.1);
    if len1 == 0.0 || len2 == 0.0 {
        // Coincident samples carry no direction; treat as straight.
        return 180.0;
    }
    let cos = ((v1.0 * v2.0 + v1.1 * v2.1) / (len1 * len2)).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}
