//! Rule-cascade classifier: an ordered sequence of pure predicates over the
//! feature bundle.
//!
//! The first matching rule wins and later rules are never evaluated. The
//! ordering is load-bearing: circle, rectangle, and triangle overlap heavily
//! in corner count once hand-drawn noise is considered, so near-round
//! strokes must be claimed by the circle rule before any corner-based rule
//! sees them, and the rectangle rule carries an extra circularity guard for
//! the two-corner case where circles occasionally leak through. Reordering
//! the cascade changes results for ambiguous strokes; that is configuration,
//! not a bug.

#[cfg(test)]
#[path = "threshold_test.rs"]
mod threshold_test;

use tracing::debug;

use crate::classify::Classifier;
use crate::config::RecognizerConfig;
use crate::features::Features;
use crate::point::Point;
use crate::shape::ShapeDescriptor;

/// Ordered threshold cascade over the feature bundle.
pub struct ThresholdClassifier;

impl Classifier for ThresholdClassifier {
    fn classify(
        &self,
        simplified: &[Point],
        features: &Features,
        cfg: &RecognizerConfig,
    ) -> Option<ShapeDescriptor> {
        if simplified.is_empty() {
            return None;
        }
        let rules: [(&str, fn(&[Point], &Features, &RecognizerConfig) -> Option<ShapeDescriptor>); 4] = [
            ("line", match_line),
            ("circle", match_circle),
            ("rectangle", match_rect),
            ("triangle", match_triangle),
        ];
        for (name, rule) in rules {
            if let Some(shape) = rule(simplified, features, cfg) {
                debug!(rule = name, "threshold cascade matched");
                return Some(shape);
            }
        }
        None
    }
}

/// Open stroke with low circularity or an extreme aspect ratio, or a stroke
/// already reduced to its two endpoints.
fn match_line(points: &[Point], features: &Features, cfg: &RecognizerConfig) -> Option<ShapeDescriptor> {
    let extreme_aspect = features.aspect_ratio > cfg.line_aspect_extreme
        || features.aspect_ratio < 1.0 / cfg.line_aspect_extreme;
    let open_and_thin =
        !features.is_closed && (features.circularity < cfg.line_circularity_max || extreme_aspect);
    if !open_and_thin && points.len() != 2 {
        return None;
    }
    let first = points[0];
    let last = points[points.len() - 1];
    Some(ShapeDescriptor::Line { x1: first.x, y1: first.y, x2: last.x, y2: last.y })
}

/// Closed, highly circular stroke with nearly square bounds and almost no
/// corners. Emits a circle (equal radii) at the centroid with radius the
/// mean distance from the centroid to the points.
fn match_circle(points: &[Point], features: &Features, cfg: &RecognizerConfig) -> Option<ShapeDescriptor> {
    if !features.is_closed
        || features.circularity < cfg.circle_circularity_min
        || features.preferred_corner_count() >= cfg.circle_corners_max
        || features.aspect_ratio < cfg.circle_aspect_min
        || features.aspect_ratio > cfg.circle_aspect_max
    {
        return None;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = points.len() as f64;
    let radius = points.iter().map(|pt| pt.dist(features.centroid)).sum::<f64>() / n;
    Some(ShapeDescriptor::Ellipse {
        cx: features.centroid.x,
        cy: features.centroid.y,
        rx: radius,
        ry: radius,
    })
}

/// Closed stroke whose raw-point corner count lands in the permissive
/// rectangle range with an unexceptional aspect ratio. Emits the stroke's
/// bounding box.
fn match_rect(_points: &[Point], features: &Features, cfg: &RecognizerConfig) -> Option<ShapeDescriptor> {
    let corners = features.corners_raw.len();
    if !features.is_closed
        || corners < cfg.rect_corners_min
        || corners > cfg.rect_corners_max
        || features.aspect_ratio < cfg.rect_aspect_min
        || features.aspect_ratio > cfg.rect_aspect_max
    {
        return None;
    }
    // Two detected corners is also what a slightly dented circle reads as.
    if corners == 2 && features.circularity >= cfg.rect_two_corner_circularity_max {
        return None;
    }
    let b = features.bounds;
    Some(ShapeDescriptor::Rect { x: b.x, y: b.y, width: b.width, height: b.height })
}

/// Closed stroke with a small corner count that is not a near-perfect
/// circle. Emits a 3-sided regular polygon at the centroid, sized by the
/// farthest point.
fn match_triangle(points: &[Point], features: &Features, cfg: &RecognizerConfig) -> Option<ShapeDescriptor> {
    let corners = features.preferred_corner_count();
    if !features.is_closed
        || corners < cfg.triangle_corners_min
        || corners > cfg.triangle_corners_max
        || features.circularity >= cfg.triangle_circularity_max
    {
        return None;
    }
    let radius = points
        .iter()
        .map(|pt| pt.dist(features.centroid))
        .fold(0.0, f64::max);
    Some(ShapeDescriptor::Polygon {
        cx: features.centroid.x,
        cy: features.centroid.y,
        inner_radius: radius,
        outer_radius: radius,
        sides: 3,
    })
}
