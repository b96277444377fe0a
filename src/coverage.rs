//! Template-overlap classifier: scores candidate shapes by rasterized
//! Jaccard (intersection-over-union) coverage instead of rule cascades.
//!
//! The stroke is first tested against a pure line model; everything else
//! applies only to closed strokes. Candidate templates (circle, rectangle,
//! triangle) are synthesized from the stroke's bounding box and centroid,
//! then both the user polygon and each template are sampled over a shared
//! grid whose cell size adapts to the stroke's size. The highest-scoring
//! candidate that clears its per-shape minimum wins; ties go to the earlier
//! candidate in circle → rectangle → triangle order.

#[cfg(test)]
#[path = "coverage_test.rs"]
mod coverage_test;

use tracing::debug;

use crate::classify::Classifier;
use crate::config::RecognizerConfig;
use crate::features::Features;
use crate::point::{Bounds, Point, perpendicular_distance};
use crate::shape::ShapeDescriptor;

/// Jaccard-overlap classifier.
pub struct CoverageClassifier;

/// A synthesized candidate shape, sized from the stroke's bounds and centroid.
#[derive(Debug, Clone)]
pub enum Template {
    /// Circle with radius the mean of the bounds' half-width and half-height.
    Circle { center: Point, radius: f64 },
    /// Axis-aligned rectangle matching the bounds exactly.
    Rect { bounds: Bounds },
    /// Equilateral triangle, apex up, vertices spaced at 120°.
    Triangle { vertices: [Point; 3] },
}

impl Template {
    /// Membership test: closed-form for circle and rectangle, ray casting
    /// against the synthesized vertices for the triangle.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        match self {
            Self::Circle { center, radius } => pt.dist(*center) <= *radius,
            Self::Rect { bounds } => bounds.contains(pt),
            Self::Triangle { vertices } => point_in_polygon(pt, vertices),
        }
    }
}

impl Classifier for CoverageClassifier {
    fn classify(
        &self,
        simplified: &[Point],
        features: &Features,
        cfg: &RecognizerConfig,
    ) -> Option<ShapeDescriptor> {
        if simplified.is_empty() {
            return None;
        }

        // A stroke hugging its own first-to-last chord is a line; skip the
        // overlap machinery entirely.
        if mean_chord_distance(simplified) < cfg.coverage_line_distance {
            let first = simplified[0];
            let last = simplified[simplified.len() - 1];
            return Some(ShapeDescriptor::Line { x1: first.x, y1: first.y, x2: last.x, y2: last.y });
        }

        if !features.is_closed {
            return None;
        }

        let center = features.centroid;
        let bounds = features.bounds;
        let circle_radius = (bounds.width / 2.0 + bounds.height / 2.0) / 2.0;
        let triangle_radius = bounds.max_dim() / 2.0;
        let triangle_vertices = triangle_vertices(center, triangle_radius);

        let candidates: [(Template, f64); 3] = [
            (Template::Circle { center, radius: circle_radius }, cfg.coverage_circle_min),
            (Template::Rect { bounds }, cfg.coverage_rect_min),
            (Template::Triangle { vertices: triangle_vertices }, cfg.coverage_triangle_min),
        ];

        let mut best: Option<(usize, f64)> = None;
        for (i, (template, min_score)) in candidates.iter().enumerate() {
            let score = calculate_overlap(simplified, template, bounds, cfg);
            debug!(candidate = i, score, min = min_score, "coverage candidate scored");
            if score < *min_score {
                continue;
            }
            // Strict comparison keeps earlier candidates on ties.
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((i, score));
            }
        }

        let (winner, _) = best?;
        Some(match winner {
            0 => ShapeDescriptor::Ellipse {
                cx: center.x,
                cy: center.y,
                rx: circle_radius,
                ry: circle_radius,
            },
            1 => ShapeDescriptor::Rect {
                x: bounds.x,
                y: bounds.y,
                width: bounds.width,
                height: bounds.height,
            },
            _ => ShapeDescriptor::Polygon {
                cx: center.x,
                cy: center.y,
                inner_radius: triangle_radius,
                outer_radius: triangle_radius,
                sides: 3,
            },
        })
    }
}

/// Mean perpendicular distance of every point to the line through the first
/// and last points.
#[must_use]
pub fn mean_chord_distance(points: &[Point]) -> f64 {
    if points.is_empty() {
        return 0.0;
    }
    let first = points[0];
    let last = points[points.len() - 1];
    let total: f64 = points
        .iter()
        .map(|pt| perpendicular_distance(*pt, first, last))
        .sum();
    #[allow(clippy::cast_precision_loss)]
    let n = points.len() as f64;
    total / n
}

/// Equilateral triangle vertices around `center`, apex up.
#[must_use]
pub fn triangle_vertices(center: Point, radius: f64) -> [Point; 3] {
    let mut vertices = [Point::new(0.0, 0.0); 3];
    for (i, vertex) in vertices.iter_mut().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let angle = (-90.0 + 120.0 * i as f64).to_radians();
        *vertex = Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin());
    }
    vertices
}

/// Jaccard overlap between the polygon formed by the user's points and a
/// template, sampled at the centers of a grid covering the stroke bounds
/// plus padding.
///
/// The cell size scales with the stroke (coarser for large strokes, finer
/// for small) and never drops below the configured floor. Returns 0 when
/// the union is empty; the result is always within `[0, 1]`.
#[must_use]
pub fn calculate_overlap(
    user_points: &[Point],
    template: &Template,
    bounds: Bounds,
    cfg: &RecognizerConfig,
) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let target_cells = cfg.coverage_grid_cells as f64;
    let cell = (bounds.max_dim() / target_cells).max(cfg.coverage_cell_min);
    let region = bounds.expanded(cfg.coverage_grid_padding);

    let mut both = 0u64;
    let mut user_only = 0u64;
    let mut template_only = 0u64;

    let mut y = region.y + cell / 2.0;
    while y < region.y + region.height {
        let mut x = region.x + cell / 2.0;
        while x < region.x + region.width {
            let pt = Point::new(x, y);
            let in_user = point_in_polygon(pt, user_points);
            let in_template = template.contains(pt);
            match (in_user, in_template) {
                (true, true) => both += 1,
                (true, false) => user_only += 1,
                (false, true) => template_only += 1,
                (false, false) => {}
            }
            x += cell;
        }
        y += cell;
    }

    let union = both + user_only + template_only;
    if union == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let score = both as f64 / union as f64;
    score
}

/// Even-odd ray-casting point-in-polygon test.
///
/// Casts a ray in +x and counts edge crossings. Handles concave polygons;
/// horizontal edges contribute no crossings because their endpoints sit on
/// the same side of the ray. The polygon closes itself from the last vertex
/// back to the first.
#[must_use]
pub fn point_in_polygon(pt: Point, vertices: &[Point]) -> bool {
    if vertices.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = vertices.len() - 1;
    for i in 0..vertices.len() {
        let a = vertices[i];
        let b = vertices[j];
        if (a.y > pt.y) != (b.y > pt.y) {
            let x_cross = (b.x - a.x) * (pt.y - a.y) / (b.y - a.y) + a.x;
            if pt.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}
