//! Recognized shape descriptors and the objects handed to the board store.
//!
//! `ShapeDescriptor` is a closed sum type: exactly five outcomes exist and
//! none is extended at runtime. `Polyline` is the universal fallback and can
//! always be constructed from a non-empty buffer, so recognition never
//! produces "no shape" once a stroke survives the minimum point count.

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::RecognizerConfig;
use crate::point::Point;

/// Idealized geometry produced by one recognition pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ShapeDescriptor {
    /// Straight segment between the stroke's endpoints.
    Line { x1: f64, y1: f64, x2: f64, y2: f64 },
    /// Ellipse centered at `(cx, cy)`. Recognized circles emit `rx == ry`.
    Ellipse { cx: f64, cy: f64, rx: f64, ry: f64 },
    /// Axis-aligned rectangle matching the stroke's bounding box.
    Rect { x: f64, y: f64, width: f64, height: f64 },
    /// Regular N-gon (or star, when the radii differ) centered at `(cx, cy)`.
    Polygon {
        cx: f64,
        cy: f64,
        /// Radius of the inner vertex ring; equals `outer_radius` for convex polygons.
        inner_radius: f64,
        /// Radius of the outer vertex ring.
        outer_radius: f64,
        /// Number of outer vertices.
        sides: u32,
    },
    /// Freeform fallback carrying the simplified stroke points.
    Polyline { points: Vec<Point> },
}

/// A recognized shape as delivered to the external board store, with the
/// configured default styling applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeObject {
    /// Unique identifier assigned at emission.
    pub id: Uuid,
    /// The recognized geometry.
    pub descriptor: ShapeDescriptor,
    /// Stroke color as a CSS color string.
    pub stroke: String,
    /// Fill color as a CSS color string.
    pub fill: String,
    /// Stroke width in world units.
    pub stroke_width: f64,
}

/// Wrap a classification result in a styled, store-ready object.
///
/// This performs no geometry and cannot fail; any upstream failure to
/// classify has already degraded to [`ShapeDescriptor::Polyline`].
#[must_use]
pub fn emit(descriptor: ShapeDescriptor, cfg: &RecognizerConfig) -> ShapeObject {
    ShapeObject {
        id: Uuid::new_v4(),
        descriptor,
        stroke: cfg.default_stroke.clone(),
        fill: cfg.default_fill.clone(),
        stroke_width: cfg.default_stroke_width,
    }
}
