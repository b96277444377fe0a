//! Default tuning constants for the recognition pipeline.
//!
//! These feed [`crate::config::RecognizerConfig::default`]; tests construct
//! alternate configs rather than mutating anything here. Thresholds were
//! tuned against hand-collected stroke samples, so most of them are soft.

// ── Capture ─────────────────────────────────────────────────────

/// Minimum gap between accepted samples during capture, in milliseconds (~60 Hz).
pub const CAPTURE_INTERVAL_MS: f64 = 16.0;

/// Debounce between stroke end and the recognition pass, in milliseconds.
pub const RECOGNITION_DELAY_MS: f64 = 350.0;

/// Strokes with fewer buffered samples than this are discarded at `end`.
pub const MIN_POINTS: usize = 5;

// ── Simplification ──────────────────────────────────────────────

/// Ramer–Douglas–Peucker tolerance in world units.
pub const SIMPLIFY_TOLERANCE: f64 = 8.0;

// ── Feature extraction ──────────────────────────────────────────

/// First-to-last distance below which a stroke counts as closed, in world units.
pub const CLOSURE_THRESHOLD: f64 = 20.0;

/// Half-width of the corner-detection window, in sample indices.
pub const CORNER_LOOK_AHEAD: usize = 2;

/// Angles below this (degrees) between the look-behind and look-ahead
/// vectors mark a corner.
pub const CORNER_ANGLE_DEG: f64 = 130.0;

// ── Threshold classifier ────────────────────────────────────────

/// Open strokes below this circularity read as lines.
pub const LINE_CIRCULARITY_MAX: f64 = 0.75;

/// Aspect ratios beyond this (or its reciprocal) read as lines.
pub const LINE_ASPECT_EXTREME: f64 = 4.0;

/// Minimum circularity for the circle rule.
pub const CIRCLE_CIRCULARITY_MIN: f64 = 0.93;

/// Aspect-ratio band around 1.0 accepted by the circle rule.
pub const CIRCLE_ASPECT_MIN: f64 = 0.85;
pub const CIRCLE_ASPECT_MAX: f64 = 1.15;

/// The circle rule rejects strokes with this many corners or more.
pub const CIRCLE_CORNERS_MAX: usize = 3;

/// Raw-corner count range for the rectangle rule. Rough free-hand corners
/// under-detect, hence the permissive lower bound.
pub const RECT_CORNERS_MIN: usize = 2;
pub const RECT_CORNERS_MAX: usize = 6;

/// Aspect-ratio band accepted by the rectangle rule.
pub const RECT_ASPECT_MIN: f64 = 0.25;
pub const RECT_ASPECT_MAX: f64 = 4.0;

/// With exactly two detected corners, circularity must fall below this for
/// the rectangle rule — near-circular strokes often read two spurious corners.
pub const RECT_TWO_CORNER_CIRCULARITY_MAX: f64 = 0.90;

/// Corner count range for the triangle rule.
pub const TRIANGLE_CORNERS_MIN: usize = 2;
pub const TRIANGLE_CORNERS_MAX: usize = 5;

/// Circularity ceiling for the triangle rule; excludes near-perfect circles.
pub const TRIANGLE_CIRCULARITY_MAX: f64 = 0.94;

// ── Coverage classifier ─────────────────────────────────────────

/// Mean perpendicular distance to the first→last chord below which the
/// stroke is emitted as a line without any template scoring.
pub const COVERAGE_LINE_DISTANCE: f64 = 5.0;

/// Padding added around the stroke bounds before rasterization, in world units.
pub const COVERAGE_GRID_PADDING: f64 = 10.0;

/// Target cell count along the larger bounds dimension.
pub const COVERAGE_GRID_CELLS: usize = 32;

/// Floor on the rasterization cell size, in world units.
pub const COVERAGE_CELL_MIN: f64 = 2.0;

/// Minimum Jaccard overlap per template. Triangle is stricter because its
/// template discriminates less cleanly against rough closed strokes.
pub const COVERAGE_CIRCLE_MIN: f64 = 0.65;
pub const COVERAGE_RECT_MIN: f64 = 0.65;
pub const COVERAGE_TRIANGLE_MIN: f64 = 0.70;

// ── Emitted style ───────────────────────────────────────────────

/// Default stroke color for emitted shapes.
pub const DEFAULT_STROKE: &str = "#1F1A17";

/// Default fill color for emitted shapes.
pub const DEFAULT_FILL: &str = "#D94B4B";

/// Default stroke width in world units.
pub const DEFAULT_STROKE_WIDTH: f64 = 1.0;
