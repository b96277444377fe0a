//! Tuning configuration for the recognition pipeline.
//!
//! Every empirically-derived threshold lives in one [`RecognizerConfig`]
//! passed by reference through the pipeline, so tests can run stricter or
//! looser profiles without touching global state. The config is read-only
//! during a recognition pass and is the only state that outlives a stroke.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts;

/// Which classifier runs the recognition pass.
///
/// Exactly one strategy is active per pass; the choice is configuration,
/// never deduced from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Ordered rule cascade over the feature bundle.
    #[default]
    Threshold,
    /// Jaccard overlap scoring against synthesized template shapes.
    Coverage,
}

/// Error returned by [`RecognizerConfig::validate`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `min_points` must be at least 2 so a line can always be formed.
    #[error("min_points must be at least 2, got {0}")]
    MinPoints(usize),
    /// A duration or tolerance field that must be strictly positive was not.
    #[error("{field} must be positive, got {value}")]
    NonPositive {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// A score threshold fell outside the unit interval.
    #[error("{field} must be within [0, 1], got {value}")]
    OutOfUnitRange {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The rasterization grid must have at least one cell per axis.
    #[error("coverage_grid_cells must be at least 1")]
    ZeroGridCells,
}

/// Process-wide tuning constants for one recognizer instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognizerConfig {
    /// Active classifier strategy.
    pub strategy: Strategy,

    // Capture.
    /// Minimum gap between accepted samples, in milliseconds.
    pub capture_interval_ms: f64,
    /// Debounce between stroke end and the recognition pass, in milliseconds.
    pub recognition_delay_ms: f64,
    /// Strokes shorter than this are discarded without a recognition attempt.
    pub min_points: usize,

    // Simplification.
    /// Ramer–Douglas–Peucker tolerance in world units.
    pub simplify_tolerance: f64,

    // Feature extraction.
    /// First-to-last distance below which a stroke counts as closed.
    pub closure_threshold: f64,
    /// Half-width of the corner-detection window, in sample indices.
    pub corner_look_ahead: usize,
    /// Corner angle threshold in degrees.
    pub corner_angle_deg: f64,

    // Threshold classifier.
    /// Open strokes below this circularity read as lines.
    pub line_circularity_max: f64,
    /// Aspect ratios beyond this (or its reciprocal) read as lines.
    pub line_aspect_extreme: f64,
    /// Minimum circularity for the circle rule.
    pub circle_circularity_min: f64,
    /// Lower edge of the circle rule's aspect band.
    pub circle_aspect_min: f64,
    /// Upper edge of the circle rule's aspect band.
    pub circle_aspect_max: f64,
    /// The circle rule rejects strokes with this many corners or more.
    pub circle_corners_max: usize,
    /// Inclusive raw-corner range for the rectangle rule.
    pub rect_corners_min: usize,
    /// Inclusive raw-corner range for the rectangle rule.
    pub rect_corners_max: usize,
    /// Lower edge of the rectangle rule's aspect band.
    pub rect_aspect_min: f64,
    /// Upper edge of the rectangle rule's aspect band.
    pub rect_aspect_max: f64,
    /// Circularity guard applied when exactly two corners were detected.
    pub rect_two_corner_circularity_max: f64,
    /// Inclusive corner range for the triangle rule.
    pub triangle_corners_min: usize,
    /// Inclusive corner range for the triangle rule.
    pub triangle_corners_max: usize,
    /// Circularity ceiling for the triangle rule.
    pub triangle_circularity_max: f64,

    // Coverage classifier.
    /// Mean chord distance below which the stroke short-circuits to a line.
    pub coverage_line_distance: f64,
    /// Padding around the stroke bounds before rasterization.
    pub coverage_grid_padding: f64,
    /// Target cell count along the larger bounds dimension.
    pub coverage_grid_cells: usize,
    /// Floor on the rasterization cell size.
    pub coverage_cell_min: f64,
    /// Minimum Jaccard overlap for the circle template.
    pub coverage_circle_min: f64,
    /// Minimum Jaccard overlap for the rectangle template.
    pub coverage_rect_min: f64,
    /// Minimum Jaccard overlap for the triangle template.
    pub coverage_triangle_min: f64,

    // Emitted style.
    /// Stroke color applied to emitted shapes.
    pub default_stroke: String,
    /// Fill color applied to emitted shapes.
    pub default_fill: String,
    /// Stroke width applied to emitted shapes.
    pub default_stroke_width: f64,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            capture_interval_ms: consts::CAPTURE_INTERVAL_MS,
            recognition_delay_ms: consts::RECOGNITION_DELAY_MS,
            min_points: consts::MIN_POINTS,
            simplify_tolerance: consts::SIMPLIFY_TOLERANCE,
            closure_threshold: consts::CLOSURE_THRESHOLD,
            corner_look_ahead: consts::CORNER_LOOK_AHEAD,
            corner_angle_deg: consts::CORNER_ANGLE_DEG,
            line_circularity_max: consts::LINE_CIRCULARITY_MAX,
            line_aspect_extreme: consts::LINE_ASPECT_EXTREME,
            circle_circularity_min: consts::CIRCLE_CIRCULARITY_MIN,
            circle_aspect_min: consts::CIRCLE_ASPECT_MIN,
            circle_aspect_max: consts::CIRCLE_ASPECT_MAX,
            circle_corners_max: consts::CIRCLE_CORNERS_MAX,
            rect_corners_min: consts::RECT_CORNERS_MIN,
            rect_corners_max: consts::RECT_CORNERS_MAX,
            rect_aspect_min: consts::RECT_ASPECT_MIN,
            rect_aspect_max: consts::RECT_ASPECT_MAX,
            rect_two_corner_circularity_max: consts::RECT_TWO_CORNER_CIRCULARITY_MAX,
            triangle_corners_min: consts::TRIANGLE_CORNERS_MIN,
            triangle_corners_max: consts::TRIANGLE_CORNERS_MAX,
            triangle_circularity_max: consts::TRIANGLE_CIRCULARITY_MAX,
            coverage_line_distance: consts::COVERAGE_LINE_DISTANCE,
            coverage_grid_padding: consts::COVERAGE_GRID_PADDING,
            coverage_grid_cells: consts::COVERAGE_GRID_CELLS,
            coverage_cell_min: consts::COVERAGE_CELL_MIN,
            coverage_circle_min: consts::COVERAGE_CIRCLE_MIN,
            coverage_rect_min: consts::COVERAGE_RECT_MIN,
            coverage_triangle_min: consts::COVERAGE_TRIANGLE_MIN,
            default_stroke: consts::DEFAULT_STROKE.to_string(),
            default_fill: consts::DEFAULT_FILL.to_string(),
            default_stroke_width: consts::DEFAULT_STROKE_WIDTH,
        }
    }
}

impl RecognizerConfig {
    /// Reject configs the pipeline cannot run safely with.
    ///
    /// Called once by [`crate::engine::Recognizer::new`]; recognition itself
    /// never fails, so this is the crate's only fallible surface.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_points < 2 {
            return Err(ConfigError::MinPoints(self.min_points));
        }
        for (field, value) in [
            ("capture_interval_ms", self.capture_interval_ms),
            ("recognition_delay_ms", self.recognition_delay_ms),
            ("simplify_tolerance", self.simplify_tolerance),
            ("closure_threshold", self.closure_threshold),
            ("corner_angle_deg", self.corner_angle_deg),
            ("coverage_cell_min", self.coverage_cell_min),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        for (field, value) in [
            ("line_circularity_max", self.line_circularity_max),
            ("circle_circularity_min", self.circle_circularity_min),
            ("rect_two_corner_circularity_max", self.rect_two_corner_circularity_max),
            ("triangle_circularity_max", self.triangle_circularity_max),
            ("coverage_circle_min", self.coverage_circle_min),
            ("coverage_rect_min", self.coverage_rect_min),
            ("coverage_triangle_min", self.coverage_triangle_min),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::OutOfUnitRange { field, value });
            }
        }
        if self.coverage_grid_cells == 0 {
            return Err(ConfigError::ZeroGridCells);
        }
        Ok(())
    }
}
