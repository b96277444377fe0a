//! Classifier trait and strategy selection.
//!
//! Both classifiers consume the same inputs — the simplified points and the
//! precomputed feature bundle — and either claim the stroke with a
//! [`ShapeDescriptor`] or decline with `None`, in which case the engine
//! falls back to a polyline. The active strategy is a configuration choice
//! made once per recognizer, never deduced from the stroke itself, which
//! keeps strategy branching out of the pipeline.

use crate::config::{RecognizerConfig, Strategy};
use crate::coverage::CoverageClassifier;
use crate::features::Features;
use crate::point::Point;
use crate::shape::ShapeDescriptor;
use crate::threshold::ThresholdClassifier;

/// A recognition strategy over the shared feature bundle.
pub trait Classifier {
    /// Attempt to classify the stroke. `None` means the caller should fall
    /// back to a polyline; it is not an error.
    fn classify(
        &self,
        simplified: &[Point],
        features: &Features,
        cfg: &RecognizerConfig,
    ) -> Option<ShapeDescriptor>;
}

/// The concrete classifier for a configured strategy.
///
/// Both implementations are stateless, so shared statics suffice.
#[must_use]
pub fn classifier_for(strategy: Strategy) -> &'static dyn Classifier {
    match strategy {
        Strategy::Threshold => &ThresholdClassifier,
        Strategy::Coverage => &CoverageClassifier,
    }
}
