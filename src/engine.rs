//! Top-level recognizer: pipeline glue between the sampler and the host.
//!
//! The host wires pointer events into [`Recognizer`] and processes the
//! returned [`Action`]s — committing emitted shapes to the board store,
//! rendering the pending affordance, and polling from its frame loop so the
//! recognition debounce can fire. The pipeline itself (simplify → analyze →
//! classify → emit) is a synchronous pure computation with no I/O.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use tracing::debug;

use crate::classify::classifier_for;
use crate::config::{ConfigError, RecognizerConfig};
use crate::features::analyze;
use crate::point::Point;
use crate::sampler::{EndOutcome, StrokeSampler};
use crate::shape::{ShapeDescriptor, ShapeObject, emit};
use crate::simplify::simplify;

/// Host-visible outcome of a recognizer call.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Nothing to report.
    None,
    /// The stroke had too few samples and was dropped without output.
    StrokeDiscarded,
    /// The stroke ended; recognition fires at the given host timestamp.
    /// Render the pending affordance until then.
    RecognitionPending {
        /// Deadline in host milliseconds.
        fire_at_ms: f64,
    },
    /// The recognition pass completed. Deliver the shape to the board store.
    /// Emitted exactly once per recognized stroke.
    ShapeCommitted(ShapeObject),
}

/// The freehand recognition engine: one live stroke buffer plus read-only
/// tuning configuration.
pub struct Recognizer {
    config: RecognizerConfig,
    sampler: StrokeSampler,
}

impl Recognizer {
    /// Build a recognizer from a validated config.
    ///
    /// This is the crate's only fallible call; recognition itself always
    /// degrades gracefully.
    pub fn new(config: RecognizerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let sampler = StrokeSampler::new(
            config.capture_interval_ms,
            config.recognition_delay_ms,
            config.min_points,
        );
        Ok(Self { config, sampler })
    }

    // --- Pointer events ---

    /// Start capturing a new stroke. Any prior stroke state is cleared.
    pub fn begin_stroke(&mut self, pt: Point, now_ms: f64) {
        self.sampler.begin(pt, now_ms);
    }

    /// Feed a mid-stroke sample. Throttled; returns whether it was accepted.
    pub fn add_sample(&mut self, pt: Point, now_ms: f64) -> bool {
        self.sampler.add(pt, now_ms)
    }

    /// Finish the stroke. Either discards it or arms the recognition timer.
    pub fn end_stroke(&mut self, pt: Point, now_ms: f64) -> Action {
        match self.sampler.end(pt, now_ms) {
            EndOutcome::Discarded => Action::StrokeDiscarded,
            EndOutcome::Pending { fire_at_ms } => Action::RecognitionPending { fire_at_ms },
        }
    }

    /// Abandon the current stroke (tool switch, escape). Idempotent; safe at
    /// any point before the recognition timer fires.
    pub fn cancel(&mut self) {
        self.sampler.cancel();
    }

    /// Run the recognition pass if the debounce deadline has passed.
    ///
    /// Consumes the pending buffer, so a stroke is classified and committed
    /// exactly once.
    pub fn poll(&mut self, now_ms: f64) -> Action {
        let Some(points) = self.sampler.take_if_due(now_ms) else {
            return Action::None;
        };
        let descriptor = recognize(&points, &self.config);
        Action::ShapeCommitted(emit(descriptor, &self.config))
    }

    // --- Queries ---

    /// The live stroke buffer, for host preview rendering.
    #[must_use]
    pub fn preview(&self) -> &[Point] {
        self.sampler.points()
    }

    /// The active tuning configuration.
    #[must_use]
    pub fn config(&self) -> &RecognizerConfig {
        &self.config
    }
}

/// The pure recognition pipeline over a finished buffer: simplify, extract
/// features, run the configured classifier, and fall back to a polyline of
/// the simplified points when nothing claims the stroke.
#[must_use]
pub fn recognize(points: &[Point], cfg: &RecognizerConfig) -> ShapeDescriptor {
    let simplified = simplify(points, cfg.simplify_tolerance);
    let features = analyze(points, &simplified, cfg);
    let classifier = classifier_for(cfg.strategy);
    match classifier.classify(&simplified, &features, cfg) {
        Some(shape) => shape,
        None => {
            debug!(points = simplified.len(), "no classifier match, falling back to polyline");
            ShapeDescriptor::Polyline { points: simplified }
        }
    }
}
