//! Per-stroke capture: buffering, throttling, and the recognition debounce.
//!
//! The sampler owns the only mutable state in the pipeline. It is driven
//! entirely by host-supplied millisecond timestamps — there is no internal
//! clock and no timer thread. `end` arms a deadline; the host polls
//! [`StrokeSampler::take_if_due`] (typically from its frame loop) and runs
//! the recognition pass when the buffer is released.

#[cfg(test)]
#[path = "sampler_test.rs"]
mod sampler_test;

use tracing::debug;

use crate::point::Point;

/// Capture phase for one stroke.
///
/// Each variant carries the context needed to decide what the next pointer
/// event or poll does, in the manner of an input gesture state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SamplerState {
    /// No stroke in progress; waiting for `begin`.
    Idle,
    /// Between `begin` and `end`; samples are being buffered.
    Capturing {
        /// Timestamp of the last accepted sample, for throttling.
        last_accepted_ms: f64,
    },
    /// Stroke finished; recognition fires once the deadline passes.
    Pending {
        /// Host timestamp at which the buffered stroke is released.
        fire_at_ms: f64,
    },
}

/// Outcome of [`StrokeSampler::end`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EndOutcome {
    /// The buffer was too short; it has been discarded with no output.
    Discarded,
    /// Recognition is armed; the buffer releases at `fire_at_ms`.
    Pending {
        /// Deadline in host milliseconds.
        fire_at_ms: f64,
    },
}

/// Buffers pointer samples for the lifetime of one stroke.
#[derive(Debug)]
pub struct StrokeSampler {
    buffer: Vec<Point>,
    state: SamplerState,
    capture_interval_ms: f64,
    recognition_delay_ms: f64,
    min_points: usize,
}

impl StrokeSampler {
    #[must_use]
    pub fn new(capture_interval_ms: f64, recognition_delay_ms: f64, min_points: usize) -> Self {
        Self {
            buffer: Vec::new(),
            state: SamplerState::Idle,
            capture_interval_ms,
            recognition_delay_ms,
            min_points,
        }
    }

    /// Start a new stroke, clearing any prior buffer or pending deadline.
    pub fn begin(&mut self, pt: Point, now_ms: f64) {
        self.buffer.clear();
        self.buffer.push(pt);
        self.state = SamplerState::Capturing { last_accepted_ms: now_ms };
    }

    /// Append a sample if the capture interval has elapsed.
    ///
    /// Out-of-interval calls (and calls outside a capture) are no-ops, not
    /// errors. Returns whether the sample was accepted.
    pub fn add(&mut self, pt: Point, now_ms: f64) -> bool {
        let SamplerState::Capturing { last_accepted_ms } = self.state else {
            return false;
        };
        if now_ms - last_accepted_ms < self.capture_interval_ms {
            return false;
        }
        self.buffer.push(pt);
        self.state = SamplerState::Capturing { last_accepted_ms: now_ms };
        true
    }

    /// Finish the stroke with its final sample.
    ///
    /// The final sample is always appended, bypassing the throttle. A buffer
    /// shorter than the minimum point count is discarded outright; otherwise
    /// the recognition debounce is armed. Outside a capture (idle, or a
    /// duplicate pointer-up while a stroke is already pending) this is a
    /// no-op discard.
    pub fn end(&mut self, pt: Point, now_ms: f64) -> EndOutcome {
        if !matches!(self.state, SamplerState::Capturing { .. }) {
            return EndOutcome::Discarded;
        }
        self.buffer.push(pt);
        if self.buffer.len() < self.min_points {
            debug!(points = self.buffer.len(), min = self.min_points, "stroke discarded: too few samples");
            self.reset();
            return EndOutcome::Discarded;
        }
        let fire_at_ms = now_ms + self.recognition_delay_ms;
        self.state = SamplerState::Pending { fire_at_ms };
        EndOutcome::Pending { fire_at_ms }
    }

    /// Discard the stroke and disarm any pending deadline. Idempotent.
    pub fn cancel(&mut self) {
        self.reset();
    }

    /// Release the buffered stroke if the recognition deadline has passed.
    ///
    /// Consumes the buffer, so the pipeline runs exactly once per stroke.
    pub fn take_if_due(&mut self, now_ms: f64) -> Option<Vec<Point>> {
        let SamplerState::Pending { fire_at_ms } = self.state else {
            return None;
        };
        if now_ms < fire_at_ms {
            return None;
        }
        self.state = SamplerState::Idle;
        Some(std::mem::take(&mut self.buffer))
    }

    /// The live buffer, for host preview rendering.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.buffer
    }

    /// Current capture phase.
    #[must_use]
    pub fn state(&self) -> SamplerState {
        self.state
    }

    fn reset(&mut self) {
        self.buffer.clear();
        self.state = SamplerState::Idle;
    }
}
