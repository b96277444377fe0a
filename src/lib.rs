//! Freehand stroke recognition engine for the collaborative whiteboard.
//!
//! This crate turns a raw sequence of pointer samples into exactly one
//! idealized shape: a line, ellipse, rectangle, or triangle when the stroke
//! is confidently recognized, or a freeform polyline when it is not. The
//! host layer is responsible for wiring pointer events to the
//! [`engine::Recognizer`], rendering the live preview from the sampler
//! buffer, and persisting the resulting [`engine::Action`]s to the board
//! document store.
//!
//! The pipeline is synchronous and clock-free: the host passes millisecond
//! timestamps into the sampler, so capture throttling and the recognition
//! debounce are deterministic and testable without a runtime.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::Recognizer`] pipeline and host actions |
//! | [`sampler`] | Per-stroke capture buffer, throttle, and debounce |
//! | [`simplify`] | Ramer–Douglas–Peucker point reduction |
//! | [`features`] | Geometric feature extraction (closure, circularity, corners) |
//! | [`classify`] | Classifier trait and strategy selection |
//! | [`threshold`] | Rule-cascade classifier |
//! | [`coverage`] | Template-overlap (Jaccard) classifier |
//! | [`shape`] | Recognized shape descriptors and emitted objects |
//! | [`config`] | Tuning thresholds and validation |
//! | [`point`] | Sample point and bounding-box primitives |
//! | [`consts`] | Default tuning constants |

pub mod classify;
pub mod config;
pub mod consts;
pub mod coverage;
pub mod engine;
pub mod features;
pub mod point;
pub mod sampler;
pub mod shape;
pub mod simplify;
pub mod threshold;
