#![allow(clippy::float_cmp)]

use super::*;
use crate::simplify::simplify;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn cfg() -> RecognizerConfig {
    RecognizerConfig::default()
}

/// `n` points evenly spaced on a circle of radius `r` around `(cx, cy)`.
fn circle_points(cx: f64, cy: f64, r: f64, n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let theta = std::f64::consts::TAU * i as f64 / n as f64;
            Point::new(cx + r * theta.cos(), cy + r * theta.sin())
        })
        .collect()
}

fn diagonal_points(n: usize, step: f64) -> Vec<Point> {
    #[allow(clippy::cast_precision_loss)]
    (0..n).map(|i| Point::new(i as f64 * step, i as f64 * step)).collect()
}

// --- analyze ---

#[test]
fn analyze_empty_input_yields_inert_bundle() {
    let f = analyze(&[], &[], &cfg());
    assert_eq!(f.bounds, Bounds { x: 0.0, y: 0.0, width: 0.0, height: 0.0 });
    assert_eq!(f.centroid, Point::new(0.0, 0.0));
    assert!(!f.is_closed);
    assert_eq!(f.aspect_ratio, 1.0);
    assert_eq!(f.circularity, 0.0);
    assert!(f.corners.is_empty());
    assert!(f.corners_raw.is_empty());
}

#[test]
fn analyze_computes_bounds_and_centroid_from_raw_points() {
    let raw = vec![
        Point::new(0.0, 0.0),
        Point::new(100.0, 0.0),
        Point::new(100.0, 50.0),
        Point::new(0.0, 50.0),
    ];
    let f = analyze(&raw, &raw, &cfg());
    assert_eq!(f.bounds, Bounds { x: 0.0, y: 0.0, width: 100.0, height: 50.0 });
    assert_eq!(f.centroid, Point::new(50.0, 25.0));
    assert!(approx_eq(f.aspect_ratio, 2.0));
}

#[test]
fn aspect_ratio_floors_degenerate_dimensions() {
    // A perfectly vertical stroke has zero width; the floor keeps the
    // ratio finite.
    let raw = vec![Point::new(10.0, 0.0), Point::new(10.0, 25.0), Point::new(10.0, 50.0)];
    let f = analyze(&raw, &raw, &cfg());
    assert!(approx_eq(f.aspect_ratio, 1.0 / 50.0));
}

// --- is_closed ---

#[test]
fn closed_when_endpoints_within_threshold() {
    let pts = vec![Point::new(0.0, 0.0), Point::new(50.0, 30.0), Point::new(19.0, 0.0)];
    assert!(is_closed(&pts, 20.0));
}

#[test]
fn open_when_endpoints_beyond_threshold() {
    let pts = vec![Point::new(0.0, 0.0), Point::new(50.0, 30.0), Point::new(21.0, 0.0)];
    assert!(!is_closed(&pts, 20.0));
}

#[test]
fn closure_flips_as_last_point_crosses_threshold() {
    let mut pts = vec![Point::new(0.0, 0.0), Point::new(40.0, 40.0), Point::new(19.9, 0.0)];
    assert!(is_closed(&pts, 20.0));
    pts[2] = Point::new(20.1, 0.0);
    assert!(!is_closed(&pts, 20.0));
}

#[test]
fn two_points_are_never_closed() {
    let pts = vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)];
    assert!(!is_closed(&pts, 20.0));
}

// --- circularity ---

#[test]
fn circularity_of_circle_is_near_one() {
    let pts = circle_points(100.0, 100.0, 50.0, 64);
    let c = circularity(&pts, centroid(&pts));
    assert!(c >= 0.95, "got {c}");
}

#[test]
fn circularity_holds_for_small_radii() {
    let pts = circle_points(10.0, 10.0, 1.0, 32);
    let c = circularity(&pts, centroid(&pts));
    assert!(c >= 0.95, "got {c}");
}

#[test]
fn circularity_of_line_is_low() {
    let pts = diagonal_points(11, 10.0);
    let c = circularity(&pts, centroid(&pts));
    assert!(c < 0.75, "got {c}");
}

#[test]
fn circularity_of_degenerate_stroke_is_zero() {
    let p = Point::new(5.0, 5.0);
    let pts = vec![p, p, p];
    assert_eq!(circularity(&pts, centroid(&pts)), 0.0);
}

#[test]
fn circularity_is_clamped_at_zero() {
    // A lone far outlier against a tight cluster pushes the raw score
    // slightly negative; the lower bound is the only hard clamp. Fewer
    // than six clustered points leaves the raw score positive.
    let mut pts = vec![Point::new(0.0, 0.0); 6];
    pts.push(Point::new(900.0, 0.0));
    assert_eq!(circularity(&pts, centroid(&pts)), 0.0);
}

// --- detect_corners ---

#[test]
fn right_angle_is_detected_as_one_corner() {
    let pts = vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(20.0, 0.0),
        Point::new(30.0, 0.0),
        Point::new(30.0, 10.0),
        Point::new(30.0, 20.0),
        Point::new(30.0, 30.0),
    ];
    let corners = detect_corners(&pts, 2, 130.0);
    assert_eq!(corners.len(), 1);
    assert_eq!(corners[0].index, 3);
    assert_eq!(corners[0].point, Point::new(30.0, 0.0));
    assert!(approx_eq(corners[0].angle, 90.0));
}

#[test]
fn straight_run_has_no_corners() {
    let pts = diagonal_points(12, 10.0);
    assert!(detect_corners(&pts, 2, 130.0).is_empty());
}

#[test]
fn corners_within_dedup_window_merge_first_wins() {
    // The hairpin reads sharp at indexes 3 and 4; only the earlier survives.
    let pts = vec![
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(20.0, 0.0),
        Point::new(30.0, 0.0),
        Point::new(30.0, 10.0),
        Point::new(20.0, 10.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
    ];
    let corners = detect_corners(&pts, 2, 130.0);
    assert_eq!(corners.len(), 1);
    assert_eq!(corners[0].index, 3);
}

#[test]
fn window_excludes_sequence_ends() {
    // Same right angle as above but shifted to index 1: inside the
    // excluded leading window, so nothing is reported.
    let pts = vec![
        Point::new(20.0, 0.0),
        Point::new(30.0, 0.0),
        Point::new(30.0, 10.0),
        Point::new(30.0, 20.0),
    ];
    assert!(detect_corners(&pts, 2, 130.0).is_empty());
}

#[test]
fn short_input_has_no_corners() {
    let pts = vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
    assert!(detect_corners(&pts, 2, 130.0).is_empty());
}

#[test]
fn coincident_samples_do_not_read_as_corners() {
    let p = Point::new(5.0, 5.0);
    let pts = vec![p, p, p, p, p, p];
    assert!(detect_corners(&pts, 2, 130.0).is_empty());
}

// --- dual corner detection ---

#[test]
fn simplification_erases_corners_that_raw_detection_keeps() {
    // A rounded-square trace: simplification at a coarse tolerance strips
    // the intermediate points that carry the corner signal, which is why
    // the bundle keeps both corner sets.
    let mut raw = Vec::new();
    for i in 0..=10 {
        raw.push(Point::new(f64::from(i) * 10.0, 0.0));
    }
    for i in 1..=10 {
        raw.push(Point::new(100.0, f64::from(i) * 10.0));
    }
    let simplified = simplify(&raw, 200.0);
    let f = analyze(&raw, &simplified, &cfg());
    assert!(!f.corners_raw.is_empty());
    assert!(f.corners.is_empty());
    assert_eq!(f.preferred_corner_count(), f.corners_raw.len());
}

#[test]
fn preferred_corner_count_falls_back_to_simplified() {
    let f = Features {
        bounds: Bounds { x: 0.0, y: 0.0, width: 10.0, height: 10.0 },
        centroid: Point::new(5.0, 5.0),
        is_closed: true,
        aspect_ratio: 1.0,
        circularity: 0.9,
        corners: vec![Corner { index: 2, point: Point::new(1.0, 1.0), angle: 80.0 }],
        corners_raw: Vec::new(),
    };
    assert_eq!(f.preferred_corner_count(), 1);
}
