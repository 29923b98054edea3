//! Arc-length behavior of the concrete families, including the known-length
//! cases where the answer has a closed form.

use skein_geometry::*;
use std::f64::consts::PI;

// control points on a line at the triangle numbers: collinear but far from
// uniformly spaced, which exercises the integrator on varying speed
fn triangle_number_points(count: usize) -> Vec<Vector2> {
    (0..count)
        .map(|i| {
            let triangle = (i * (i + 1) / 2) as f64;
            Vector2::new(triangle, triangle)
        })
        .collect()
}

fn circle_points(count: usize, radius: f64) -> Vec<Vector2> {
    (0..count)
        .map(|i| {
            let angle = 2.0 * PI * i as f64 / count as f64;
            Vector2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

#[test]
fn straight_line_arc_length_is_the_chord() {
    let points = triangle_number_points(10);
    let spline = UniformCrSpline::new(&points);

    assert_eq!(spline.max_t(), 7.0);
    let expected = (points[8] - points[1]).magnitude();
    assert!(
        (spline.arc_length(0.0, spline.max_t()) - expected).abs() < 1.0e-6 * expected,
        "arc length along a line must equal the endpoint distance",
    );
    assert!((spline.total_length() - expected).abs() < 1.0e-6 * expected);
}

#[test]
fn partial_arc_length_is_the_chord_between_positions() {
    let points = triangle_number_points(10);
    let spline = UniformCrSpline::new(&points);

    let (a, b) = (1.75, 5.25);
    let expected = (spline.position(b) - spline.position(a)).magnitude();
    assert!((spline.arc_length(a, b) - expected).abs() < 1.0e-6 * expected);

    // a and b inside the same segment
    let (a, b) = (3.2, 3.6);
    let expected = (spline.position(b) - spline.position(a)).magnitude();
    assert!((spline.arc_length(a, b) - expected).abs() < 1.0e-6 * expected);
}

#[test]
fn solve_length_round_trip_on_triangle_numbers() {
    let points = triangle_number_points(10);
    let spline = UniformCrSpline::new(&points);

    let a = 1.75;
    let length = spline.arc_length(a, 5.25);
    let solved = arclength::solve_length(&spline, a, length);
    assert!((solved - 5.25).abs() < 1.0e-4, "solved = {solved}");

    // beyond the end of the curve
    let solved = arclength::solve_length(&spline, a, spline.total_length());
    assert_eq!(solved, spline.max_t());
}

#[test]
fn alpha_parameterized_hermite_round_trip() {
    let points = vec![
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 2.5),
        Vector2::new(3.5, 3.0),
        Vector2::new(5.0, 0.5),
        Vector2::new(7.0, 1.0),
        Vector2::new(8.0, 4.0),
    ];
    let spline = CubicHermiteSpline::new(&points, 0.5);
    for (a, b) in [(0.4, 2.6), (1.1, 1.4), (0.0, 3.0)] {
        let length = spline.arc_length(a, b);
        let solved = arclength::solve_length(&spline, a, length);
        assert!((solved - b).abs() < 1.0e-3, "a = {a}, b = {b}, solved = {solved}");
    }
}

#[test]
fn looping_quintic_circle_wraps() {
    let spline = LoopingQuinticHermiteSpline::new(&circle_points(8, 1.0), 0.0);
    assert_eq!(spline.max_t(), 8.0);
    assert_near!(spline.position(0.0), spline.position(8.0));

    let total = spline.total_length();
    // the curve stays close to the unit circle, so its length sits between
    // the inscribed polygon and a hair above the circumference
    let polygon = 16.0 * (PI / 8.0).sin();
    assert!(total > polygon && (total - 2.0 * PI) < 0.05, "total = {total}");

    assert!((spline.cyclic_arc_length(0.0, 8.0) - total).abs() < 1.0e-9);
    assert!((spline.cyclic_arc_length(0.0, 16.0) - total).abs() < 1.0e-9);

    // two and a half revolutions end up halfway around, two loops later
    let solved = arclength::solve_length_cyclic(&spline, 0.0, total * 2.5);
    assert!((solved - 20.0).abs() < 1.0e-2, "solved = {solved}");
}

#[test]
fn cyclic_arc_length_walks_forward() {
    let spline = LoopingCubicHermiteSpline::new(&circle_points(6, 2.0), 0.5);
    let (a, b) = (1.3, 4.9);
    let forward = spline.arc_length(a, b);
    let total = spline.total_length();

    assert!((spline.cyclic_arc_length(a, b) - forward).abs() < 1.0e-9);
    assert!((spline.cyclic_arc_length(b, a) - (total - forward)).abs() < 1.0e-6);
    assert!((spline.cyclic_arc_length(a + 6.0, b) - forward).abs() < 1.0e-6);
}

#[test]
fn partition_splits_a_known_length() {
    let points = triangle_number_points(10);
    let spline = UniformCrSpline::new(&points);
    let total = spline.total_length();

    let pieces = arclength::partition(&spline, total / 4.2);
    assert_eq!(pieces.len(), 5);
    for pair in pieces.windows(2) {
        let got = spline.arc_length(pair[0], pair[1]);
        assert!((got - total / 4.2).abs() < 1.0e-3);
    }

    let even = arclength::partition_n(&spline, 7);
    assert_eq!(even.len(), 8);
    assert_eq!(even[7], spline.max_t());
    for pair in even.windows(2) {
        let got = spline.arc_length(pair[0], pair[1]);
        assert!((got - total / 7.0).abs() < 1.0e-3);
    }
}
