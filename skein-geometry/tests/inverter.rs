//! Nearest-point queries against the concrete families.

use skein_geometry::inverter::SplineInverter;
use skein_geometry::*;
use std::f64::consts::PI;

#[test]
fn diagonal_hermite_projects_the_query() {
    // collinear uniform Catmull-Rom: the curve is exactly the line y = x,
    // so the closest point to (0.4, 0) is its projection (0.2, 0.2)
    let points = vec![
        Vector2::new(-1.0, -1.0),
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 1.0),
        Vector2::new(2.0, 2.0),
    ];
    let spline = CubicHermiteSpline::new(&points, 0.0);
    let inverter = SplineInverter::new(&spline);

    let closest = inverter.closest_t(Vector2::new(0.4, 0.0));
    assert!((closest - 0.2).abs() < 1.0e-3, "closest = {closest}");
}

#[test]
fn query_on_the_curve_returns_its_parameter() {
    let points = vec![
        Vector2::new(0.0, 0.0),
        Vector2::new(2.0, 1.0),
        Vector2::new(4.0, -1.0),
        Vector2::new(6.0, 2.0),
        Vector2::new(8.0, 0.0),
    ];
    let spline = CubicHermiteSpline::new(&points, 0.5);
    let inverter = SplineInverter::new(&spline);

    for i in 1..10 {
        let t = spline.max_t() * i as f64 / 10.0;
        let closest = inverter.closest_t(spline.position(t));
        let distance = spline.position(closest).distance(spline.position(t));
        assert!(distance < 0.05, "t = {t}, closest = {closest}");
    }
}

#[test]
fn endpoints_catch_outward_queries() {
    let points = vec![
        Vector2::new(-1.0, 0.0),
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 0.5),
        Vector2::new(2.0, 1.5),
        Vector2::new(3.0, 1.5),
    ];
    let spline = CubicHermiteSpline::new(&points, 0.0);
    let inverter = SplineInverter::new(&spline);

    // far off the front of the curve
    assert_eq!(inverter.closest_t(Vector2::new(-5.0, -1.0)), 0.0);
    // far off the back
    assert_eq!(inverter.closest_t(Vector2::new(8.0, 3.0)), spline.max_t());
}

#[test]
fn looping_spline_answers_across_the_seam() {
    let points: Vec<Vector2> = (0..8)
        .map(|i| {
            let angle = 2.0 * PI * i as f64 / 8.0;
            Vector2::new(angle.cos(), angle.sin()) * 3.0
        })
        .collect();
    let spline = LoopingCubicHermiteSpline::new(&points, 0.5);
    let inverter = SplineInverter::new(&spline);

    // a query just below the positive x axis is closest to the loop seam
    let closest = inverter.closest_t(Vector2::new(4.0, -0.05));
    let expected = spline.position(0.0);
    assert!(spline.position(closest).distance(expected) < 0.1, "closest = {closest}");
}

#[test]
fn denser_sampling_resolves_tight_lobes() {
    // a hairpin: the sparse sampler could land on the wrong branch
    let points = vec![
        Vector2::new(0.0, 0.0),
        Vector2::new(4.0, 0.0),
        Vector2::new(8.0, 0.1),
        Vector2::new(4.0, 0.2),
        Vector2::new(0.0, 0.2),
        Vector2::new(-4.0, 0.2),
    ];
    let spline = CubicHermiteSpline::new(&points, 0.0);
    let inverter = SplineInverter::with_samples_per_t(&spline, 100);

    let query = Vector2::new(2.0, 0.15);
    let closest = inverter.closest_t(query);
    let closest_position = spline.position(closest);
    // the answer must sit on the returning branch, not the outgoing one
    assert!(closest_position.y > 0.1, "position = {closest_position:?}");
}
