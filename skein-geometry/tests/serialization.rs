//! Serialized splines must deserialize to values that answer every query
//! identically.

use skein_geometry::*;

fn sample_points() -> Vec<Vector2> {
    vec![
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 2.5),
        Vector2::new(3.0, 3.0),
        Vector2::new(4.5, 0.5),
        Vector2::new(6.0, 1.0),
        Vector2::new(7.0, 4.0),
    ]
}

fn assert_same_curve<S: Spline<Vector = Vector2>>(original: &S, restored: &S) {
    assert_eq!(original.max_t(), restored.max_t());
    assert_eq!(original.segment_count(), restored.segment_count());
    for i in 0..=64 {
        let t = original.max_t() * i as f64 / 64.0;
        assert_eq!(original.position(t), restored.position(t));
        assert_eq!(original.wiggle(t), restored.wiggle(t));
    }
}

#[test]
fn hermite_round_trip() {
    let spline = CubicHermiteSpline::new(&sample_points(), 0.5);
    let json = serde_json::to_string(&spline).unwrap();
    let restored: CubicHermiteSpline<Vector2> = serde_json::from_str(&json).unwrap();
    assert_eq!(spline, restored);
    assert_same_curve(&spline, &restored);
}

#[test]
fn generic_bspline_round_trip() {
    let spline = GenericBSpline::new(&sample_points(), 3);
    let json = serde_json::to_string(&spline).unwrap();
    let restored: GenericBSpline<Vector2> = serde_json::from_str(&json).unwrap();
    assert_eq!(spline, restored);
    assert_same_curve(&spline, &restored);
}

#[test]
fn looping_natural_round_trip() {
    let spline = LoopingNaturalSpline::new(&sample_points(), 0.3);
    let json = serde_json::to_string(&spline).unwrap();
    let restored: LoopingNaturalSpline<Vector2> = serde_json::from_str(&json).unwrap();
    assert_eq!(spline, restored);
    assert_same_curve(&spline, &restored);
}
