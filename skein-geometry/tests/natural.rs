use skein_geometry::*;

#[test]
fn interpolates_every_point_with_endpoints() {
    let points = vec![
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 2.0),
        Vector2::new(3.0, -1.0),
        Vector2::new(4.5, 1.0),
        Vector2::new(6.0, 0.0),
    ];
    for alpha in [0.0, 0.5] {
        let spline = NaturalSpline::new(&points, true, alpha, EndCondition::Natural);
        assert_eq!(spline.segment_count(), 4);
        for (i, point) in points.iter().enumerate() {
            assert_near!(spline.position(spline.segment_t(i)), *point);
        }
    }
}

#[test]
fn natural_ends_have_zero_curvature() {
    let points = vec![
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 2.0),
        Vector2::new(2.0, -1.0),
        Vector2::new(3.0, 1.0),
    ];
    let spline = NaturalSpline::new(&points, true, 0.0, EndCondition::Natural);
    assert_near!(spline.curvature(0.0).curvature, Vector2::new(0.0, 0.0));
    assert_near!(spline.curvature(spline.max_t()).curvature, Vector2::new(0.0, 0.0));
}

#[test]
fn excluded_endpoints_only_guide_the_shape() {
    let points = vec![
        Vector2::new(-1.0, 5.0),
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 1.0),
        Vector2::new(2.0, 0.5),
        Vector2::new(3.0, -4.0),
    ];
    let spline = NaturalSpline::new(&points, false, 0.0, EndCondition::Natural);
    assert_eq!(spline.segment_count(), 2);
    assert_near!(spline.position(0.0), points[1]);
    assert_near!(spline.position(spline.max_t()), points[3]);
    // the guide points sit outside the parameter range
    assert!(spline.knot(0) < 0.0);
    assert!(spline.knot(4) > spline.max_t());
}

#[test]
fn curvature_is_continuous_at_interior_knots() {
    let points = vec![
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 2.0),
        Vector2::new(2.5, -1.0),
        Vector2::new(4.0, 1.5),
        Vector2::new(5.0, 0.0),
    ];
    let spline = NaturalSpline::new(&points, true, 0.5, EndCondition::Natural);
    for i in 1..spline.segment_count() {
        let t = spline.segment_t(i);
        let left = spline.curvature(t - 1.0e-9).curvature;
        let right = spline.curvature(t).curvature;
        assert_near!(left, right);
    }
}

#[test]
fn not_a_knot_reproduces_a_single_cubic() {
    // four samples of one cubic: with both third-derivative constraints the
    // spline must collapse to exactly that cubic
    let f = |x: f64| x * x * x - 2.0 * x * x + 3.0 * x - 1.0;
    let points: Vec<Vector2> = (0..4).map(|i| Vector2::new(i as f64, f(i as f64))).collect();
    let spline = NaturalSpline::new(&points, true, 0.0, EndCondition::NotAKnot);

    for i in 0..=30 {
        let t = 3.0 * i as f64 / 30.0;
        assert_near!(spline.position(t), Vector2::new(t, f(t)), "t = {}", t);
    }
}

#[test]
fn not_a_knot_with_more_points_still_interpolates() {
    let points = vec![
        Vector2::new(0.0, 1.0),
        Vector2::new(1.5, 3.0),
        Vector2::new(2.0, -1.0),
        Vector2::new(3.5, 0.5),
        Vector2::new(5.0, 2.0),
        Vector2::new(6.0, 0.0),
    ];
    let spline = NaturalSpline::new(&points, true, 0.4, EndCondition::NotAKnot);
    for (i, point) in points.iter().enumerate() {
        assert_near!(spline.position(spline.segment_t(i)), *point);
    }
}

#[test]
fn looping_natural_closes_smoothly() {
    let points = vec![
        Vector2::new(3.0, 0.0),
        Vector2::new(0.0, 2.0),
        Vector2::new(-3.0, 0.5),
        Vector2::new(-1.0, -2.0),
        Vector2::new(2.0, -1.5),
    ];
    let spline = LoopingNaturalSpline::new(&points, 0.5);
    assert_eq!(spline.max_t(), 5.0);

    for (i, point) in points.iter().enumerate() {
        assert_near!(spline.position(spline.knot(i as i32)), *point);
    }

    // position, tangent, and curvature are all continuous across the seam
    let just_before = spline.wiggle(5.0 - 1.0e-9);
    let at_start = spline.wiggle(0.0);
    assert_near!(just_before.position, at_start.position);
    assert_near!(just_before.tangent, at_start.tangent);
    assert_near!(just_before.curvature, at_start.curvature);
}

#[test]
fn construction_rejects_bad_input() {
    let two = vec![Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0)];
    assert_eq!(
        NaturalSpline::try_new(&two, true, 0.0, EndCondition::Natural),
        Err(Error::TooFewPoints { required: 3, supplied: 2 }),
    );
    let three = vec![Vector2::new(0.0, 0.0), Vector2::new(1.0, 1.0), Vector2::new(2.0, 0.0)];
    assert_eq!(
        NaturalSpline::try_new(&three, false, 0.0, EndCondition::Natural),
        Err(Error::TooFewPoints { required: 4, supplied: 3 }),
    );
    // not-a-knot needs an extra point to pin both end conditions
    assert_eq!(
        NaturalSpline::try_new(&three, true, 0.0, EndCondition::NotAKnot),
        Err(Error::TooFewPoints { required: 4, supplied: 3 }),
    );
    assert_eq!(
        LoopingNaturalSpline::try_new(&two, 0.0),
        Err(Error::TooFewPoints { required: 3, supplied: 2 }),
    );
}
