use thiserror::Error;

/// Error handler for [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Construction errors. A spline either constructs completely or not at
/// all; queries on a constructed spline never fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// Every family has a minimum number of control points, determined by
    /// how many neighbors its evaluator consumes.
    /// # Examples
    /// ```
    /// use skein_geometry::*;
    /// use skein_geometry::errors::Error;
    /// let points = vec![Vector2::new(0.0, 0.0), Vector2::new(1.0, 1.0)];
    /// assert_eq!(
    ///     UniformCrSpline::try_new(&points),
    ///     Err(Error::TooFewPoints { required: 4, supplied: 2 }),
    /// );
    /// ```
    #[error("this spline requires at least {required} control points, but {supplied} were supplied")]
    TooFewPoints {
        /// the family's minimum for the requested topology and mode
        required: usize,
        /// how many control points the caller passed
        supplied: usize,
    },
    /// Explicit Hermite constructors take one tangent per control point.
    /// # Examples
    /// ```
    /// use skein_geometry::*;
    /// use skein_geometry::errors::Error;
    /// let points = vec![Vector2::new(0.0, 0.0), Vector2::new(1.0, 1.0)];
    /// let tangents = vec![Vector2::new(1.0, 0.0)];
    /// assert_eq!(
    ///     CubicHermiteSpline::try_with_tangents(&points, &tangents, 0.0),
    ///     Err(Error::MismatchedTangents { points: 2, tangents: 1 }),
    /// );
    /// ```
    #[error("the number of tangents ({tangents}) must match the number of control points ({points})")]
    MismatchedTangents {
        /// how many control points the caller passed
        points: usize,
        /// how many tangents the caller passed
        tangents: usize,
    },
    /// Explicit quintic Hermite constructors take one curvature per control
    /// point.
    #[error("the number of curvatures ({curvatures}) must match the number of control points ({points})")]
    MismatchedCurvatures {
        /// how many control points the caller passed
        points: usize,
        /// how many curvatures the caller passed
        curvatures: usize,
    },
    /// A B-spline of degree zero would be a step function, not a curve.
    #[error("the B-spline degree must be at least 1")]
    ZeroDegree,
}

#[test]
fn print_messages() {
    use std::io::Write;
    let stderr = &mut std::io::stderr();
    writeln!(stderr, "{}", Error::TooFewPoints { required: 4, supplied: 2 }).unwrap();
    writeln!(stderr, "{}", Error::MismatchedTangents { points: 3, tangents: 2 }).unwrap();
    writeln!(stderr, "{}", Error::MismatchedCurvatures { points: 3, curvatures: 2 }).unwrap();
    writeln!(stderr, "{}", Error::ZeroDegree).unwrap();
}
