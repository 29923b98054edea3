//! B-splines of arbitrary degree, evaluated by de Boor's recursion over an
//! outer-padded knot vector. Derivatives use the standard B-spline
//! derivative recursion; orders beyond the degree are zero.

use crate::errors::Error;
use crate::hermite::uniform::rotate_for_loop;
use crate::knots::segment_index;
use crate::*;
use serde::{Deserialize, Serialize};

// Evaluator shared by the open and looping types. `knots` is the full
// padded array: the knot of segment boundary `i` sits at array index
// `i + degree - 1`. The recursion runs on a small stack frame per degree
// level; no heap allocation happens per query.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct GenericBSplineCore<V> {
    positions: Vec<V>,
    knots: Vec<f64>,
    degree: usize,
}

impl<V: InnerSpace<Scalar = f64>> GenericBSplineCore<V> {
    fn max_t(&self) -> f64 { self.segment_t(self.segment_count()) }

    fn segment_count(&self) -> usize { self.positions.len() - self.degree }

    fn segment_for_t(&self, t: f64) -> usize {
        let bounds = &self.knots[self.degree - 1..self.degree + self.segment_count()];
        segment_index(bounds, t).min(self.segment_count() - 1)
    }

    fn segment_t(&self, index: usize) -> f64 { self.knots[index + self.degree - 1] }

    fn position(&self, t: f64) -> V {
        let start = self.segment_for_t(t) + self.degree;
        self.deboor(start, self.degree, t)
    }

    fn tangent(&self, t: f64) -> WithTangent<V> {
        let start = self.segment_for_t(t) + self.degree;
        WithTangent {
            position: self.deboor(start, self.degree, t),
            tangent: self.deboor_derivative(start, self.degree, t, 1),
        }
    }

    fn curvature(&self, t: f64) -> WithCurvature<V> {
        let start = self.segment_for_t(t) + self.degree;
        WithCurvature {
            position: self.deboor(start, self.degree, t),
            tangent: self.deboor_derivative(start, self.degree, t, 1),
            curvature: self.deboor_derivative(start, self.degree, t, 2),
        }
    }

    fn wiggle(&self, t: f64) -> WithWiggle<V> {
        let start = self.segment_for_t(t) + self.degree;
        WithWiggle {
            position: self.deboor(start, self.degree, t),
            tangent: self.deboor_derivative(start, self.degree, t, 1),
            curvature: self.deboor_derivative(start, self.degree, t, 2),
            wiggle: self.deboor_derivative(start, self.degree, t, 3),
        }
    }

    fn segment_length(&self, index: usize, a: f64, b: f64) -> f64 {
        let begin = self.segment_t(index);
        let span = self.segment_t(index + 1) - begin;
        let start = index + self.degree;
        let speed = |t: f64| self.deboor_derivative(start, self.degree, t, 1).magnitude();
        skein_base::quadrature::gauss_legendre(speed, begin + a * span, begin + b * span)
    }

    // de Boor's recursion: blends the two degree-lowered evaluations by the
    // position of `t` in the support of the current control point
    fn deboor(&self, knot_index: usize, degree: usize, t: f64) -> V {
        if degree == 0 {
            self.positions[knot_index]
        } else {
            let begin = self.knots[knot_index - 1];
            let end = self.knots[knot_index + self.degree - degree];
            let alpha = (t - begin) / (end - begin);

            self.deboor(knot_index - 1, degree - 1, t) * (1.0 - alpha)
                + self.deboor(knot_index, degree - 1, t) * alpha
        }
    }

    // each derivative level multiplies by degree / knot-span and recurses
    // into the difference of the adjacent degree-lowered evaluations
    fn deboor_derivative(&self, knot_index: usize, degree: usize, t: f64, level: usize) -> V {
        if degree == 0 {
            // the requested derivative order exceeds this spline's degree
            V::zero()
        } else {
            let begin = self.knots[knot_index - 1];
            let end = self.knots[knot_index + self.degree - degree];
            let multiplier = degree as f64 / (end - begin);

            let difference = if level <= 1 {
                self.deboor(knot_index, degree - 1, t) - self.deboor(knot_index - 1, degree - 1, t)
            } else {
                self.deboor_derivative(knot_index, degree - 1, t, level - 1)
                    - self.deboor_derivative(knot_index - 1, degree - 1, t, level - 1)
            };
            difference * multiplier
        }
    }
}

/// B-spline of arbitrary degree.
///
/// All `N` control points are active with knots `0..N-1`; the curve covers
/// `[0, N - degree]`. Knots beyond the ends are extrapolated by mirroring
/// the nearest spacing and exist only for the basis recursion.
/// # Examples
/// ```
/// use skein_geometry::*;
/// let points: Vec<Vector2> = (0..6).map(|i| Vector2::new(i as f64, 0.0)).collect();
/// let spline = GenericBSpline::new(&points, 3);
/// assert_eq!(spline.max_t(), 3.0);
/// assert_eq!(spline.segment_count(), 3);
/// // degree-3 generic and uniform cubic agree on the same points
/// let uniform = UniformBSpline::new(&points);
/// assert_near!(spline.position(1.25), uniform.position(1.25));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenericBSpline<V> {
    core: GenericBSplineCore<V>,
    knots: KnotTable,
}

impl<V: InnerSpace<Scalar = f64>> GenericBSpline<V> {
    /// constructor.
    /// # Panics
    /// Panics per the failures of [`try_new`](GenericBSpline::try_new).
    pub fn new(points: &[V], degree: usize) -> GenericBSpline<V> {
        GenericBSpline::try_new(points, degree).unwrap_or_else(|e| panic!("{}", e))
    }

    /// constructor.
    /// # Failures
    /// - Returns [`Error::ZeroDegree`] when `degree` is zero.
    /// - Returns [`Error::TooFewPoints`] unless there are more control
    ///   points than the degree.
    pub fn try_new(points: &[V], degree: usize) -> Result<GenericBSpline<V>> {
        if degree == 0 {
            return Err(Error::ZeroDegree);
        }
        if points.len() <= degree {
            return Err(Error::TooFewPoints { required: degree + 1, supplied: points.len() });
        }
        let size = points.len();
        let padding = degree - 1;
        let knots = KnotTable::with_outer_padding(points, 0.0, padding);
        let core = GenericBSplineCore {
            positions: points.to_vec(),
            knots: knots.run(-(padding as i32), size + 2 * padding),
            degree,
        };
        Ok(GenericBSpline { core, knots })
    }
}

impl_open_spline!(GenericBSpline);

/// B-spline of arbitrary degree closed into a loop; `max_t` equals the
/// point count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoopingGenericBSpline<V> {
    core: GenericBSplineCore<V>,
    knots: KnotTable,
}

impl<V: InnerSpace<Scalar = f64>> LoopingGenericBSpline<V> {
    /// constructor.
    /// # Panics
    /// Panics per the failures of [`try_new`](LoopingGenericBSpline::try_new).
    pub fn new(points: &[V], degree: usize) -> LoopingGenericBSpline<V> {
        LoopingGenericBSpline::try_new(points, degree).unwrap_or_else(|e| panic!("{}", e))
    }

    /// constructor.
    /// # Failures
    /// - Returns [`Error::ZeroDegree`] when `degree` is zero.
    /// - Returns [`Error::TooFewPoints`] unless there are more control
    ///   points than the degree.
    pub fn try_new(points: &[V], degree: usize) -> Result<LoopingGenericBSpline<V>> {
        if degree == 0 {
            return Err(Error::ZeroDegree);
        }
        if points.len() <= degree {
            return Err(Error::TooFewPoints { required: degree + 1, supplied: points.len() });
        }
        let size = points.len();
        let padding = degree - 1;
        let knots = KnotTable::looping(points, 0.0, 2 * degree);
        let positions = rotate_for_loop(points, degree);
        let core = GenericBSplineCore {
            knots: knots.run(-(padding as i32), positions.len() + 2 * padding),
            positions,
            degree,
        };
        Ok(LoopingGenericBSpline { core, knots })
    }
}

impl_looping_spline!(LoopingGenericBSpline);
