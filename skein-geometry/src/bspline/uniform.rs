//! Uniform cubic B-splines: integer knots, the classic 1/6-weighted basis,
//! and nothing stored but the control points.

use crate::errors::Error;
use crate::hermite::uniform::rotate_for_loop;
use crate::*;
use serde::{Deserialize, Serialize};

// Evaluator shared by the open and looping types: segment `i` covers
// `[i, i+1]` and is weighted over the four points `i..i+3`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct UniformBSplineCore<V> {
    points: Vec<V>,
}

impl<V: InnerSpace<Scalar = f64>> UniformBSplineCore<V> {
    fn max_t(&self) -> f64 { self.segment_count() as f64 }

    fn segment_count(&self) -> usize { self.points.len() - 3 }

    fn segment_for_t(&self, t: f64) -> usize {
        if t <= 0.0 {
            0
        } else {
            (t as usize).min(self.segment_count() - 1)
        }
    }

    fn segment_t(&self, index: usize) -> f64 { index as f64 }

    fn locate(&self, t: f64) -> (usize, f64) {
        let index = self.segment_for_t(t);
        (index, t - index as f64)
    }

    fn position(&self, t: f64) -> V {
        let (index, u) = self.locate(t);
        self.compute_position(index, u)
    }

    fn tangent(&self, t: f64) -> WithTangent<V> {
        let (index, u) = self.locate(t);
        WithTangent {
            position: self.compute_position(index, u),
            tangent: self.compute_tangent(index, u),
        }
    }

    fn curvature(&self, t: f64) -> WithCurvature<V> {
        let (index, u) = self.locate(t);
        WithCurvature {
            position: self.compute_position(index, u),
            tangent: self.compute_tangent(index, u),
            curvature: self.compute_curvature(index, u),
        }
    }

    fn wiggle(&self, t: f64) -> WithWiggle<V> {
        let (index, u) = self.locate(t);
        WithWiggle {
            position: self.compute_position(index, u),
            tangent: self.compute_tangent(index, u),
            curvature: self.compute_curvature(index, u),
            wiggle: self.compute_wiggle(index),
        }
    }

    fn segment_length(&self, index: usize, a: f64, b: f64) -> f64 {
        let speed = |u: f64| self.compute_tangent(index, u).magnitude();
        skein_base::quadrature::gauss_legendre(speed, a, b)
    }

    fn compute_position(&self, index: usize, u: f64) -> V {
        let one_minus = 1.0 - u;
        (self.points[index] * (one_minus * one_minus * one_minus)
            + self.points[index + 1] * (u * u * 3.0 * (u - 2.0) + 4.0)
            + self.points[index + 2] * (u * (u * (-3.0 * u + 3.0) + 3.0) + 1.0)
            + self.points[index + 3] * (u * u * u))
            / 6.0
    }

    fn compute_tangent(&self, index: usize, u: f64) -> V {
        let one_minus = 1.0 - u;
        (self.points[index] * (-one_minus * one_minus)
            + self.points[index + 1] * (u * (3.0 * u - 4.0))
            + self.points[index + 2] * ((3.0 * u + 1.0) * one_minus)
            + self.points[index + 3] * (u * u))
            / 2.0
    }

    fn compute_curvature(&self, index: usize, u: f64) -> V {
        self.points[index] * (1.0 - u)
            + self.points[index + 1] * (3.0 * u - 2.0)
            + self.points[index + 2] * (1.0 - 3.0 * u)
            + self.points[index + 3] * u
    }

    fn compute_wiggle(&self, index: usize) -> V {
        (self.points[index + 1] - self.points[index + 2]) * 3.0
            + (self.points[index + 3] - self.points[index])
    }
}

/// Uniform cubic B-spline.
///
/// The curve approximates rather than interpolates its control points; it
/// begins inside the hull of `points[0..3]` and ends inside the hull of the
/// last three, with `max_t = N - 3`.
/// # Examples
/// ```
/// use skein_geometry::*;
/// let points: Vec<Vector2> = (0..6).map(|i| Vector2::new(i as f64, 0.0)).collect();
/// let spline = UniformBSpline::new(&points);
/// assert_eq!(spline.max_t(), 3.0);
/// // on a straight uniform run the B-spline collapses to the line
/// assert_near!(spline.position(0.0), points[1]);
/// assert_near!(spline.position(1.5), Vector2::new(2.5, 0.0));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UniformBSpline<V> {
    core: UniformBSplineCore<V>,
    knots: KnotTable,
}

impl<V: InnerSpace<Scalar = f64>> UniformBSpline<V> {
    /// constructor.
    /// # Panics
    /// Panics when fewer than 4 control points are supplied.
    pub fn new(points: &[V]) -> UniformBSpline<V> {
        UniformBSpline::try_new(points).unwrap_or_else(|e| panic!("{}", e))
    }

    /// constructor.
    /// # Failures
    /// Returns [`Error::TooFewPoints`] when fewer than 4 control points are
    /// supplied.
    pub fn try_new(points: &[V]) -> Result<UniformBSpline<V>> {
        if points.len() < 4 {
            return Err(Error::TooFewPoints { required: 4, supplied: points.len() });
        }
        Ok(UniformBSpline {
            core: UniformBSplineCore { points: points.to_vec() },
            knots: KnotTable::with_inner_padding(points, 0.0, 1),
        })
    }
}

impl_open_spline!(UniformBSpline);

/// Uniform cubic B-spline that closes into a loop; `max_t` equals the point
/// count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoopingUniformBSpline<V> {
    core: UniformBSplineCore<V>,
    knots: KnotTable,
}

impl<V: InnerSpace<Scalar = f64>> LoopingUniformBSpline<V> {
    /// constructor.
    /// # Panics
    /// Panics when fewer than 3 control points are supplied.
    pub fn new(points: &[V]) -> LoopingUniformBSpline<V> {
        LoopingUniformBSpline::try_new(points).unwrap_or_else(|e| panic!("{}", e))
    }

    /// constructor.
    /// # Failures
    /// Returns [`Error::TooFewPoints`] when fewer than 3 control points are
    /// supplied.
    pub fn try_new(points: &[V]) -> Result<LoopingUniformBSpline<V>> {
        if points.len() < 3 {
            return Err(Error::TooFewPoints { required: 3, supplied: points.len() });
        }
        Ok(LoopingUniformBSpline {
            core: UniformBSplineCore { points: rotate_for_loop(points, 3) },
            knots: KnotTable::looping(points, 0.0, 1),
        })
    }
}

impl_looping_spline!(LoopingUniformBSpline);
