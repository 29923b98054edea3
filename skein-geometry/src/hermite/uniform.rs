//! Uniform Catmull-Rom splines: the alpha-0 specialization that stores
//! nothing but the control points. Knots are the integers, tangents are
//! centered differences computed on the fly, and the segment lookup is a
//! single truncation.

use crate::errors::Error;
use crate::*;
use serde::{Deserialize, Serialize};

// Evaluator shared by the open and looping types: segment `i` covers
// `[i, i+1]` and interpolates points `i+1` and `i+2` of the stored window
// (the looping constructor rotates the last point to the front so the same
// indexing holds).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct UniformCrCore<V> {
    points: Vec<V>,
}

impl<V: InnerSpace<Scalar = f64>> UniformCrCore<V> {
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

    // centered difference; with unit knot spacing no alpha correction exists
    fn tangent_at(&self, index: usize) -> V {
        (self.points[index + 1] - self.points[index - 1]) / 2.0
    }

    fn compute_position(&self, index: usize, u: f64) -> V {
        let one_minus = 1.0 - u;

        let basis00 = (1.0 + 2.0 * u) * one_minus * one_minus;
        let basis10 = u * one_minus * one_minus;
        let basis11 = -u * u * one_minus;
        let basis01 = u * u * (3.0 - 2.0 * u);

        self.points[index + 1] * basis00
            + self.tangent_at(index + 1) * basis10
            + self.tangent_at(index + 2) * basis11
            + self.points[index + 2] * basis01
    }

    fn compute_tangent(&self, index: usize, u: f64) -> V {
        let one_minus = 1.0 - u;

        let d_basis00 = 6.0 * u * (u - 1.0);
        let d_basis10 = (1.0 - 3.0 * u) * one_minus;
        let d_basis11 = u * (3.0 * u - 2.0);
        let d_basis01 = -d_basis00;

        self.points[index + 1] * d_basis00
            + self.tangent_at(index + 1) * d_basis10
            + self.tangent_at(index + 2) * d_basis11
            + self.points[index + 2] * d_basis01
    }

    fn compute_curvature(&self, index: usize, u: f64) -> V {
        let d2_basis00 = 6.0 * (2.0 * u - 1.0);
        let d2_basis10 = 2.0 * (3.0 * u - 2.0);
        let d2_basis11 = 2.0 * (3.0 * u - 1.0);
        let d2_basis01 = -d2_basis00;

        self.points[index + 1] * d2_basis00
            + self.tangent_at(index + 1) * d2_basis10
            + self.tangent_at(index + 2) * d2_basis11
            + self.points[index + 2] * d2_basis01
    }

    fn compute_wiggle(&self, index: usize) -> V {
        (self.points[index + 1] - self.points[index + 2]) * 12.0
            + (self.tangent_at(index + 1) + self.tangent_at(index + 2)) * 6.0
    }
}

/// Uniform Catmull-Rom spline.
///
/// The first and last control points only steer tangents, so the curve runs
/// from `points[1]` at `t = 0` to `points[N-2]` at `t = max_t = N - 3`.
/// # Examples
/// ```
/// use skein_geometry::*;
/// let points: Vec<Vector2> = (0..5).map(|i| Vector2::new(i as f64, 0.0)).collect();
/// let spline = UniformCrSpline::new(&points);
/// assert_eq!(spline.max_t(), 2.0);
/// assert_near!(spline.position(0.0), points[1]);
/// assert_near!(spline.position(2.0), points[3]);
/// assert_near!(spline.knot(0), -1.0);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UniformCrSpline<V> {
    core: UniformCrCore<V>,
    knots: KnotTable,
}

impl<V: InnerSpace<Scalar = f64>> UniformCrSpline<V> {
    /// constructor.
    /// # Panics
    /// Panics when fewer than 4 control points are supplied.
    pub fn new(points: &[V]) -> UniformCrSpline<V> {
        UniformCrSpline::try_new(points).unwrap_or_else(|e| panic!("{}", e))
    }

    /// constructor.
    /// # Failures
    /// Returns [`Error::TooFewPoints`] when fewer than 4 control points are
    /// supplied.
    pub fn try_new(points: &[V]) -> Result<UniformCrSpline<V>> {
        if points.len() < 4 {
            return Err(Error::TooFewPoints { required: 4, supplied: points.len() });
        }
        Ok(UniformCrSpline {
            core: UniformCrCore { points: points.to_vec() },
            knots: KnotTable::with_inner_padding(points, 0.0, 1),
        })
    }
}

impl_open_spline!(UniformCrSpline);

/// Uniform Catmull-Rom spline that loops back to its first control point.
///
/// Every control point is interpolated; `max_t` equals the point count.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoopingUniformCrSpline<V> {
    core: UniformCrCore<V>,
    knots: KnotTable,
}

impl<V: InnerSpace<Scalar = f64>> LoopingUniformCrSpline<V> {
    /// constructor.
    /// # Panics
    /// Panics when fewer than 4 control points are supplied.
    pub fn new(points: &[V]) -> LoopingUniformCrSpline<V> {
        LoopingUniformCrSpline::try_new(points).unwrap_or_else(|e| panic!("{}", e))
    }

    /// constructor.
    /// # Failures
    /// Returns [`Error::TooFewPoints`] when fewer than 4 control points are
    /// supplied.
    pub fn try_new(points: &[V]) -> Result<LoopingUniformCrSpline<V>> {
        if points.len() < 4 {
            return Err(Error::TooFewPoints { required: 4, supplied: points.len() });
        }
        Ok(LoopingUniformCrSpline {
            core: UniformCrCore { points: rotate_for_loop(points, 3) },
            knots: KnotTable::looping(points, 0.0, 1),
        })
    }
}

impl_looping_spline!(LoopingUniformCrSpline);

// Appends wrap-around neighbors so a windowed evaluator needs no modular
// arithmetic: the last point is rotated to the front, then the first
// `extra - 1` points repeat at the back.
pub(crate) fn rotate_for_loop<V: Copy>(points: &[V], extra: usize) -> Vec<V> {
    let mut wrapped = Vec::with_capacity(points.len() + extra);
    wrapped.push(points[points.len() - 1]);
    wrapped.extend_from_slice(points);
    wrapped.extend_from_slice(&points[..extra - 1]);
    wrapped
}
